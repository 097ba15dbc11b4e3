/// Transport bootstrap shared by the MCP server binaries.
///
/// Servers are produced by a factory so that every TCP connection and every HTTP
/// session starts from its own fresh state. Stdio serves a single session.
use std::sync::Arc;

use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{ServerHandler, ServiceExt};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::CommonError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout.
    Stdio,
    /// One MCP session per accepted TCP connection.
    Tcp { addr: String },
    /// Streamable HTTP mounted at `path`.
    Http { addr: String, path: String },
}

pub async fn serve<S, F>(factory: F, transport: Transport) -> Result<(), CommonError>
where
    S: ServerHandler,
    F: Fn() -> S + Send + Sync + 'static,
{
    match transport {
        Transport::Stdio => {
            info!("MCP server ready, serving on stdio");
            let service = factory().serve(stdio()).await.map_err(|e| {
                error!(error = %e, "MCP server error");
                CommonError::Service(e.to_string())
            })?;
            service
                .waiting()
                .await
                .map_err(|e| CommonError::Service(e.to_string()))?;
            info!("MCP server shut down");
            Ok(())
        }
        Transport::Tcp { addr } => {
            let listener = TcpListener::bind(&addr).await?;
            info!(listen_addr = %addr, "MCP server ready, serving on TCP");
            loop {
                let (stream, peer) = listener.accept().await?;
                let server = factory();
                tokio::spawn(async move {
                    info!(peer = %peer, "MCP client connected");
                    let service = match server.serve(stream).await {
                        Ok(service) => service,
                        Err(e) => {
                            error!(peer = %peer, error = %e, "MCP server error");
                            return;
                        }
                    };
                    if let Err(e) = service.waiting().await {
                        error!(peer = %peer, error = %e, "MCP session aborted");
                    }
                    info!(peer = %peer, "MCP client disconnected");
                });
            }
        }
        Transport::Http { addr, path } => {
            let factory = Arc::new(factory);
            let service = StreamableHttpService::new(
                move || Ok(factory()),
                Arc::new(LocalSessionManager::default()),
                StreamableHttpServerConfig::default(),
            );
            let router = axum::Router::new().nest_service(&path, service);

            let listener = TcpListener::bind(&addr).await?;
            info!(listen_addr = %addr, path = %path, "MCP server ready, serving on streamable HTTP");
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            info!("MCP server shut down");
            Ok(())
        }
    }
}

/// Resolves on Ctrl-C. A failed handler install is logged and shuts the server down.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl-C handler");
    }
}
