mod bookmarks;
mod comparison;
mod config;
mod data;
mod error;
mod insights;
mod model;
mod recommend;
mod render;
mod search;
mod server;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;
use server::PmStandardsServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC when serving on stdio
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting pm-standards MCP server");

    let config = Config::from_env()?;
    info!(
        transport = ?config.transport(),
        dedupe_focus_areas = config.dedupe_focus_areas,
        topics = data::TOPICS.len(),
        "configuration loaded"
    );

    run(config).await?;
    Ok(())
}

async fn run(config: Config) -> Result<(), AppError> {
    let focus_policy = config.focus_policy();
    mcp_common::serve::serve(
        move || PmStandardsServer::new(focus_policy),
        config.transport(),
    )
    .await?;
    Ok(())
}
