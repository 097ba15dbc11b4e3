/// Error types shared across MCP server crates.
///
/// These errors represent failures in the transport layer that every MCP server
/// shares. Application-specific errors should be defined in each server crate and
/// wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("mcp service error: {0}")]
    Service(String),
}
