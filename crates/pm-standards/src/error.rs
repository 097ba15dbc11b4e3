use mcp_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown topic: '{0}'")]
    UnknownTopic(String),

    #[error("unknown project type: '{0}'")]
    UnknownProjectType(String),

    #[error("unknown project size: '{0}'")]
    UnknownProjectSize(String),
}
