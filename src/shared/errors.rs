use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Event listener error: {0}")]
    ListenerError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
