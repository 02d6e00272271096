use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("input is not valid utf-8: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
