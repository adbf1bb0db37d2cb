use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
