use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinboardError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Actor error: {0}")]
    ActorError(String),
}

impl PinboardError {
    /// True when the remote answered, but with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, PinboardError::UnexpectedStatus(_))
    }
}

pub type Result<T> = std::result::Result<T, PinboardError>;
