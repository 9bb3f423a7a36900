use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("no browser window is available")]
    WindowUnavailable,
    #[error("platform call '{operation}' failed: {message}")]
    Platform {
        operation: &'static str,
        message: String,
    },
    #[error("'{href}' cannot be resolved against the current location: {message}")]
    InvalidUrl { href: String, message: String },
    #[error("'{href}' points to another origin; history entries must stay same-origin")]
    CrossOrigin { href: String },
    #[error("history state could not be (de)serialized: {0}")]
    State(#[from] serde_json::Error),
}

pub type HistoryResult<T> = Result<T, HistoryError>;
