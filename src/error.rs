use thiserror::Error;

/// Failures a caller can actually observe. The write channel is
/// non-verifying, so application-level rejection by the backend never
/// appears here; only the transport can fail.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
