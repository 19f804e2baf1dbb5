//! Host error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HUD element not found: {0}")]
    MissingElement(String),

    #[error("Invalid key script entry '{entry}': {reason}")]
    InvalidScript { entry: String, reason: String },

    #[error("Session length must be finite and non-negative, got {0}")]
    InvalidDuration(f64),

    #[error("{0} loop thread panicked")]
    LoopPanicked(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
