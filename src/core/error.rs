//! Error types for the application

use thiserror::Error;

/// Validation failures returned by the estimator.
///
/// These are caller-recoverable: the UI (or CLI) shows a neutral
/// "unable to calculate" state and keeps running.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    #[error("Unknown project kind: {0}")]
    UnknownProjectKind(String),

    #[error("Unknown quality tier: {0}")]
    UnknownQualityTier(String),

    #[error("Invalid area: {0} (must be greater than zero and small enough to price)")]
    InvalidArea(f64),

    #[error("Invalid floor count: {0} (must be a whole number of at least 1)")]
    InvalidFloors(f64),
}

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
