use thiserror::Error;

/// Errors produced by track generation.
///
/// Every variant is terminal for the generation call in progress: nothing is
/// retried internally and no partial descriptor is ever returned.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error("unknown sprite: {0}")]
    UnknownSprite(String),
    #[error("sprite catalog not ready")]
    CatalogNotReady,
    #[error("inconsistent track length: expected {expected} segments, got {actual}")]
    InconsistentTrackLength { expected: usize, actual: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}
