use std::io;

use thiserror::Error;

pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Why extraction produced no tags at all. Per-resource and
/// recoverable; one corrupt file never halts a batch.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open audio source: {0}")]
    Stream(#[from] io::Error),

    #[error("failed to parse tag container: {0}")]
    Parse(#[source] BoxedSource),
}

impl ExtractError {
    pub fn parse(source: impl Into<BoxedSource>) -> Self {
        ExtractError::Parse(source.into())
    }
}

/// Sub-artifact construction failure. Absorbed by the promoter; the
/// owning resource still yields its text tags.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("descriptor rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration parse error: {0}")]
    Parse(#[from] config::ConfigError),
}
