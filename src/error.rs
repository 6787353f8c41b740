use std::path::PathBuf;
use thiserror::Error;

/// Selection-time failures. Either one rejects the whole selection; no
/// partial batch is ever built.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unsupported format: {0}. Only 'jpg' and 'jpeg' files are accepted")]
    UnsupportedFormat(String),

    #[error("Source file unreadable: {0}")]
    SourceUnreadable(PathBuf),
}

/// Compression-time failures. `ExportDirectoryInvalid` is destructive: the
/// working batch is cleared and the export directory must be reconfigured
/// before selecting again.
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("No images imported; nothing to compress")]
    EmptyBatch,

    #[error("Export directory missing or unwritable: {0}")]
    ExportDirectoryInvalid(PathBuf),
}

/// Config store write failures. Reads never error; they degrade to the
/// empty-string sentinel instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Home directory could not be determined")]
    NoHomeDirectory,
}

/// Umbrella error for callers driving the whole workflow.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
