use std::path::PathBuf;

/// Errors raised while loading the vocabulary file. Both variants are fatal
/// to the caller: the app cannot run without vocabulary data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("vocabulary file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read vocabulary file: {0}")]
    ReadError(#[from] std::io::Error),
}
