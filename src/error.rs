use thiserror::Error;

/// Domain parsing engine error types
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Suffix list data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DomainError>;
