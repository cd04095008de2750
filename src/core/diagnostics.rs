//! Conversion Errors
//!
//! Everything that can stop a file conversion. Per-block problems are never
//! errors; they surface as warnings inside the converted document.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to convert a document file
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid path (not a file): {}", .0.display())]
    InvalidTarget(PathBuf),

    #[error("invalid extension (expected .md): {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("cannot decode {} as UTF-8: {source}", .path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected error on {}: {source}", .path.display())]
    UnexpectedFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) | Self::InvalidTarget(path) | Self::InvalidExtension(path) => path,
            Self::DecodeFailure { path, .. }
            | Self::WriteFailure { path, .. }
            | Self::UnexpectedFailure { path, .. } => path,
        }
    }

    /// Short machine-friendly name of the error category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidTarget(_) => "invalid_target",
            Self::InvalidExtension(_) => "invalid_extension",
            Self::DecodeFailure { .. } => "decode_failure",
            Self::WriteFailure { .. } => "write_failure",
            Self::UnexpectedFailure { .. } => "unexpected_failure",
        }
    }
}
