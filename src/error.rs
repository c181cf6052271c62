//! Error types for splotr
//!
//! This module defines the error types raised while loading a file and
//! decoding its leading frame header.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum SplotrError {
    /// Header decoding/encoding errors
    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    /// File loading errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

/// Frame header errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Fewer bytes than a frame header occupies
    #[error("Truncated input: expected at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    /// Field value does not fit in its bit width (encoder only)
    #[error("Field {field} value {value} does not fit in {width} bits")]
    FieldOverflow {
        field: &'static str,
        value: u16,
        width: u8,
    },
}

/// File loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    /// Open, stat or read failure
    #[error("failed to open {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Loaded contents could not be decoded
    #[error(transparent)]
    Header(#[from] HeaderError),
}

impl LoadError {
    /// Path that failed, if the error came from the filesystem
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LoadError::Io { path, .. } => Some(path.as_path()),
            LoadError::Header(_) => None,
        }
    }
}

/// Specialized result types for different modules
pub type HeaderResult<T> = std::result::Result<T, HeaderError>;
pub type LoadResult<T> = std::result::Result<T, LoadError>;
pub type Result<T> = std::result::Result<T, SplotrError>;
