//! Core error types for the speech bubble pipeline
//!
//! Every failure the pipeline can hit is terminal, so each variant carries
//! enough context to be reported once on stderr.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while configuring, reading, or printing a message
#[derive(Error, Debug)]
pub enum SayError {
    #[error("width must be between {min} and {max} (got {width})")]
    InvalidWidth { width: i64, min: usize, max: usize },

    #[error("no message provided")]
    EmptyMessage,

    #[error("couldn't open art file '{}': {source}", .path.display())]
    ArtOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading art file '{}': {source}", .path.display())]
    ArtRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading from stdin: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("output error: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl SayError {
    /// Create a new invalid width error using the configured bounds
    pub fn invalid_width(width: i64) -> Self {
        Self::InvalidWidth {
            width,
            min: super::MIN_WIDTH,
            max: super::MAX_WIDTH,
        }
    }

    /// Create a new art file open error
    pub fn art_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ArtOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a new art file read error
    pub fn art_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ArtRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new stdin read error
    pub fn stdin_read(source: std::io::Error) -> Self {
        Self::StdinRead { source }
    }

    /// Short machine-friendly reason for the failure
    pub fn reason(&self) -> &'static str {
        match self {
            SayError::InvalidWidth { .. } => "invalid width",
            SayError::EmptyMessage => "empty message",
            SayError::ArtOpen { .. } => "open failed",
            SayError::ArtRead { .. } => "read failed",
            SayError::StdinRead { .. } => "stdin read failed",
            SayError::Output { .. } => "write failed",
        }
    }
}
