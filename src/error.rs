//! Error types for sheet generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading words, sampling or rendering cards
#[derive(Error, Debug)]
pub enum Error {
    /// The word list could not be opened or read
    #[error("Failed to read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pool holds fewer words than a single grid needs
    #[error("Word pool too small: a grid needs {needed} words but only {available} are available")]
    InsufficientPool { needed: usize, available: usize },

    /// A grid dimension was zero
    #[error("Invalid grid dimensions {height}x{width}: both must be at least 1")]
    InvalidDimensions { height: usize, width: usize },

    /// Writing output (or creating the output directory) failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode an image
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid style configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        Error::RenderError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_pool_message_names_both_counts() {
        let err = Error::InsufficientPool { needed: 9, available: 5 };
        let msg = err.to_string();
        assert!(msg.contains('9'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;
        let err = Error::Io {
            path: PathBuf::from("out/bingo_0.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("bingo_0.png"));
        assert!(err.source().is_some());
    }
}
