//! Error types for Motif operations.
//!
//! This module provides the main error type [`MotifError`] which wraps
//! the error conditions that can occur while generating a document.

use std::io;

use thiserror::Error;

use motif_core::sampler::InvalidRange;

/// The main error type for Motif operations.
#[derive(Debug, Error)]
pub enum MotifError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Range error: {0}")]
    Range(#[from] InvalidRange),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MotifError::from(InvalidRange { lo: 5, hi: 1 });
        assert_eq!(
            err.to_string(),
            "Range error: invalid range [5, 1]: lower bound exceeds upper bound"
        );

        let err = MotifError::Config("no frames".to_string());
        assert_eq!(err.to_string(), "Configuration error: no frames");
    }

    #[test]
    fn test_from_io() {
        let err = MotifError::from(io::Error::other("disk full"));
        assert!(matches!(err, MotifError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
