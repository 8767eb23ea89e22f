//! Common error types used throughout moviediff.
//!
//! Only whole-run failures are represented here. Per-record anomalies in a
//! catalog are absorbed by the parser and never become an [`Error`].

use std::path::PathBuf;

/// Common error type for moviediff.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A catalog document could not be read or is not well-formed XML.
    #[error("Malformed catalog {path:?}: {reason}")]
    MalformedCatalog { path: PathBuf, reason: String },

    /// The exclusion list is not valid UTF-8.
    #[error("Exclusion list {path:?} must be UTF-8 encoded")]
    ExcludeListEncoding { path: PathBuf },

    /// The base directory for renames does not exist.
    #[error("Base directory does not exist: {0:?}")]
    BasePathMissing(PathBuf),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new MalformedCatalog error.
    pub fn malformed_catalog<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::MalformedCatalog {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed_catalog("/tmp/a.xml", "unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "Malformed catalog \"/tmp/a.xml\": unexpected end of stream"
        );

        let err = Error::ExcludeListEncoding {
            path: PathBuf::from("exclude.txt"),
        };
        assert_eq!(
            err.to_string(),
            "Exclusion list \"exclude.txt\" must be UTF-8 encoded"
        );

        let err = Error::BasePathMissing(PathBuf::from("/mnt/movies"));
        assert_eq!(
            err.to_string(),
            "Base directory does not exist: \"/mnt/movies\""
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }
}
