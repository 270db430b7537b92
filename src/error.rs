//! Error types for resumedocx library.

use std::io;
use thiserror::Error;

/// Result type alias for resumedocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering a resume.
#[derive(Error, Debug)]
pub enum Error {
    /// The resume has no name.
    #[error("Validation error: resume name is empty")]
    EmptyName,

    /// A section has no title.
    #[error("Validation error: section {index} has an empty title")]
    EmptySectionTitle {
        /// Zero-based position of the section
        index: usize,
    },

    /// A section has no entries.
    #[error("Validation error: section \"{title}\" has no entries")]
    EmptySection {
        /// Title of the offending section
        title: String,
    },

    /// A color string is not a valid `RRGGBB` hex value.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// I/O error when writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error assembling the zip container.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Error emitting XML parts.
    #[error("XML error: {0}")]
    Xml(String),

    /// Error reading or writing JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Check whether this error describes a malformed resume.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyName | Error::EmptySectionTitle { .. } | Error::EmptySection { .. }
        )
    }

    /// Check whether this error happened while producing output.
    pub fn is_render(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Archive(_) | Error::Xml(_) | Error::Render(_)
        )
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Archive(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyName;
        assert_eq!(err.to_string(), "Validation error: resume name is empty");

        let err = Error::EmptySection {
            title: "SKILLS".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Validation error: section \"SKILLS\" has no entries"
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(Error::EmptyName.is_validation());
        assert!(!Error::EmptyName.is_render());
        assert!(Error::EmptySectionTitle { index: 2 }.is_validation());
        assert!(Error::Archive("bad".into()).is_render());
        assert!(!Error::InvalidColor("zz".into()).is_validation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_render());
    }
}
