//! Error types for the lexnet library.
//!
//! All construction-time failures are represented by the [`LexnetError`] enum.
//! The query path never produces errors: degenerate inputs (unknown words,
//! empty word lists, reversed year windows) resolve to empty results instead.
//!
//! # Examples
//!
//! ```
//! use lexnet::error::{LexnetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexnetError::parse("malformed record"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for lexnet operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the message-carrying variants.
#[derive(Error, Debug)]
pub enum LexnetError {
    /// I/O errors (reading dataset files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed record encountered while building a store. Fatal for the
    /// load: the engine never serves queries over data it could not interpret.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An edge names a node id that has not been added to the graph.
    /// Loaders report and skip these rather than aborting the whole load.
    #[error("Invalid reference: edge {parent} -> {child} names a missing node")]
    InvalidReference {
        /// The parent (more general) endpoint of the rejected edge.
        parent: u32,
        /// The child (more specific) endpoint of the rejected edge.
        child: u32,
    },

    /// Query-related errors (reserved for adapter layers; the core query
    /// path itself is infallible).
    #[error("Query error: {0}")]
    Query(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexnetError.
pub type Result<T> = std::result::Result<T, LexnetError>;

impl LexnetError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexnetError::Parse(msg.into())
    }

    /// Create a new invalid reference error.
    pub fn invalid_reference(parent: u32, child: u32) -> Self {
        LexnetError::InvalidReference { parent, child }
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LexnetError::Query(msg.into())
    }

    /// Create a generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexnetError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexnetError::parse("bad synset id");
        assert_eq!(err.to_string(), "Parse error: bad synset id");

        let err = LexnetError::invalid_reference(3, 7);
        assert_eq!(
            err.to_string(),
            "Invalid reference: edge 3 -> 7 names a missing node"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: LexnetError = io_err.into();
        assert!(matches!(err, LexnetError::Io(_)));
    }
}
