//! Error types for the docpath library.
//!
//! This module provides the error type shared by all fallible operations in
//! the library, using `thiserror` for ergonomic error handling. Absolute
//! resolution failure is deliberately not an error: it is modeled as an
//! absent value, because "no canonical path exists" is an ordinary outcome
//! callers are expected to branch on.

use thiserror::Error;

/// Result type alias for operations that may fail with a docpath error.
///
/// # Examples
///
/// ```
/// use docpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("./index.md".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the docpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The source of a relative resolution is not itself expressible as a
    /// descendant-or-equal path: once canonicalized against the root it
    /// ascends above it. This is a caller contract violation and is
    /// surfaced immediately rather than recovered.
    #[error("invalid source path {path:?}: must resolve to a non-ascending relative path")]
    InvalidSource {
        /// The offending source path, as supplied by the caller.
        path: String,
    },

    /// A dotted-path store ran into a scalar value partway through the
    /// path, so the remaining keys have nowhere to live.
    #[error("cannot reach '{path}': blocked by a non-collection value")]
    NotCollection {
        /// The dotted path prefix that could not be reached.
        path: String,
    },
}

impl Error {
    /// Check if this error indicates an invalid resolution source.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpath::Error;
    ///
    /// let err = Error::InvalidSource { path: "../escape.md".to_string() };
    /// assert!(err.is_invalid_source());
    /// ```
    #[must_use]
    pub fn is_invalid_source(&self) -> bool {
        matches!(self, Self::InvalidSource { .. })
    }
}
