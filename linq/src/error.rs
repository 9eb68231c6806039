//! Error types for the linq query library.

use thiserror::Error;

/// The main error type for all linq operations.
///
/// Operators that can fail return this through the crate [`Result`] alias.
/// Failures raised by caller-supplied closures are never wrapped in it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinqError {
    /// A required element was absent.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// A sort order could not be parsed.
    #[error("sort order error: {0}")]
    SortOrder(#[from] SortOrderError),
}

/// Errors raised by the element accessors (`first`, `last` and their
/// predicated forms).
///
/// These are the only errors the `*_or_default` accessors replace with the
/// caller's default.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// `first()` or `last()` was called on a sequence with no elements.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// No element satisfied the condition of `first_where` or `last_where`.
    #[error("no element satisfies the condition")]
    NoMatch,
}

/// Errors that can occur when parsing a [`SortOrder`](crate::SortOrder).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortOrderError {
    /// The string names no known sort order.
    #[error("unknown sort order '{value}': expected 'ascending' or 'descending'")]
    Unknown {
        /// The string that failed to parse.
        value: String,
    },
}

impl LinqError {
    /// Returns `true` if this error is one of the "element absent" kinds that
    /// the `*_or_default` accessors substitute with a default.
    pub fn is_absent_element(&self) -> bool {
        matches!(
            self,
            Self::Query(QueryError::EmptySequence | QueryError::NoMatch)
        )
    }
}

/// Type alias for `Result<T, LinqError>`.
pub type Result<T> = std::result::Result<T, LinqError>;
