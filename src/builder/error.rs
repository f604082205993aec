//! Error types for expression builders.

use thiserror::Error;

/// An operation was requested from a builder that has no definition for it.
///
/// `combine` is the only operation that can be refused: `Option`, `State`
/// and `Cancellable` have no natural merge of two parallel results.
///
/// # Examples
///
/// ```rust
/// use compexpr::builder::UnsupportedOperation;
///
/// let error = UnsupportedOperation::new("StateBuilder", "combine");
/// assert_eq!(
///     format!("{error}"),
///     "combine is not supported by StateBuilder"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{operation} is not supported by {builder}")]
pub struct UnsupportedOperation {
    /// The name of the builder that refused the operation.
    pub builder: &'static str,
    /// The name of the refused operation.
    pub operation: &'static str,
}

impl UnsupportedOperation {
    /// Creates a new error for `operation` refused by `builder`.
    #[must_use]
    pub const fn new(builder: &'static str, operation: &'static str) -> Self {
        Self { builder, operation }
    }
}
