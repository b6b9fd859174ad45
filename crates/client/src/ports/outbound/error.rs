//! Store port error type
//!
//! Every store call has a binary outcome: the row operation happened, or it
//! failed with one of these. There are no partial-success semantics.

use thiserror::Error;

/// Failure of a hosted-store call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Row-level security or authentication rejected the operation.
    #[error("permission denied: {0}")]
    Denied(String),

    /// The addressed row does not exist.
    #[error("row not found: {0}")]
    NotFound(String),

    /// The row came back in a shape the client cannot read.
    #[error("malformed row: {0}")]
    Malformed(String),
}
