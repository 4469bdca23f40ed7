//! Error types for texttable

use thiserror::Error;

/// Errors that can occur when constructing a table.
///
/// All variants are invalid-argument errors raised at construction time;
/// once a `Table` exists, every operation on it is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The column list was empty
    #[error("invalid argument: column list must not be empty")]
    EmptyColumns,

    /// The row list was empty
    #[error("invalid argument: row list must not be empty")]
    EmptyRows,

    /// The first row's cell count did not match the column count
    #[error("invalid argument: first row has {found} cells but there are {expected} columns")]
    ArityMismatch { expected: usize, found: usize },
}
