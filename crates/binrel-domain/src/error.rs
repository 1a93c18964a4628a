//! Error types for relation operations

use crate::element::ElementKind;
use std::fmt;
use thiserror::Error;

/// Result type alias for relation operations
pub type Result<T> = std::result::Result<T, RelationError>;

/// Which side of a relation an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Domain side (first components, matrix rows, carrier A)
    Rows,
    /// Range side (second components, matrix columns, carrier B)
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Columns => write!(f, "columns"),
        }
    }
}

/// Errors that can occur while deriving views of a relation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// A pair references an element missing from the row or column listing
    #[error("Lookup error: element {element} is not present in the {axis} listing")]
    Lookup {
        /// Debug rendering of the missing element
        element: String,
        /// Listing that was searched
        axis: Axis,
    },

    /// Elements of one relation are not all of the same kind
    #[error("Type mismatch: expected {expected} element, found {found}")]
    TypeMismatch {
        /// Kind established by the first element seen
        expected: ElementKind,
        /// Kind of the offending element
        found: ElementKind,
    },

    /// An operation needed an external carrier set that was never supplied
    #[error("Missing carrier set for {0}")]
    MissingCarrier(Axis),
}
