//! Dynamically typed relation elements
//!
//! Relations built from external input (definition files, command-line
//! subsets) hold [`Element`] values. A single relation must not mix kinds;
//! [`ensure_homogeneous`] enforces that at load time.

use crate::error::{RelationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An atom that a relation can relate: an integer or a piece of text
///
/// Ordering is total: every `Int` sorts before every `Text`, then values
/// compare naturally within a kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    /// Integer atom
    Int(i64),
    /// Symbolic atom
    Text(String),
}

/// The kind of an [`Element`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// [`Element::Int`]
    Int,
    /// [`Element::Text`]
    Text,
}

impl Element {
    /// Kind of this element
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Int(_) => ElementKind::Int,
            Element::Text(_) => ElementKind::Text,
        }
    }

    /// Parse a command-line token: integers become `Int`, anything else `Text`
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(n) => Element::Int(n),
            Err(_) => Element::Text(token.to_string()),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(n) => write!(f, "{}", n),
            Element::Text(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Int => write!(f, "integer"),
            ElementKind::Text => write!(f, "text"),
        }
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Element::Int(n)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Text(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Text(s)
    }
}

/// Check that every element has the same kind
///
/// Returns the shared kind, or `None` for an empty input.
pub fn ensure_homogeneous<'a, I>(elements: I) -> Result<Option<ElementKind>>
where
    I: IntoIterator<Item = &'a Element>,
{
    let mut expected: Option<ElementKind> = None;
    for element in elements {
        let found = element.kind();
        match expected {
            None => expected = Some(found),
            Some(kind) if kind != found => {
                return Err(RelationError::TypeMismatch {
                    expected: kind,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    Ok(expected)
}
