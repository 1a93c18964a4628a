//! binrel Domain Layer
//!
//! Finite binary relations and the relational algebra taught in discrete
//! mathematics. The crate is pure: no I/O, no global state, and every
//! operation except the explicit setters returns a fresh value.
//!
//! ## Key Concepts
//!
//! - **Relation**: a set of ordered pairs from `A × B`, with optional carriers
//! - **Domain / Range**: first / second components actually present
//! - **Universe**: carriers where declared, domain/range otherwise
//! - **Algebra**: union, intersection, composition, converse, complement, restriction
//! - **Properties**: reflexive, symmetric, antisymmetric, transitive
//! - **Snapshot**: immutable data handed to an external visualizer
//!
//! ## Example
//!
//! ```
//! use binrel_domain::Relation;
//!
//! let r: Relation<u32> = Relation::from_pairs("R", [(1, 2), (2, 3)]);
//! let s: Relation<u32> = Relation::from_pairs("S", [(2, 4), (3, 5)]);
//!
//! let comp = r.composition(&s);
//! assert!(comp.contains(&1, &4));
//! assert!(comp.contains(&2, &5));
//! assert!(!r.is_transitive());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algebra;
pub mod element;
pub mod error;
pub mod matrix;
pub mod properties;
pub mod relation;
pub mod snapshot;
pub mod traits;

// Re-exports for convenience
pub use element::{ensure_homogeneous, Element, ElementKind};
pub use error::{Axis, RelationError, Result};
pub use matrix::RelationMatrix;
pub use properties::{PropertyReport, ReflexivityMode};
pub use relation::{Relation, DEFAULT_NAME};
pub use snapshot::RelationSnapshot;
pub use traits::Visualizer;
