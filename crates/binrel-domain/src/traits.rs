//! Trait definitions for external interactions
//!
//! Rendering lives outside this crate. Implementors receive an owned
//! [`RelationSnapshot`] and never see the mutable relation itself.

use crate::snapshot::RelationSnapshot;

/// Trait for presenting a relation, e.g. as a two-cluster directed graph
///
/// Implemented by presentation layers outside the domain crate
pub trait Visualizer<A, B = A> {
    /// Rendered artifact (source text, image bytes, ...)
    type Output;

    /// Error type for rendering
    type Error;

    /// Render one relation
    fn render(&self, snapshot: &RelationSnapshot<A, B>) -> Result<Self::Output, Self::Error>;
}
