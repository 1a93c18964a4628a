//! Immutable hand-off data for visualizers

use crate::relation::Relation;
use serde::Serialize;
use std::collections::BTreeSet;

/// Owned copy of everything a renderer needs to draw a relation
///
/// A visualizer draws the two node clusters from
/// [`node_sets`](RelationSnapshot::node_sets) and one edge per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationSnapshot<A, B = A> {
    /// Relation label
    pub name: String,
    /// Pairs in ascending order
    pub pairs: Vec<(A, B)>,
    /// Declared domain-side carrier
    pub carrier_a: Option<BTreeSet<A>>,
    /// Declared range-side carrier
    pub carrier_b: Option<BTreeSet<B>>,
}

impl<A: Ord + Clone, B: Ord + Clone> RelationSnapshot<A, B> {
    /// Node clusters: declared carriers, falling back to derived domain/range
    pub fn node_sets(&self) -> (BTreeSet<A>, BTreeSet<B>) {
        let a = match &self.carrier_a {
            Some(carrier) => carrier.clone(),
            None => self.pairs.iter().map(|(a, _)| a.clone()).collect(),
        };
        let b = match &self.carrier_b {
            Some(carrier) => carrier.clone(),
            None => self.pairs.iter().map(|(_, b)| b.clone()).collect(),
        };
        (a, b)
    }
}

impl<A: Ord + Clone, B: Ord + Clone> Relation<A, B> {
    /// Detached snapshot for an external [`Visualizer`](crate::traits::Visualizer)
    pub fn snapshot(&self) -> RelationSnapshot<A, B> {
        RelationSnapshot {
            name: self.name.clone(),
            pairs: self.pairs.iter().cloned().collect(),
            carrier_a: self.carrier_a.clone(),
            carrier_b: self.carrier_b.clone(),
        }
    }
}
