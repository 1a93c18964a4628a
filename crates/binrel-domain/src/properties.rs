//! Property predicates for relations on a single set

use crate::relation::Relation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Which reflexivity check to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReflexivityMode {
    /// Only endpoints of existing pairs need a self-loop
    #[default]
    PairLocal,
    /// Every element of the carrier (or derived domain) needs a self-loop
    FullCarrier,
}

/// All four properties of a relation, evaluated at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyReport {
    /// Reflexivity under the requested [`ReflexivityMode`]
    pub reflexive: bool,
    /// Symmetry
    pub symmetric: bool,
    /// Antisymmetry
    pub antisymmetric: bool,
    /// Transitivity
    pub transitive: bool,
}

impl PropertyReport {
    /// Reflexive, symmetric and transitive
    pub fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }

    /// Reflexive, antisymmetric and transitive
    pub fn is_partial_order(&self) -> bool {
        self.reflexive && self.antisymmetric && self.transitive
    }
}

impl<T: Ord + Clone> Relation<T, T> {
    /// Pair-local reflexivity: every `(a, b)` present has `(a, a)` and `(b, b)`
    ///
    /// Elements that occur in no pair are not inspected, so the empty
    /// relation is reflexive. See
    /// [`is_reflexive_on_carrier`](Self::is_reflexive_on_carrier) for the
    /// textbook definition.
    pub fn is_reflexive(&self) -> bool {
        self.pairs
            .iter()
            .all(|(a, b)| self.loops_on(a) && self.loops_on(b))
    }

    /// Full-carrier reflexivity: `(x, x)` is present for every `x` in the
    /// declared carrier A, or in the derived domain without one
    pub fn is_reflexive_on_carrier(&self) -> bool {
        match &self.carrier_a {
            Some(carrier) => carrier.iter().all(|x| self.loops_on(x)),
            None => self.pairs.iter().all(|(a, _)| self.loops_on(a)),
        }
    }

    /// Reflexivity under an explicit mode
    pub fn is_reflexive_with(&self, mode: ReflexivityMode) -> bool {
        match mode {
            ReflexivityMode::PairLocal => self.is_reflexive(),
            ReflexivityMode::FullCarrier => self.is_reflexive_on_carrier(),
        }
    }

    /// Every `(a, b)` present has `(b, a)`
    pub fn is_symmetric(&self) -> bool {
        self.pairs.iter().all(|(a, b)| self.contains(b, a))
    }

    /// No `(a, b)` with `a != b` has its mirror `(b, a)` present
    pub fn is_antisymmetric(&self) -> bool {
        !self
            .pairs
            .iter()
            .any(|(a, b)| a != b && self.contains(b, a))
    }

    /// For every `(a, b)`, everything `b` relates to is also related to `a`
    pub fn is_transitive(&self) -> bool {
        let successors = self.successors();
        self.pairs.iter().all(|(a, b)| {
            match (successors.get(a), successors.get(b)) {
                (Some(from_a), Some(from_b)) => from_b.is_subset(from_a),
                _ => false,
            }
        })
    }

    /// Evaluate all four properties
    pub fn properties(&self, mode: ReflexivityMode) -> PropertyReport {
        PropertyReport {
            reflexive: self.is_reflexive_with(mode),
            symmetric: self.is_symmetric(),
            antisymmetric: self.is_antisymmetric(),
            transitive: self.is_transitive(),
        }
    }

    fn loops_on(&self, x: &T) -> bool {
        self.contains(x, x)
    }

    /// Direct successors of every element that occurs in some pair
    fn successors(&self) -> BTreeMap<&T, BTreeSet<&T>> {
        let mut map: BTreeMap<&T, BTreeSet<&T>> = BTreeMap::new();
        for (a, b) in &self.pairs {
            map.entry(a).or_default().insert(b);
            map.entry(b).or_default();
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(pairs: &[(u32, u32)]) -> Relation<u32> {
        Relation::from_pairs("R", pairs.iter().copied())
    }

    #[test]
    fn test_reference_relation() {
        let r = rel(&[(1, 3), (2, 3), (2, 4), (3, 5), (3, 2), (3, 4), (4, 4)]);
        assert!(!r.is_reflexive());
        assert!(!r.is_symmetric());
        assert!(!r.is_antisymmetric());
        assert!(!r.is_transitive());
    }

    #[test]
    fn test_empty_relation_properties() {
        let r = rel(&[]);
        let report = r.properties(ReflexivityMode::PairLocal);
        assert!(report.reflexive);
        assert!(report.symmetric);
        assert!(report.antisymmetric);
        assert!(report.transitive);
    }

    #[test]
    fn test_pair_local_vs_full_carrier() {
        let r = rel(&[(1, 1), (2, 2), (1, 2)]).carriers(Some((1..=3).collect()), None);
        assert!(r.is_reflexive());
        // 3 is in the carrier but has no self-loop
        assert!(!r.is_reflexive_on_carrier());
        assert!(!r.is_reflexive_with(ReflexivityMode::FullCarrier));
        assert!(r.is_reflexive_with(ReflexivityMode::PairLocal));
    }

    #[test]
    fn test_full_carrier_without_carrier_uses_domain() {
        // 2 only appears as a second component
        let r = rel(&[(1, 1), (1, 2)]);
        assert!(r.is_reflexive_on_carrier());
        assert!(!r.is_reflexive());
    }

    #[test]
    fn test_symmetric() {
        assert!(rel(&[(1, 2), (2, 1), (3, 3)]).is_symmetric());
        assert!(!rel(&[(1, 2)]).is_symmetric());
    }

    #[test]
    fn test_antisymmetric_ignores_loops() {
        assert!(rel(&[(1, 1), (1, 2), (2, 3)]).is_antisymmetric());
        assert!(!rel(&[(1, 2), (2, 1)]).is_antisymmetric());
    }

    #[test]
    fn test_transitive() {
        assert!(rel(&[(1, 2), (2, 3), (1, 3)]).is_transitive());
        assert!(!rel(&[(1, 2), (2, 3)]).is_transitive());
        // Sink elements have empty successor sets
        assert!(rel(&[(1, 2)]).is_transitive());
    }

    #[test]
    fn test_equivalence_and_partial_order() {
        let equality = rel(&[(1, 1), (2, 2)]);
        let report = equality.properties(ReflexivityMode::FullCarrier);
        assert!(report.is_equivalence());
        assert!(report.is_partial_order());

        let divides = rel(&[(1, 1), (2, 2), (4, 4), (1, 2), (1, 4), (2, 4)]);
        let report = divides.properties(ReflexivityMode::FullCarrier);
        assert!(!report.is_equivalence());
        assert!(report.is_partial_order());
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: ReflexivityMode = serde_json::from_str("\"full-carrier\"").unwrap();
        assert_eq!(mode, ReflexivityMode::FullCarrier);
        assert_eq!(serde_json::to_string(&ReflexivityMode::PairLocal).unwrap(), "\"pair-local\"");
    }
}
