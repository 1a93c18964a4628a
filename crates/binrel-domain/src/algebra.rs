//! Relational algebra
//!
//! Every combinator here returns a fresh [`Relation`]; operands are never
//! mutated and no result shares storage with its inputs.

use crate::error::{Axis, RelationError, Result};
use crate::relation::Relation;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

impl<A: Ord + Clone, B: Ord + Clone> Relation<A, B> {
    /// Union with a raw pair set
    ///
    /// The result keeps this relation's name and carriers.
    pub fn union(&self, pairs: &BTreeSet<(A, B)>) -> Relation<A, B> {
        Relation {
            name: self.name.clone(),
            carrier_a: self.carrier_a.clone(),
            carrier_b: self.carrier_b.clone(),
            pairs: self.pairs.union(pairs).cloned().collect(),
        }
    }

    /// Union with another relation
    ///
    /// Carriers are united side by side; a side declared by only one
    /// operand keeps that operand's carrier.
    pub fn union_with(&self, other: &Relation<A, B>) -> Relation<A, B> {
        Relation {
            name: self.name.clone(),
            carrier_a: merge_carriers(self.carrier_a.as_ref(), other.carrier_a.as_ref()),
            carrier_b: merge_carriers(self.carrier_b.as_ref(), other.carrier_b.as_ref()),
            pairs: self.pairs.union(&other.pairs).cloned().collect(),
        }
    }

    /// Pairs present in both relations
    ///
    /// The result keeps this relation's name and carriers.
    pub fn intersection(&self, other: &Relation<A, B>) -> Relation<A, B> {
        Relation {
            name: self.name.clone(),
            carrier_a: self.carrier_a.clone(),
            carrier_b: self.carrier_b.clone(),
            pairs: self.pairs.intersection(&other.pairs).cloned().collect(),
        }
    }

    /// This relation's pairs minus those it shares with `other`
    pub fn subtract_pairs(&self, other: &Relation<A, B>) -> Relation<A, B> {
        Relation {
            name: self.name.clone(),
            carrier_a: self.carrier_a.clone(),
            carrier_b: self.carrier_b.clone(),
            pairs: self.pairs.difference(&other.pairs).cloned().collect(),
        }
    }

    /// Relational composition `self ∘ other`
    ///
    /// Contains `(a, c)` whenever some `b` has `(a, b)` in `self` and `(b, c)`
    /// in `other`. Only pairs of `self` whose second component lies in the
    /// bridge set `range(self) ∩ domain(other)` are expanded. The result has
    /// the default name and no carriers.
    pub fn composition<C: Ord + Clone>(&self, other: &Relation<B, C>) -> Relation<A, C> {
        let other_domain = other.domain();
        let bridge: BTreeSet<&B> = self
            .pairs
            .iter()
            .map(|(_, b)| b)
            .filter(|b| other_domain.contains(*b))
            .collect();
        debug!(bridge = bridge.len(), "Composing relations");

        let mut successors: BTreeMap<&B, Vec<&C>> = BTreeMap::new();
        for (b, c) in &other.pairs {
            successors.entry(b).or_default().push(c);
        }

        let mut pairs = BTreeSet::new();
        for (a, b) in &self.pairs {
            if !bridge.contains(b) {
                continue;
            }
            if let Some(targets) = successors.get(b) {
                for c in targets {
                    pairs.insert((a.clone(), (*c).clone()));
                }
            }
        }
        trace!(pairs = pairs.len(), "Composition finished");

        Relation::from_pairs(crate::relation::DEFAULT_NAME, pairs)
    }

    /// Swap every pair; carriers are not transferred
    pub fn converse(&self) -> Relation<B, A> {
        Relation::from_pairs(
            crate::relation::DEFAULT_NAME,
            self.pairs.iter().map(|(a, b)| (b.clone(), a.clone())),
        )
    }

    /// Complement against [`universe`](Relation::universe)
    ///
    /// Declared carriers are used where present, derived domain/range
    /// otherwise.
    pub fn complement(&self) -> Relation<A, B> {
        let (u, v) = self.universe();
        self.complement_against(&u, &v)
    }

    /// Complement against an explicit universe `u × v`
    ///
    /// The result is declared over `u × v`, so complementing it again with
    /// [`complement`](Relation::complement) returns the original pairs
    /// (restricted to that universe).
    pub fn complement_against(&self, u: &BTreeSet<A>, v: &BTreeSet<B>) -> Relation<A, B> {
        debug!(rows = u.len(), columns = v.len(), "Complementing relation");
        let mut pairs = BTreeSet::new();
        for i in u {
            for j in v {
                let pair = (i.clone(), j.clone());
                if !self.pairs.contains(&pair) {
                    pairs.insert(pair);
                }
            }
        }
        Relation {
            name: self.name.clone(),
            carrier_a: Some(u.clone()),
            carrier_b: Some(v.clone()),
            pairs,
        }
    }

    /// Complement against the declared carriers `A × B`
    pub fn complement_against_external_universe(&self) -> Result<Relation<A, B>> {
        let u = self
            .carrier_a
            .as_ref()
            .ok_or(RelationError::MissingCarrier(Axis::Rows))?;
        let v = self
            .carrier_b
            .as_ref()
            .ok_or(RelationError::MissingCarrier(Axis::Columns))?;
        Ok(self.complement_against(u, v))
    }

    /// Complement against the derived `domain × range`, ignoring carriers
    pub fn complement_against_derived_universe(&self) -> Relation<A, B> {
        self.complement_against(&self.domain(), &self.range())
    }

    /// Keep pairs `(x, y)` with `x ∈ sa ∩ U` and `y ∈ sb ∩ V`
    ///
    /// `(U, V)` is this relation's [`universe`](Relation::universe); the
    /// result is declared over the two intersections.
    pub fn restrict(&self, sa: &BTreeSet<A>, sb: &BTreeSet<B>) -> Relation<A, B> {
        let (u, v) = self.universe();
        let rows: BTreeSet<A> = u.intersection(sa).cloned().collect();
        let columns: BTreeSet<B> = v.intersection(sb).cloned().collect();
        let pairs = self
            .pairs
            .iter()
            .filter(|(x, y)| rows.contains(x) && columns.contains(y))
            .cloned()
            .collect();
        Relation {
            name: self.name.clone(),
            carrier_a: Some(rows),
            carrier_b: Some(columns),
            pairs,
        }
    }
}

impl<T: Ord + Clone> Relation<T, T> {
    /// Restriction `R|S` to a subset of the underlying set
    ///
    /// Keeps `(x, y)` with both components in `S ∩ W`, where `W` is the
    /// declared carrier A or, without one, every element appearing in a pair.
    /// The result is a relation on `S ∩ W`.
    pub fn restrict_to_subset(&self, subset: &BTreeSet<T>) -> Relation<T, T> {
        let underlying = match &self.carrier_a {
            Some(carrier) => carrier.clone(),
            None => self.field(),
        };
        let inter: BTreeSet<T> = underlying.intersection(subset).cloned().collect();
        let pairs = self
            .pairs
            .iter()
            .filter(|(x, y)| inter.contains(x) && inter.contains(y))
            .cloned()
            .collect();
        Relation {
            name: self.name.clone(),
            carrier_a: Some(inter.clone()),
            carrier_b: Some(inter),
            pairs,
        }
    }
}

fn merge_carriers<T: Ord + Clone>(
    left: Option<&BTreeSet<T>>,
    right: Option<&BTreeSet<T>>,
) -> Option<BTreeSet<T>> {
    match (left, right) {
        (Some(l), Some(r)) => Some(l.union(r).cloned().collect()),
        (Some(l), None) => Some(l.clone()),
        (None, Some(r)) => Some(r.clone()),
        (None, None) => None,
    }
}
