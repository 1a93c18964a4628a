//! Relation data model
//!
//! A [`Relation`] is a set of ordered pairs drawn from `A × B`, optionally
//! accompanied by the carrier sets `A` and `B` it was declared over. The
//! pairs are the only source of truth for content; carriers are metadata
//! consulted by complement, restriction and the matrix view.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Default label given to relations that were not explicitly named
pub const DEFAULT_NAME: &str = "R";

/// A finite binary relation from `A` to `B`
///
/// `Relation<T>` (with `B` defaulted to `A`) is a relation on a single set;
/// the property predicates and subset restriction are only defined there.
///
/// # Examples
///
/// ```
/// use binrel_domain::Relation;
/// use std::collections::BTreeSet;
///
/// let carrier: BTreeSet<u32> = (1..=5).collect();
/// let mut r = Relation::with_carriers("R(A→B)", carrier.clone(), carrier);
/// r.set_pairs([(1, 3), (2, 3), (2, 4)]);
///
/// assert_eq!(r.domain(), BTreeSet::from([1, 2]));
/// assert_eq!(r.range(), BTreeSet::from([3, 4]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation<A, B = A> {
    pub(crate) name: String,
    pub(crate) carrier_a: Option<BTreeSet<A>>,
    pub(crate) carrier_b: Option<BTreeSet<B>>,
    pub(crate) pairs: BTreeSet<(A, B)>,
}

impl<A, B> Default for Relation<A, B> {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            carrier_a: None,
            carrier_b: None,
            pairs: BTreeSet::new(),
        }
    }
}

impl<A: Ord + Clone, B: Ord + Clone> Relation<A, B> {
    /// Create an empty relation without carrier sets
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an empty relation declared over `carrier_a × carrier_b`
    pub fn with_carriers(
        name: impl Into<String>,
        carrier_a: BTreeSet<A>,
        carrier_b: BTreeSet<B>,
    ) -> Self {
        Self {
            name: name.into(),
            carrier_a: Some(carrier_a),
            carrier_b: Some(carrier_b),
            pairs: BTreeSet::new(),
        }
    }

    /// Create a relation without carriers from a collection of pairs
    pub fn from_pairs<I>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
    {
        Self {
            name: name.into(),
            pairs: pairs.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Builder-style carrier assignment
    pub fn carriers(
        mut self,
        carrier_a: Option<BTreeSet<A>>,
        carrier_b: Option<BTreeSet<B>>,
    ) -> Self {
        self.carrier_a = carrier_a;
        self.carrier_b = carrier_b;
        self
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display label in place
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Declared domain-side carrier, if any
    pub fn carrier_a(&self) -> Option<&BTreeSet<A>> {
        self.carrier_a.as_ref()
    }

    /// Declared range-side carrier, if any
    pub fn carrier_b(&self) -> Option<&BTreeSet<B>> {
        self.carrier_b.as_ref()
    }

    /// Replace (or clear) the domain-side carrier
    pub fn set_carrier_a(&mut self, carrier: Option<BTreeSet<A>>) {
        self.carrier_a = carrier;
    }

    /// Replace (or clear) the range-side carrier
    pub fn set_carrier_b(&mut self, carrier: Option<BTreeSet<B>>) {
        self.carrier_b = carrier;
    }

    /// Raw pair set
    pub fn pairs(&self) -> &BTreeSet<(A, B)> {
        &self.pairs
    }

    /// Consume the relation, keeping only its pair set
    pub fn into_pairs(self) -> BTreeSet<(A, B)> {
        self.pairs
    }

    /// Replace the pair set wholesale
    pub fn set_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (A, B)>,
    {
        self.pairs = pairs.into_iter().collect();
    }

    /// Add a pair; returns `false` if it was already present
    ///
    /// Carrier membership is not checked.
    pub fn insert(&mut self, a: A, b: B) -> bool {
        self.pairs.insert((a, b))
    }

    /// Remove a pair; returns `true` if it was present
    pub fn remove(&mut self, a: &A, b: &B) -> bool {
        // BTreeSet<(A, B)> can only be probed with an owned tuple
        self.pairs.remove(&(a.clone(), b.clone()))
    }

    /// Whether `a` is related to `b`
    pub fn contains(&self, a: &A, b: &B) -> bool {
        self.pairs.contains(&(a.clone(), b.clone()))
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the relation holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in ascending order
    pub fn iter(&self) -> btree_set::Iter<'_, (A, B)> {
        self.pairs.iter()
    }

    /// First components that actually appear in the pairs
    ///
    /// This is a derived view, independent of [`carrier_a`](Self::carrier_a).
    pub fn domain(&self) -> BTreeSet<A> {
        self.pairs.iter().map(|(a, _)| a.clone()).collect()
    }

    /// Second components that actually appear in the pairs
    pub fn range(&self) -> BTreeSet<B> {
        self.pairs.iter().map(|(_, b)| b.clone()).collect()
    }

    /// The `(U, V)` universe this relation is interpreted over
    ///
    /// Each side is the declared carrier when present and the derived
    /// domain/range otherwise.
    pub fn universe(&self) -> (BTreeSet<A>, BTreeSet<B>) {
        let u = match &self.carrier_a {
            Some(carrier) => carrier.clone(),
            None => self.domain(),
        };
        let v = match &self.carrier_b {
            Some(carrier) => carrier.clone(),
            None => self.range(),
        };
        (u, v)
    }
}

impl<T: Ord + Clone> Relation<T, T> {
    /// Every element that appears on either side of some pair
    pub fn field(&self) -> BTreeSet<T> {
        self.pairs
            .iter()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .collect()
    }
}

impl<A: Ord + Clone, B: Ord + Clone> FromIterator<(A, B)> for Relation<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        Self::from_pairs(DEFAULT_NAME, iter)
    }
}

impl<A: Ord + Clone, B: Ord + Clone> Extend<(A, B)> for Relation<A, B> {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl<'a, A, B> IntoIterator for &'a Relation<A, B> {
    type Item = &'a (A, B);
    type IntoIter = btree_set::Iter<'a, (A, B)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Prints `name = {(a, b), ...}`; use
/// [`to_display_string`](Relation::to_display_string) for the matrix too
impl<A: fmt::Display, B: fmt::Display> fmt::Display for Relation<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {{", self.name)?;
        for (idx, (a, b)) in self.pairs.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", a, b)?;
        }
        write!(f, "}}")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: domain and range are exactly the distinct components
        #[test]
        fn test_domain_range_exact(pairs in prop::collection::vec((0u8..10, 0u8..10), 0..30)) {
            let r = Relation::from_pairs("R", pairs.clone());
            let firsts: BTreeSet<u8> = pairs.iter().map(|(a, _)| *a).collect();
            let seconds: BTreeSet<u8> = pairs.iter().map(|(_, b)| *b).collect();
            prop_assert_eq!(r.domain(), firsts);
            prop_assert_eq!(r.range(), seconds);
        }

        /// Property: duplicate input pairs collapse
        #[test]
        fn test_pairs_are_a_set(pairs in prop::collection::vec((0u8..4, 0u8..4), 0..30)) {
            let distinct: BTreeSet<(u8, u8)> = pairs.iter().copied().collect();
            let r = Relation::from_pairs("R", pairs);
            prop_assert_eq!(r.len(), distinct.len());
        }
    }
}
