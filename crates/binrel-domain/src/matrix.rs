//! Boolean adjacency-matrix view of a relation
//!
//! Row and column labels are materialized once, in ascending order, and the
//! same vectors are used both for index lookup and for printing labels.

use crate::error::{Axis, RelationError, Result};
use crate::relation::Relation;
use std::collections::BTreeSet;
use std::fmt;
use tracing::warn;

/// Boolean matrix with fixed row and column labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMatrix<A, B = A> {
    rows: Vec<A>,
    columns: Vec<B>,
    cells: Vec<Vec<bool>>,
}

impl<A: Ord + Clone, B: Ord + Clone> RelationMatrix<A, B> {
    /// Row labels, ascending
    pub fn rows(&self) -> &[A] {
        &self.rows
    }

    /// Column labels, ascending
    pub fn columns(&self) -> &[B] {
        &self.columns
    }

    /// `(row count, column count)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Whether `rows[i]` is related to `columns[j]`; out-of-range is `false`
    pub fn cell(&self, i: usize, j: usize) -> bool {
        self.cells
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    /// One row of cells
    pub fn row(&self, i: usize) -> Option<&[bool]> {
        self.cells.get(i).map(Vec::as_slice)
    }

    /// Cells as a 0/1 grid
    pub fn bits(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&set| u8::from(set)).collect())
            .collect()
    }

    /// Rebuild the pair set from the cells and labels
    pub fn to_pairs(&self) -> BTreeSet<(A, B)> {
        let mut pairs = BTreeSet::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &set) in row.iter().enumerate() {
                if set {
                    pairs.insert((self.rows[i].clone(), self.columns[j].clone()));
                }
            }
        }
        pairs
    }
}

/// Header line with column labels, then `label [0, 1, ...]` per row
impl<A: fmt::Display, B: fmt::Display> fmt::Display for RelationMatrix<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for (idx, column) in self.columns.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", column)?;
        }
        for (label, row) in self.rows.iter().zip(&self.cells) {
            write!(f, "\n{} [", label)?;
            for (idx, &set) in row.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", u8::from(set))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<A: Ord + Clone + fmt::Display, B: Ord + Clone + fmt::Display> Relation<A, B> {
    /// Matrix over [`universe`](Relation::universe)
    ///
    /// Fails with [`RelationError::Lookup`] when a pair mentions an element
    /// that is missing from a declared carrier.
    pub fn matrix_representation(&self) -> Result<RelationMatrix<A, B>> {
        let (u, v) = self.universe();
        let rows: Vec<A> = u.into_iter().collect();
        let columns: Vec<B> = v.into_iter().collect();
        let mut cells = vec![vec![false; columns.len()]; rows.len()];

        for (a, b) in &self.pairs {
            let i = rows.binary_search(a).map_err(|_| lookup_error(a, Axis::Rows))?;
            let j = columns
                .binary_search(b)
                .map_err(|_| lookup_error(b, Axis::Columns))?;
            cells[i][j] = true;
        }

        Ok(RelationMatrix {
            rows,
            columns,
            cells,
        })
    }

    /// Pairs, column labels and one matrix row per row label
    ///
    /// ```text
    /// R = {(1, 2), (2, 2)}
    ///    2
    /// 1 [1]
    /// 2 [1]
    /// ```
    pub fn to_display_string(&self) -> Result<String> {
        let matrix = self.matrix_representation()?;
        Ok(format!("{}\n{}", self, matrix))
    }
}

fn lookup_error<T: fmt::Display>(element: &T, axis: Axis) -> RelationError {
    let element = element.to_string();
    warn!(%element, %axis, "Pair references an element outside the matrix labels");
    RelationError::Lookup { element, axis }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: cells plus labels reproduce the pair set exactly
        #[test]
        fn test_matrix_round_trip(pairs in prop::collection::btree_set((0u8..8, 0u8..8), 0..32)) {
            let r = Relation::from_pairs("R", pairs);
            let matrix = r.matrix_representation().unwrap();
            prop_assert_eq!(&matrix.to_pairs(), r.pairs());
            for (i, row) in matrix.rows().iter().enumerate() {
                for (j, column) in matrix.columns().iter().enumerate() {
                    prop_assert_eq!(matrix.cell(i, j), r.contains(row, column));
                }
            }
        }

        /// Property: carriers only widen the matrix
        #[test]
        fn test_matrix_with_carriers(
            pairs in prop::collection::btree_set((0u8..8, 0u8..8), 0..32)
        ) {
            let carrier: BTreeSet<u8> = (0..8).collect();
            let r = Relation::from_pairs("R", pairs).carriers(Some(carrier.clone()), Some(carrier));
            let matrix = r.matrix_representation().unwrap();
            prop_assert_eq!(matrix.dimensions(), (8, 8));
            prop_assert_eq!(&matrix.to_pairs(), r.pairs());
        }
    }
}
