/*!
Which clause of one formula is compared with which clause of another.

A correspondence is a set of pairs of indices, the first into the (canonically ordered) clauses of the first formula and the second into the clauses of the second formula.

A correspondence is built by some [CorrespondenceStrategy] from a [SimilarityMatrix] of flat clause scores.
The provided strategy is [GreedyCover]:
- Each clause of the first formula is paired with its most similar clause in the second formula.
- Each clause of the second formula is paired with its most similar clause in the first formula.
- Ties go to the clause first in canonical order.

The union of these pairs covers every clause of both formulas, though some clause may appear in many pairs.
No pairing is guaranteed to be optimal, and a strategy which finds an optimal assignment may be used in place of [GreedyCover].

```rust
# use formula_sim::procedures::correspondence::{CorrespondenceStrategy, GreedyCover, SimilarityMatrix};
let mut matrix = SimilarityMatrix::new(2, 3);
matrix.set(0, 0, 0.9);
matrix.set(1, 0, 0.8);
matrix.set(1, 2, 0.3);

let pairs = GreedyCover.correspond(&matrix);
assert_eq!(pairs.into_iter().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (1, 0), (1, 2)]);
```
*/

use std::collections::BTreeSet;

use crate::misc::log::targets::{self};

/// A set of pairs of clause indices.
pub type Correspondence = BTreeSet<(usize, usize)>;

/// A dense matrix of similarities, with a row for each clause of the first formula and a column for each clause of the second.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// A matrix of zeros.
    pub fn new(rows: usize, columns: usize) -> Self {
        SimilarityMatrix {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The similarity at `row`, `column`.
    ///
    /// # Panics
    /// If `row` or `column` is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        assert!(row < self.rows && column < self.columns);
        self.values[row * self.columns + column]
    }

    /// # Panics
    /// If `row` or `column` is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        assert!(row < self.rows && column < self.columns);
        self.values[row * self.columns + column] = value;
    }

    /// The column of the largest value in `row`, or None if there are no columns.
    pub fn best_in_row(&self, row: usize) -> Option<usize> {
        first_maximum((0..self.columns).map(|column| self.get(row, column)))
    }

    /// The row of the largest value in `column`, or None if there are no rows.
    pub fn best_in_column(&self, column: usize) -> Option<usize> {
        first_maximum((0..self.rows).map(|row| self.get(row, column)))
    }
}

/// The index of the first largest value.
fn first_maximum(values: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in values.enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Something which builds a correspondence from a matrix of similarities.
pub trait CorrespondenceStrategy {
    /// A correspondence covering every row and every column of `matrix`.
    fn correspond(&self, matrix: &SimilarityMatrix) -> Correspondence;
}

/// Pairs each clause with its best match, in both directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyCover;

impl CorrespondenceStrategy for GreedyCover {
    fn correspond(&self, matrix: &SimilarityMatrix) -> Correspondence {
        let mut correspondence = Correspondence::default();

        for row in 0..matrix.rows() {
            if let Some(column) = matrix.best_in_row(row) {
                correspondence.insert((row, column));
            }
        }

        for column in 0..matrix.columns() {
            if let Some(row) = matrix.best_in_column(column) {
                correspondence.insert((row, column));
            }
        }

        log::debug!(target: targets::CORRESPONDENCE, "Pairs: {correspondence:?}");
        correspondence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_from(rows: &[&[f64]]) -> SimilarityMatrix {
        let columns = rows.first().map_or(0, |row| row.len());
        let mut matrix = SimilarityMatrix::new(rows.len(), columns);
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                matrix.set(r, c, *value);
            }
        }
        matrix
    }

    #[test]
    fn diagonal() {
        let matrix = matrix_from(&[&[1.0, 0.2, 0.1], &[0.3, 1.0, 0.0], &[0.1, 0.1, 0.4]]);
        let pairs = GreedyCover.correspond(&matrix);
        assert_eq!(pairs, Correspondence::from([(0, 0), (1, 1), (2, 2)]));
    }

    #[test]
    fn covering() {
        // Every row prefers the first column.
        let matrix = matrix_from(&[&[0.9, 0.1], &[0.8, 0.2], &[0.7, 0.6]]);
        let pairs = GreedyCover.correspond(&matrix);

        for row in 0..matrix.rows() {
            assert!(pairs.iter().any(|(r, _)| *r == row));
        }
        for column in 0..matrix.columns() {
            assert!(pairs.iter().any(|(_, c)| *c == column));
        }
        assert_eq!(pairs, Correspondence::from([(0, 0), (1, 0), (2, 0), (2, 1)]));
    }

    #[test]
    fn ties_go_first() {
        let matrix = matrix_from(&[&[0.5, 0.5], &[0.5, 0.5]]);
        let pairs = GreedyCover.correspond(&matrix);
        assert_eq!(pairs, Correspondence::from([(0, 0), (1, 0), (0, 1)]));
    }

    #[test]
    fn empty() {
        let matrix = SimilarityMatrix::new(0, 3);
        assert!(GreedyCover.correspond(&matrix).is_empty());

        let matrix = SimilarityMatrix::new(2, 0);
        assert!(GreedyCover.correspond(&matrix).is_empty());
    }

    #[test]
    fn transposition() {
        let matrix = matrix_from(&[&[0.2, 0.7, 0.7], &[0.9, 0.1, 0.3]]);
        let mut transposed = SimilarityMatrix::new(3, 2);
        for r in 0..2 {
            for c in 0..3 {
                transposed.set(c, r, matrix.get(r, c));
            }
        }

        let pairs = GreedyCover.correspond(&matrix);
        let transposed_pairs = GreedyCover
            .correspond(&transposed)
            .into_iter()
            .map(|(r, c)| (c, r))
            .collect::<Correspondence>();
        assert_eq!(pairs, transposed_pairs);
    }
}
