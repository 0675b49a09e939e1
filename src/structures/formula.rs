//! Formulas, aka. a set of clauses.
//!
//! ```rust
//! # use formula_sim::structures::{clause::Clause, formula::Formula, literal::Literal};
//! let formula = Formula::from_iter([
//!     Clause::from(Literal::new("Teasing", ["Dog", "Monkey"])),
//!     Clause::from(Literal::new("AtLocation", ["Dog", "Zoo"])),
//! ]);
//!
//! assert_eq!(formula.size(), 2);
//!
//! // Clauses are iterated in canonical order.
//! let first = formula.clauses().next().unwrap();
//! assert!(first.contains(&Literal::new("AtLocation", ["Dog", "Zoo"])));
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::structures::{clause::Clause, weights::Weights};

/// A set of clauses, kept in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formula {
    clauses: BTreeSet<Clause>,
}

impl Formula {
    /// Adds `clause` to the formula, returning true if the clause was fresh.
    pub fn insert(&mut self, clause: Clause) -> bool {
        self.clauses.insert(clause)
    }

    /// An iterator over all clauses in the formula, in canonical order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The number of clauses in the formula.
    pub fn size(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Formula {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, clause) in self.clauses.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

/// A formula paired with the weights of its clauses, predicates, and constants.
#[derive(Clone, Debug, Default)]
pub struct WeightedFormula {
    pub formula: Formula,
    pub weights: Weights,
}

impl WeightedFormula {
    pub fn new(formula: Formula, weights: Weights) -> Self {
        WeightedFormula { formula, weights }
    }
}
