//! Clauses, aka. a set of literals.
//!
//! Whether a clause is read as a disjunction or a conjunction of its literals makes no difference to a score, and so clauses are treated purely as an unordered collection.
//!
//! ```rust
//! # use formula_sim::structures::clause::Clause;
//! # use formula_sim::structures::literal::Literal;
//! let clause = Clause::from_iter([
//!     Literal::new("Teasing", ["Dog", "Monkey"]),
//!     Literal::new("AtLocation", ["Dog", "Zoo"]),
//!     Literal::new("Teasing", ["Dog", "Monkey"]),
//! ]);
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.to_string(), "{AtLocation(Dog, Zoo), Teasing(Dog, Monkey)}");
//! ```
//!
//! - The empty clause scores 0.0 against any clause.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::structures::literal::Literal;

/// A set of literals, kept in canonical order.
///
/// Clauses are ordered by their (canonically ordered) literals, and this ordering is the canonical order of clauses within a [formula](crate::structures::formula).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// Adds `literal` to the clause, returning true if the literal was fresh.
    pub fn insert(&mut self, literal: Literal) -> bool {
        self.literals.insert(literal)
    }

    /// An iterator over all literals in the clause, in canonical order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause::from_iter([literal])
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.literals.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{literal}")?;
        }
        write!(f, "}}")
    }
}
