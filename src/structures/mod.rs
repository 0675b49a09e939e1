//! Key structures: literals, clauses, formulas and weights.
//!
//! # Literals, clauses and formulas
//!
//! A [literal](literal) is a predicate paired with an ordered list of arguments, e.g. `Teasing(Dog, Monkey)`.
//!
//! A [clause](clause) is a set of literals, and a [formula](formula) is a set of clauses.
//! As sets, neither the order in which literals are added to a clause nor the order in which clauses are added to a formula matters, and duplicates collapse.
//!
//! Sets are kept in their canonical order, i.e. literals are ordered by predicate and then arguments, and clauses are ordered by their (ordered) literals.
//! All iteration over clauses and literals follows the canonical order, and so ties in any comparison are broken the same way from run to run.
//!
//! # Weights
//!
//! [Weights](weights) express how much a predicate, constant, or clause should influence a score.
//! Each formula of a comparison comes with its own weights.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod weights;
