//! A library for scoring the semantic similarity of two formulas, each a set of clauses over predicate literals.
//!
//! formula_sim compares formulas which may use different surface wording for the same predicates and constants, and which may list literals in different orders.
//! A comparison gives a single score in [0, 1], along with a [trace] of every intermediate comparison made.
//!
//! # Orientation
//!
//! The library is designed around a [scorer](crate::scorer::Scorer), built from a [configuration](crate::config) and a capability for [atomic similarity](crate::atomic).
//!
//! How two tokens (e.g. `Dog` and `Canine`) are scored is left to the caller --- any symmetric function to [0, 1] will do.
//! Everything above tokens is handled by the library, through a handful of [procedures]:
//! - Argument lists are [aligned](crate::procedures::aligner), blending positional and unordered alignment.
//! - Literals are [scored](crate::procedures::literal) from their predicates and arguments, either flat or weighted by importance.
//! - Clauses are scored by a [Tversky coefficient](crate::procedures::tversky) over their literals.
//! - Clauses of one formula are paired with clauses of the other by a [correspondence](crate::procedures::correspondence).
//! - Formulas are [scored](crate::procedures::formula) by the weighted scores of corresponding clauses.
//!
//! Useful starting points, then, may be:
//! - The [formula procedure](crate::procedures::formula) for an overview of a comparison.
//! - The [structures] to familiarise yourself with literals, clauses, formulas and weights.
//! - The [builder] to read formulas from text.
//!
//! # Examples
//!
//! + Compare two formulas which differ only in the order of arguments of a single literal.
//!
//! ```rust
//! # use formula_sim::atomic::ExactMatch;
//! # use formula_sim::builder::read_formula;
//! # use formula_sim::scorer::Scorer;
//! # use formula_sim::trace::Level;
//! let weights = "
//! p Teasing 0.1
//! p AtLocation 0.1
//! k Dog 0.35
//! k Monkey 0.35
//! k Zoo 0.1
//! w 0.05 AtLocation(Dog, Zoo)
//! w 0.05 AtLocation(Monkey, Zoo)
//! ";
//!
//! let first = format!("{weights}\nw 0.9 Teasing(Dog, Monkey)");
//! let second = format!("{weights}\nw 0.9 Teasing(Monkey, Dog)");
//!
//! let first = read_formula(first.as_bytes()).expect("Well formed");
//! let second = read_formula(second.as_bytes()).expect("Well formed");
//!
//! let mut scorer = Scorer::new(ExactMatch);
//! let comparison = scorer.compare(&first, &second).expect("Balanced");
//!
//! assert!(0.0 < comparison.score && comparison.score < 1.0);
//! assert_eq!(comparison.trace.len(Level::ClauseWeighted), 3);
//! ```
//!
//! + Score tokens by edit distance, with a bounded cache.
//!
//! ```rust
//! # use formula_sim::atomic::{EditDistance, Memoized};
//! # use formula_sim::scorer::Scorer;
//! # use formula_sim::structures::literal::Literal;
//! let mut scorer = Scorer::new(Memoized::new(EditDistance, 1024));
//!
//! let score = scorer.literal_similarity(
//!     &Literal::new("IsHungry", ["Dog"]),
//!     &Literal::new("is_hungry", ["dogs"]),
//! );
//! assert!(0.5 < score && score < 1.0);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs on which clauses correspond can be found with `RUST_LOG=correspondence …` or,
//! - Logs of each literal comparison with `RUST_LOG=literal=trace …`

pub mod atomic;
pub mod builder;
pub mod config;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod scorer;
pub mod structures;
pub mod trace;
pub mod types;
