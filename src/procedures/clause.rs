//! Similarity of two clauses, as a [Tversky coefficient](crate::procedures::tversky) over their literals.
//!
//! - [flat] scores literals with [flat literal scores](crate::procedures::literal::flat), under [flat parameters](TverskyParameters::FLAT).
//! - [weighted] scores literals with [weighted literal scores](crate::procedures::literal::weighted), under configured parameters.
//!
//! Each (unordered) pair of clauses is recorded once to the trace, along with the masses of the coefficient.

use crate::{
    atomic::TermSimilarity,
    misc::log::targets::{self},
    procedures::{
        aligner::BlendFactors,
        literal,
        tversky::{tversky, TverskyParameters, TverskyScore},
    },
    structures::{clause::Clause, literal::Literal, weights::Importance},
    trace::{Level, Trace},
};

/// The flat coefficient of `first` and `second`.
pub fn flat(
    first: &Clause,
    second: &Clause,
    similarity: &mut impl TermSimilarity,
    blend: BlendFactors,
    trace: &mut Trace,
) -> TverskyScore {
    let first_literals = first.literals().collect::<Vec<_>>();
    let second_literals = second.literals().collect::<Vec<_>>();

    let score = tversky(
        &first_literals,
        &second_literals,
        |x: &&Literal, y: &&Literal| literal::flat(x, y, similarity, blend, trace),
        &TverskyParameters::FLAT,
    );

    log::debug!(target: targets::CLAUSE, "Flat {first} ~ {second}: {}", score.score);
    trace.record_clauses(Level::ClauseFlat, first, second, &score);
    score
}

/// The weighted coefficient of `first` and `second`.
#[allow(clippy::too_many_arguments)]
pub fn weighted(
    first: &Clause,
    second: &Clause,
    similarity: &mut impl TermSimilarity,
    importance: &Importance,
    parameters: &TverskyParameters,
    blend: BlendFactors,
    correction: f64,
    trace: &mut Trace,
) -> TverskyScore {
    let first_literals = first.literals().collect::<Vec<_>>();
    let second_literals = second.literals().collect::<Vec<_>>();

    let score = tversky(
        &first_literals,
        &second_literals,
        |x: &&Literal, y: &&Literal| {
            literal::weighted(x, y, similarity, importance, blend, correction, trace)
        },
        parameters,
    );

    log::debug!(target: targets::CLAUSE, "Weighted {first} ~ {second}: {}", score.score);
    trace.record_clauses(Level::ClauseWeighted, first, second, &score);
    score
}
