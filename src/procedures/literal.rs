/*!
Similarity of two literals.

A literal score combines the similarity of the predicates with the [alignment](crate::procedures::aligner) of the arguments.

- [flat] gives predicates and arguments equal say, and treats every argument as equally important.
  Flat scores are used to decide which clauses correspond.
- [weighted] takes importance from predicate and constant weights:
  + The predicates count for the product of the weights of each predicate.
  + The arguments count for the sum of the products of weights of every pair of arguments, across the full cross product of the lists.

  The weighted score is the weighted mean of the two, with the correction term added to the mass.

Both procedures record each distinct (unordered) pair of literals to the trace.
*/

use crate::{
    atomic::{compare, TermSimilarity},
    misc::log::targets::{self},
    procedures::{
        aligner::{align, ArgumentWeights, BlendFactors},
        normalized,
    },
    structures::{literal::Literal, weights::Importance},
    trace::{Level, Trace},
};

/// The flat score of `first` and `second`.
///
/// Half predicate similarity and half argument similarity.
/// If neither literal has arguments, the score is the predicate similarity.
pub fn flat(
    first: &Literal,
    second: &Literal,
    similarity: &mut impl TermSimilarity,
    blend: BlendFactors,
    trace: &mut Trace,
) -> f64 {
    let predicate = compare(similarity, first.predicate(), second.predicate());

    let arguments = align(
        first.arguments(),
        second.arguments(),
        similarity,
        ArgumentWeights::Uniform,
        blend,
        0.0,
    )
    .score;

    let combined = match first.arity() == 0 && second.arity() == 0 {
        true => predicate,
        false => 0.5 * predicate + 0.5 * arguments,
    };

    log::trace!(target: targets::LITERAL, "Flat {first} ~ {second}: {combined}");
    trace.record_literals(Level::LiteralFlat, first, second, predicate, arguments, combined);
    combined
}

/// The weighted score of `first` and `second`.
pub fn weighted(
    first: &Literal,
    second: &Literal,
    similarity: &mut impl TermSimilarity,
    importance: &Importance,
    blend: BlendFactors,
    correction: f64,
    trace: &mut Trace,
) -> f64 {
    let predicate = compare(similarity, first.predicate(), second.predicate());
    let predicate_importance =
        importance.predicate(first.predicate()) * importance.predicate(second.predicate());

    let arguments = align(
        first.arguments(),
        second.arguments(),
        similarity,
        ArgumentWeights::Mapped {
            first: &importance.constants,
            second: &importance.constants,
        },
        blend,
        correction,
    )
    .score;

    // The sum over the cross product factors into a product of sums.
    let argument_importance = first
        .arguments()
        .iter()
        .map(|a| importance.constant(a))
        .sum::<f64>()
        * second
            .arguments()
            .iter()
            .map(|b| importance.constant(b))
            .sum::<f64>();

    let combined = normalized(
        predicate * predicate_importance + arguments * argument_importance,
        predicate_importance + argument_importance,
        correction,
    );

    log::trace!(target: targets::LITERAL, "Weighted {first} ~ {second}: {combined}");
    trace.record_literals(Level::LiteralWeighted, first, second, predicate, arguments, combined);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{atomic::ExactMatch, config::TraceConfig, structures::weights::Weights};

    fn animal_importance() -> Importance {
        let weights = Weights::default()
            .with_predicate("Teasing", 0.1)
            .with_predicate("AtLocation", 0.1)
            .with_constant("Dog", 0.35)
            .with_constant("Monkey", 0.35)
            .with_constant("Zoo", 0.1);
        Importance::merge(&weights, &weights)
    }

    #[test]
    fn flat_swapped() {
        let mut trace = Trace::new(TraceConfig::default());
        let forward = Literal::new("Teasing", ["Dog", "Monkey"]);
        let backward = Literal::new("Teasing", ["Monkey", "Dog"]);

        let score = flat(&forward, &backward, &mut ExactMatch, BlendFactors::default(), &mut trace);
        assert!((score - 0.6).abs() < 1e-12);

        let reversed = flat(&backward, &forward, &mut ExactMatch, BlendFactors::default(), &mut trace);
        assert_eq!(score, reversed);

        assert_eq!(trace.len(Level::LiteralFlat), 1);
        let entry = &trace.literals(Level::LiteralFlat)[0];
        assert_eq!(entry.predicate, 1.0);
        assert!((entry.arguments - 0.2).abs() < 1e-12);
    }

    #[test]
    fn flat_nullary() {
        let mut trace = Trace::silent();
        let raining = Literal::nullary("Raining");

        let score = flat(&raining, &raining, &mut ExactMatch, BlendFactors::default(), &mut trace);
        assert_eq!(score, 1.0);

        let against = Literal::new("Raining", ["Zoo"]);
        let score = flat(&raining, &against, &mut ExactMatch, BlendFactors::default(), &mut trace);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn weighted_swapped() {
        let mut trace = Trace::new(TraceConfig::default());
        let importance = animal_importance();
        let forward = Literal::new("Teasing", ["Dog", "Monkey"]);
        let backward = Literal::new("Teasing", ["Monkey", "Dog"]);

        let score = weighted(
            &forward,
            &backward,
            &mut ExactMatch,
            &importance,
            BlendFactors::default(),
            0.0,
            &mut trace,
        );

        // Predicates: 1.0 with importance 0.01.
        // Arguments: 0.2 with importance 0.7 * 0.7.
        assert!((score - (0.01 + 0.2 * 0.49) / 0.5).abs() < 1e-12);
        assert_eq!(trace.len(Level::LiteralWeighted), 1);
    }

    #[test]
    fn weighted_identity() {
        let mut trace = Trace::silent();
        let importance = animal_importance();
        let literal = Literal::new("AtLocation", ["Dog", "Zoo"]);

        let score = weighted(
            &literal,
            &literal,
            &mut ExactMatch,
            &importance,
            BlendFactors::default(),
            0.0,
            &mut trace,
        );
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_without_importance() {
        let mut trace = Trace::silent();
        let importance = Importance::default();
        let literal = Literal::new("AtLocation", ["Dog", "Zoo"]);

        let score = weighted(
            &literal,
            &literal,
            &mut ExactMatch,
            &importance,
            BlendFactors::default(),
            2.0,
            &mut trace,
        );
        assert_eq!(score, 0.0);
    }
}
