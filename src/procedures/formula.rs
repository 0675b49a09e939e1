/*!
Similarity of two formulas.

# Overview

A [comparison](compare) of two weighted formulas proceeds as follows:

1. A fresh trace is made.
2. The weight budget of each formula is checked, if required by the [configuration](crate::config::BudgetCheck).
3. Predicate and constant weights of both formulas are [merged](Importance::merge), and the [correction] term is found.
4. The flat [clause score](crate::procedures::clause::flat) of every pair of clauses is found, in canonical order.
5. A [correspondence](crate::procedures::correspondence) is built from the flat scores.
6. Each pair of the correspondence is given a [weighted clause score](crate::procedures::clause::weighted).
7. The final score is the mean of the weighted scores, each weighted by the mean weight of the two clauses.

The final score, and each pair of the correspondence with its flat score, is recorded to the formula level of the trace.

If either formula has no clauses, the final score is 0.0.

# Flat comparison

In addition, [flat_compare] gives the [Tversky coefficient](crate::procedures::tversky) of the two formulas, as sets of clauses, under flat clause scores and ignoring all weights.
*/

use crate::{
    atomic::TermSimilarity,
    config::{BudgetCheck, Config},
    misc::log::targets::{self},
    procedures::{
        clause,
        correspondence::{CorrespondenceStrategy, SimilarityMatrix},
        tversky::{tversky, TverskyScore},
    },
    structures::{
        clause::Clause,
        formula::WeightedFormula,
        weights::{correction, Importance, Weights},
    },
    trace::Trace,
    types::err::{BudgetError, ErrorKind, Side},
};

/// The result of a comparison.
#[derive(Clone, Debug)]
pub struct Comparison {
    /// The final score, in [0, 1].
    pub score: f64,

    /// The correction term used for weighted scores.
    pub correction: f64,

    /// A record of every comparison made.
    pub trace: Trace,
}

/// Checks the budget of `weights` as required by `config`.
fn check_budget(weights: &Weights, side: Side, config: &Config) -> Result<(), BudgetError> {
    let total = weights.budget();
    if (total - 1.0).abs() <= config.correction_tolerance.value {
        return Ok(());
    }

    match config.budget {
        BudgetCheck::Permissive => {
            log::warn!(target: targets::FORMULA, "Weights of the {side} formula sum to {total}");
            Ok(())
        }
        BudgetCheck::Strict => Err(BudgetError::Unbalanced { side, total }),
    }
}

/// Compares `first` with `second`.
pub fn compare(
    first: &WeightedFormula,
    second: &WeightedFormula,
    similarity: &mut impl TermSimilarity,
    config: &Config,
    strategy: &dyn CorrespondenceStrategy,
) -> Result<Comparison, ErrorKind> {
    let mut trace = Trace::new(config.trace);

    check_budget(&first.weights, Side::First, config)?;
    check_budget(&second.weights, Side::Second, config)?;

    let importance = Importance::merge(&first.weights, &second.weights);
    let correction = correction(
        &first.weights,
        &second.weights,
        config.correction_tolerance.value,
    );
    log::debug!(target: targets::FORMULA, "Correction: {correction}");

    let blend = config.blend.factors();
    let parameters = config.clause.parameters();

    let first_clauses = first.formula.clauses().collect::<Vec<_>>();
    let second_clauses = second.formula.clauses().collect::<Vec<_>>();

    let mut matrix = SimilarityMatrix::new(first_clauses.len(), second_clauses.len());
    for (row, x) in first_clauses.iter().enumerate() {
        for (column, y) in second_clauses.iter().enumerate() {
            let score = clause::flat(x, y, similarity, blend, &mut trace);
            matrix.set(row, column, score.score);
        }
    }

    let correspondence = strategy.correspond(&matrix);

    let mut weighted_sum = 0.0;
    let mut mass = 0.0;
    for (row, column) in &correspondence {
        let (x, y) = (first_clauses[*row], second_clauses[*column]);

        let score = clause::weighted(
            x,
            y,
            similarity,
            &importance,
            &parameters,
            blend,
            correction,
            &mut trace,
        );

        let weight = (first.weights.clause(x) + second.weights.clause(y)) / 2.0;
        weighted_sum += score.score * weight;
        mass += weight;
    }

    let score = match mass > 0.0 {
        true => (weighted_sum / mass).clamp(0.0, 1.0),
        false => 0.0,
    };

    trace.record_total(&TverskyScore {
        score,
        ..TverskyScore::default()
    });
    for (row, column) in &correspondence {
        trace.record_correspondence(
            first_clauses[*row],
            second_clauses[*column],
            matrix.get(*row, *column),
        );
    }

    log::info!(target: targets::FORMULA, "Score: {score} over {} pairs", correspondence.len());

    Ok(Comparison {
        score,
        correction,
        trace,
    })
}

/// The flat coefficient of `first` and `second`, as sets of clauses.
///
/// The coefficient uses the configured clause parameters, with flat clause scores as the similarity of clauses.
/// The masses of the coefficient are recorded as the total of the formula level of the trace.
pub fn flat_compare(
    first: &WeightedFormula,
    second: &WeightedFormula,
    similarity: &mut impl TermSimilarity,
    config: &Config,
) -> Comparison {
    let mut trace = Trace::new(config.trace);
    let blend = config.blend.factors();

    let first_clauses = first.formula.clauses().collect::<Vec<_>>();
    let second_clauses = second.formula.clauses().collect::<Vec<_>>();

    let score = tversky(
        &first_clauses,
        &second_clauses,
        |x: &&Clause, y: &&Clause| clause::flat(x, y, similarity, blend, &mut trace).score,
        &config.clause.parameters(),
    );

    log::info!(target: targets::FORMULA, "Flat score: {}", score.score);
    trace.record_total(&score);

    Comparison {
        score: score.score,
        correction: 0.0,
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        atomic::ExactMatch,
        procedures::correspondence::GreedyCover,
        structures::{formula::Formula, literal::Literal},
        trace::{FormulaEntry, Level},
    };

    fn singleton(predicate: &str, arguments: [&str; 2]) -> Clause {
        Clause::from(Literal::new(predicate, arguments))
    }

    fn balanced() -> Weights {
        Weights::default()
            .with_predicate("AtLocation", 0.2)
            .with_constant("Dog", 0.4)
            .with_constant("Zoo", 0.4)
    }

    #[test]
    fn empty_formula() {
        let empty = WeightedFormula::default();
        let some = WeightedFormula::new(
            Formula::from_iter([singleton("AtLocation", ["Dog", "Zoo"])]),
            balanced(),
        );

        for (first, second) in [(&empty, &some), (&some, &empty), (&empty, &empty)] {
            let comparison =
                compare(first, second, &mut ExactMatch, &Config::default(), &GreedyCover);
            let comparison = comparison.expect("Permissive comparison");
            assert_eq!(comparison.score, 0.0);
            assert!(comparison.score.is_finite());
        }
    }

    #[test]
    fn strict_budget() {
        let formula = Formula::from_iter([singleton("AtLocation", ["Dog", "Zoo"])]);
        let first = WeightedFormula::new(formula.clone(), balanced());
        let second = WeightedFormula::new(formula, balanced().with_constant("Zoo", 0.1));

        let mut config = Config::default();
        assert!(compare(&first, &second, &mut ExactMatch, &config, &GreedyCover).is_ok());

        config.budget = BudgetCheck::Strict;
        assert!(compare(&first, &first, &mut ExactMatch, &config, &GreedyCover).is_ok());

        match compare(&first, &second, &mut ExactMatch, &config, &GreedyCover) {
            Err(ErrorKind::Budget(BudgetError::Unbalanced { side, total })) => {
                assert_eq!(side, Side::Second);
                assert!((total - 0.7).abs() < 1e-9);
            }
            _ => panic!("Expected an unbalanced budget"),
        }
    }

    #[test]
    fn identity() {
        let formula = Formula::from_iter([
            singleton("AtLocation", ["Dog", "Zoo"]),
            Clause::from_iter([
                Literal::new("AtLocation", ["Zoo", "Dog"]),
                Literal::new("AtLocation", ["Dog", "Dog"]),
            ]),
        ]);
        let weighted = WeightedFormula::new(formula, balanced());

        let comparison = compare(
            &weighted,
            &weighted,
            &mut ExactMatch,
            &Config::default(),
            &GreedyCover,
        )
        .expect("Permissive comparison");

        assert!((comparison.score - 1.0).abs() < 1e-12);
        assert_eq!(comparison.correction, 0.0);

        for entry in comparison.trace.clauses(Level::ClauseWeighted) {
            assert!((entry.score - 1.0).abs() < 1e-12);
        }
        match comparison.trace.formula().first() {
            Some(FormulaEntry::Total { score, .. }) => assert_eq!(*score, comparison.score),
            _ => panic!("Missing total"),
        }
    }

    #[test]
    fn flat_coefficient() {
        let first = WeightedFormula::new(
            Formula::from_iter([
                singleton("AtLocation", ["Dog", "Zoo"]),
                singleton("AtLocation", ["Monkey", "Zoo"]),
            ]),
            Weights::default(),
        );
        let second = WeightedFormula::new(
            Formula::from_iter([singleton("AtLocation", ["Dog", "Zoo"])]),
            Weights::default(),
        );

        let comparison = flat_compare(&first, &second, &mut ExactMatch, &Config::default());
        assert!(0.0 < comparison.score && comparison.score < 1.0);
        assert_eq!(comparison.trace.len(Level::ClauseFlat), 2);

        let identical = flat_compare(&first, &first, &mut ExactMatch, &Config::default());
        assert_eq!(identical.score, 1.0);
    }
}
