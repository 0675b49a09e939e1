/*!
The scorer --- which holds a configuration and a capability for atomic similarity, and within which comparisons take place.

A scorer owns its capability, and so owns any cache the capability holds.
As a fresh [trace](crate::trace) is made for each comparison, the only state carried from one comparison to the next is the state of the capability.

# Example
```rust
# use formula_sim::atomic::{ExactMatch, Memoized};
# use formula_sim::scorer::Scorer;
# use formula_sim::structures::{clause::Clause, formula::{Formula, WeightedFormula}, literal::Literal, weights::Weights};
let mut scorer = Scorer::new(Memoized::new(ExactMatch, 4096));

let weights = Weights::default()
    .with_predicate("AtLocation", 0.2)
    .with_constant("Dog", 0.4)
    .with_constant("Zoo", 0.4);

let first = WeightedFormula::new(
    Formula::from_iter([Clause::from(Literal::new("AtLocation", ["Dog", "Zoo"]))]),
    weights.clone(),
);
let second = WeightedFormula::new(
    Formula::from_iter([Clause::from(Literal::new("AtLocation", ["Zoo", "Dog"]))]),
    weights,
);

let comparison = scorer.compare(&first, &second).expect("Permissive comparison");
assert!(0.0 < comparison.score && comparison.score < 1.0);

assert!(scorer.similarity().hits() > 0);
```
*/

use crate::{
    atomic::TermSimilarity,
    config::Config,
    procedures::{
        correspondence::{CorrespondenceStrategy, GreedyCover},
        formula::{self, Comparison},
        literal,
    },
    structures::{formula::WeightedFormula, literal::Literal},
    trace::Trace,
    types::err::ErrorKind,
};

/// A scorer, parameratised to a capability for atomic similarity.
pub struct Scorer<S: TermSimilarity> {
    /// The configuration of the scorer.
    config: Config,

    /// The capability for atomic similarity.
    similarity: S,

    /// How corresponding clauses are found.
    strategy: Box<dyn CorrespondenceStrategy>,
}

impl<S: TermSimilarity> Scorer<S> {
    /// A scorer with the default configuration.
    pub fn new(similarity: S) -> Self {
        Scorer {
            config: Config::default(),
            similarity,
            strategy: Box::new(GreedyCover),
        }
    }

    /// A scorer with the given configuration, if valid.
    pub fn from_config(config: Config, similarity: S) -> Result<Self, ErrorKind> {
        config.validate()?;
        Ok(Scorer {
            config,
            similarity,
            strategy: Box::new(GreedyCover),
        })
    }

    /// Replaces the strategy used to find corresponding clauses.
    pub fn set_strategy(&mut self, strategy: Box<dyn CorrespondenceStrategy>) {
        self.strategy = strategy;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The capability of the scorer, e.g. to inspect a cache.
    pub fn similarity(&self) -> &S {
        &self.similarity
    }

    pub fn into_similarity(self) -> S {
        self.similarity
    }

    /// The weighted similarity of `first` and `second`.
    ///
    /// Fails only on an unbalanced weight budget, under a strict budget check.
    pub fn compare(
        &mut self,
        first: &WeightedFormula,
        second: &WeightedFormula,
    ) -> Result<Comparison, ErrorKind> {
        formula::compare(
            first,
            second,
            &mut self.similarity,
            &self.config,
            self.strategy.as_ref(),
        )
    }

    /// The flat similarity of `first` and `second`, ignoring all weights.
    pub fn flat_compare(&mut self, first: &WeightedFormula, second: &WeightedFormula) -> Comparison {
        formula::flat_compare(first, second, &mut self.similarity, &self.config)
    }

    /// The flat similarity of two literals.
    pub fn literal_similarity(&mut self, first: &Literal, second: &Literal) -> f64 {
        literal::flat(
            first,
            second,
            &mut self.similarity,
            self.config.blend.factors(),
            &mut Trace::silent(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{atomic::ExactMatch, types::err::ConfigError};

    #[test]
    fn invalid_config() {
        let mut config = Config::default();
        config.blend.unordered.value = 0.5;

        match Scorer::from_config(config, ExactMatch) {
            Err(ErrorKind::Config(ConfigError::Blend)) => {}
            _ => panic!("Expected a blend error"),
        }
    }

    #[test]
    fn swapped_literals() {
        let mut scorer = Scorer::new(ExactMatch);
        let forward = Literal::new("Teasing", ["Dog", "Monkey"]);
        let backward = Literal::new("Teasing", ["Monkey", "Dog"]);

        let score = scorer.literal_similarity(&forward, &backward);
        assert!(0.0 < score && score < 1.0);
        assert_eq!(score, scorer.literal_similarity(&backward, &forward));
    }
}
