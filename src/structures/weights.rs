/*!
Importance weights of clauses, predicates, and constants.

Each formula of a comparison has its own [Weights], made of three [maps](WeightMap):
- Clause weights, which decide how much the score of a pair of clauses contributes to the score of a formula.
- Predicate weights, which decide how much the similarity of predicates contributes to the score of a pair of literals.
- Constant weights, which decide how much the similarity of arguments contributes to the score of a pair of literals.

Weights are non-negative.
An absent predicate or constant has weight 0.0, while an absent clause has weight 1.0.

The predicate and constant weights of a formula are expected to form a budget which sums to 1.0.
When the budgets of the two formulas of a comparison do not, a [correction] term offsets the difference.

```rust
# use formula_sim::structures::weights::Weights;
let weights = Weights::default()
    .with_predicate("Teasing", 0.1)
    .with_predicate("AtLocation", 0.1)
    .with_constant("Dog", 0.35)
    .with_constant("Monkey", 0.35)
    .with_constant("Zoo", 0.1);

assert!((weights.budget() - 1.0).abs() < 1e-9);
assert_eq!(weights.predicate("Unknown"), 0.0);
```
*/

use std::collections::HashMap;

use crate::structures::clause::Clause;

/// A map from some key to a non-negative weight.
pub type WeightMap<K> = HashMap<K, f64>;

/// The weight of `key` in `map`, or 0.0 if `key` is absent.
pub fn weight_of<K, Q>(map: &WeightMap<K>, key: &Q) -> f64
where
    K: std::borrow::Borrow<Q> + std::hash::Hash + Eq,
    Q: std::hash::Hash + Eq + ?Sized,
{
    map.get(key).copied().unwrap_or(0.0)
}

/// The weights of a single formula.
#[derive(Clone, Debug, Default)]
pub struct Weights {
    pub clauses: WeightMap<Clause>,
    pub predicates: WeightMap<String>,
    pub constants: WeightMap<String>,
}

impl Weights {
    pub fn with_clause(mut self, clause: Clause, weight: f64) -> Self {
        self.clauses.insert(clause, weight);
        self
    }

    pub fn with_predicate(mut self, predicate: impl Into<String>, weight: f64) -> Self {
        self.predicates.insert(predicate.into(), weight);
        self
    }

    pub fn with_constant(mut self, constant: impl Into<String>, weight: f64) -> Self {
        self.constants.insert(constant.into(), weight);
        self
    }

    /// The weight of `clause`, or 1.0 if `clause` has no weight.
    pub fn clause(&self, clause: &Clause) -> f64 {
        self.clauses.get(clause).copied().unwrap_or(1.0)
    }

    /// The weight of `predicate`, or 0.0 if `predicate` has no weight.
    pub fn predicate(&self, predicate: &str) -> f64 {
        weight_of(&self.predicates, predicate)
    }

    /// The weight of `constant`, or 0.0 if `constant` has no weight.
    pub fn constant(&self, constant: &str) -> f64 {
        weight_of(&self.constants, constant)
    }

    /// The sum of all predicate and constant weights.
    pub fn budget(&self) -> f64 {
        self.predicates.values().sum::<f64>() + self.constants.values().sum::<f64>()
    }
}

/// Predicate and constant weights of both formulas of a comparison, merged into a single lookup.
///
/// Weights of the second formula are merged after weights of the first, so on a shared key the weight of the second formula is kept.
#[derive(Clone, Debug, Default)]
pub struct Importance {
    pub predicates: WeightMap<String>,
    pub constants: WeightMap<String>,
}

impl Importance {
    pub fn merge(first: &Weights, second: &Weights) -> Self {
        let mut importance = Importance::default();
        for weights in [first, second] {
            for (predicate, weight) in &weights.predicates {
                importance.predicates.insert(predicate.clone(), *weight);
            }
            for (constant, weight) in &weights.constants {
                importance.constants.insert(constant.clone(), *weight);
            }
        }
        importance
    }

    pub fn predicate(&self, predicate: &str) -> f64 {
        weight_of(&self.predicates, predicate)
    }

    pub fn constant(&self, constant: &str) -> f64 {
        weight_of(&self.constants, constant)
    }
}

/// The correction term of a comparison between formulas with `first` and `second` weights.
///
/// Two, less the predicate and constant budgets of both formulas.
/// So, the correction is zero when each budget sums to one, and any value within `tolerance` of zero is snapped to zero.
pub fn correction(first: &Weights, second: &Weights, tolerance: f64) -> f64 {
    let correction = 2.0 - first.budget() - second.budget();
    match correction.abs() < tolerance {
        true => 0.0,
        false => correction,
    }
}
