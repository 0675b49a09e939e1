/*!
A generalised, asymmetric, similarity coefficient between two sets.

Given sets *X* and *Y*, a pairwise similarity *sim*, an [aggregation](Aggregation) *agg*, a power *p*, and coefficients *α* and *β*:

- The membership of *x* in *Y* is *agg*({ *sim*(*x*, *y*)*ᵖ* : *y* ∈ *Y* }), and likewise for the membership of *y* in *X*.
- *a* is the mean of the total membership of *X* in *Y* and the total membership of *Y* in *X*.
- *b* is the total non-membership of *X* in *Y*, and *c* the total non-membership of *Y* in *X*.
- The coefficient is *a* / (*a* + *α b* + *β c*), or 0.0 if the denominator is not positive.

When *α* = *β* the coefficient is symmetric.
If either set is empty, the coefficient is 0.0.

The coefficient is used both for clauses, as sets of literals, and for formulas, as sets of clauses.

```rust
# use formula_sim::procedures::tversky::{tversky, TverskyParameters};
let first = [1, 2, 3];
let second = [2, 3];

let equal = |x: &i32, y: &i32| if x == y { 1.0 } else { 0.0 };

let score = tversky(&first, &second, equal, &TverskyParameters::FLAT);
assert_eq!((score.a, score.b, score.c), (2.0, 1.0, 0.0));
assert_eq!(score.score, 2.0 / 3.0);
```
*/

use serde::Serialize;

use crate::config::Aggregation;

/// Parameters of the coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TverskyParameters {
    pub alpha: f64,
    pub beta: f64,
    pub power: f64,
    pub aggregation: Aggregation,
}

impl TverskyParameters {
    /// Unit coefficients, unit power, and membership by best match.
    pub const FLAT: TverskyParameters = TverskyParameters {
        alpha: 1.0,
        beta: 1.0,
        power: 1.0,
        aggregation: Aggregation::Maximum,
    };
}

/// The masses and value of a coefficient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TverskyScore {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub score: f64,
}

/// The coefficient of `first` and `second`.
///
/// Each pair is passed to `similarity` exactly once, with an element of `first` followed by an element of `second`.
/// Pairs are visited in order of `first` and then `second`.
pub fn tversky<X, Y>(
    first: &[X],
    second: &[Y],
    mut similarity: impl FnMut(&X, &Y) -> f64,
    parameters: &TverskyParameters,
) -> TverskyScore {
    if first.is_empty() || second.is_empty() {
        return TverskyScore::default();
    }

    let columns = second.len();
    let mut matrix = Vec::with_capacity(first.len() * columns);
    for x in first {
        for y in second {
            matrix.push(similarity(x, y).powf(parameters.power));
        }
    }

    let mut column = Vec::with_capacity(first.len());

    let memberships_first = matrix
        .chunks(columns)
        .map(|row| parameters.aggregation.aggregate(row))
        .collect::<Vec<_>>();

    let memberships_second = (0..columns)
        .map(|index| {
            column.clear();
            column.extend(matrix.iter().skip(index).step_by(columns));
            parameters.aggregation.aggregate(&column)
        })
        .collect::<Vec<_>>();

    let a = (memberships_first.iter().sum::<f64>() + memberships_second.iter().sum::<f64>()) / 2.0;
    let b = memberships_first.iter().map(|m| 1.0 - m).sum::<f64>();
    let c = memberships_second.iter().map(|m| 1.0 - m).sum::<f64>();

    let denominator = a + parameters.alpha * b + parameters.beta * c;
    let score = match denominator > 0.0 {
        true => (a / denominator).clamp(0.0, 1.0),
        false => 0.0,
    };

    TverskyScore { a, b, c, score }
}
