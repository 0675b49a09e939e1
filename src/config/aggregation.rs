/*!
Ways to aggregate the similarities of an element to each member of a set into the membership of the element in the set.

For example, given similarities 0.2, 0.9, and 0.4:
- [Maximum](Aggregation::Maximum) gives 0.9, the similarity of the best match.
- [ArithmeticMean](Aggregation::ArithmeticMean) gives 0.5.
- [SoftmaxWeightedMean](Aggregation::SoftmaxWeightedMean) gives a mean which leans towards the best match, and leans more as the temperature falls.
*/

use std::str::FromStr;

use serde::Serialize;

/// Supported aggregations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Aggregation {
    /// The largest similarity.
    Maximum,

    /// The mean of all similarities.
    ArithmeticMean,

    /// The mean of all similarities, each weighted by the softmax of similarities scaled by `1 / temperature`.
    SoftmaxWeightedMean { temperature: f64 },
}

impl Aggregation {
    /// The temperature used by a softmax aggregation read without an explicit temperature.
    pub const DEFAULT_TEMPERATURE: f64 = 1.0;

    /// The aggregate of `values`, or 0.0 if there are no values.
    pub fn aggregate(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        match self {
            Self::Maximum => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),

            Self::ArithmeticMean => values.iter().sum::<f64>() / values.len() as f64,

            Self::SoftmaxWeightedMean { temperature } => {
                // Shifting by the maximum keeps each exponent at most zero.
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let mut weighted = 0.0;
                let mut mass = 0.0;
                for value in values {
                    let weight = ((value - max) / temperature).exp();
                    weighted += weight * value;
                    mass += weight;
                }
                weighted / mass
            }
        }
    }
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Maximum => write!(f, "max"),
            Self::ArithmeticMean => write!(f, "mean"),
            Self::SoftmaxWeightedMean { temperature } => write!(f, "softmax:{temperature}"),
        }
    }
}

impl FromStr for Aggregation {
    type Err = ();

    /// Reads `max`, `mean`, `softmax` or `softmax:<temperature>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(Self::Maximum),

            "mean" => Ok(Self::ArithmeticMean),

            "softmax" => Ok(Self::SoftmaxWeightedMean {
                temperature: Self::DEFAULT_TEMPERATURE,
            }),

            _ => match s.strip_prefix("softmax:") {
                Some(temperature) => match temperature.parse::<f64>() {
                    Ok(temperature) => Ok(Self::SoftmaxWeightedMean { temperature }),
                    Err(_) => Err(()),
                },
                None => Err(()),
            },
        }
    }
}
