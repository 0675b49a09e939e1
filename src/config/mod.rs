/*!
Configuration of a scorer.

All configuration for a [scorer](crate::scorer::Scorer) is contained within [Config].
Numeric options are [bounded](ConfigOption), and a configuration is [validated](Config::validate) when a scorer is built.

```rust
# use formula_sim::config::{Aggregation, Config};
let mut config = Config::default();
config.clause.alpha.value = 0.8;
config.clause.aggregation = Aggregation::SoftmaxWeightedMean { temperature: 0.5 };
assert!(config.validate().is_ok());

config.blend.positional.value = 0.9;
assert!(config.validate().is_err());
```
*/

mod aggregation;
pub use aggregation::Aggregation;

mod config_option;
pub use config_option::ConfigOption;

use serde::Serialize;

use crate::{
    procedures::{aligner::BlendFactors, tversky::TverskyParameters},
    trace::Level,
    types::err::ConfigError,
};

/// Permitted distance from one of the sum of the parts of a blend.
const BLEND_TOLERANCE: f64 = 1e-9;

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// Parameters of the weighted comparison of clauses.
    pub clause: TverskyConfig,

    /// How positional and unordered alignment of arguments are blended.
    pub blend: Blend,

    /// Which trace levels are recorded.
    pub trace: TraceConfig,

    /// Whether the weight budget of a formula is checked before a comparison.
    pub budget: BudgetCheck,

    /// Correction terms closer to zero than this are snapped to zero.
    pub correction_tolerance: ConfigOption<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clause: TverskyConfig::default(),
            blend: Blend::default(),
            trace: TraceConfig::default(),
            budget: BudgetCheck::Permissive,

            correction_tolerance: ConfigOption {
                name: "correction_tolerance",
                min: 0.0,
                max: 1.0,
                value: 1e-4,
            },
        }
    }
}

impl Config {
    /// Ok if every option is within bounds, otherwise an error on the first option found out of bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clause.validate()?;
        self.blend.validate()?;
        self.correction_tolerance.check()?;
        Ok(())
    }
}

/// Parameters of a Tversky coefficient.
#[derive(Clone, Debug, Serialize)]
pub struct TverskyConfig {
    /// The weight of similarity mass found only in the first set.
    pub alpha: ConfigOption<f64>,

    /// The weight of similarity mass found only in the second set.
    pub beta: ConfigOption<f64>,

    /// The power each pairwise similarity is raised to.
    pub power: ConfigOption<f64>,

    /// How pairwise similarities are aggregated into membership of a set.
    pub aggregation: Aggregation,
}

impl Default for TverskyConfig {
    fn default() -> Self {
        TverskyConfig {
            alpha: ConfigOption {
                name: "alpha",
                min: 0.0,
                max: f64::MAX,
                value: 0.5,
            },

            beta: ConfigOption {
                name: "beta",
                min: 0.0,
                max: f64::MAX,
                value: 0.5,
            },

            power: ConfigOption {
                name: "power",
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
                value: 1.0,
            },

            aggregation: Aggregation::Maximum,
        }
    }
}

impl TverskyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alpha.check()?;
        self.beta.check()?;
        self.power.check()?;
        match self.aggregation {
            // Written to also catch NaN.
            Aggregation::SoftmaxWeightedMean { temperature } if !(temperature > 0.0) => {
                Err(ConfigError::Temperature)
            }
            _ => Ok(()),
        }
    }

    /// The configured values, detached from their bounds.
    pub fn parameters(&self) -> TverskyParameters {
        TverskyParameters {
            alpha: self.alpha.value,
            beta: self.beta.value,
            power: self.power.value,
            aggregation: self.aggregation,
        }
    }
}

/// How positional and unordered alignment of arguments are blended.
///
/// The two parts are expected to sum to one.
#[derive(Clone, Debug, Serialize)]
pub struct Blend {
    pub positional: ConfigOption<f64>,
    pub unordered: ConfigOption<f64>,
}

impl Default for Blend {
    fn default() -> Self {
        Blend {
            positional: ConfigOption {
                name: "positional",
                min: 0.0,
                max: 1.0,
                value: 0.8,
            },

            unordered: ConfigOption {
                name: "unordered",
                min: 0.0,
                max: 1.0,
                value: 0.2,
            },
        }
    }
}

impl Blend {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.positional.check()?;
        self.unordered.check()?;
        match (self.positional.value + self.unordered.value - 1.0).abs() <= BLEND_TOLERANCE {
            true => Ok(()),
            false => Err(ConfigError::Blend),
        }
    }

    /// Sets the positional part to `positional` and the unordered part to the remainder.
    pub fn set_positional(&mut self, positional: f64) {
        self.positional.value = positional;
        self.unordered.value = 1.0 - positional;
    }

    pub fn factors(&self) -> BlendFactors {
        BlendFactors {
            positional: self.positional.value,
            unordered: self.unordered.value,
        }
    }
}

/// Switches for each [trace level](Level).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TraceConfig {
    pub literal_flat: bool,
    pub literal_weighted: bool,
    pub clause_flat: bool,
    pub clause_weighted: bool,
    pub formula: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            literal_flat: true,
            literal_weighted: true,
            clause_flat: true,
            clause_weighted: true,
            formula: true,
        }
    }
}

impl TraceConfig {
    /// A configuration which records nothing.
    pub fn silent() -> Self {
        TraceConfig {
            literal_flat: false,
            literal_weighted: false,
            clause_flat: false,
            clause_weighted: false,
            formula: false,
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        match level {
            Level::LiteralFlat => self.literal_flat,
            Level::LiteralWeighted => self.literal_weighted,
            Level::ClauseFlat => self.clause_flat,
            Level::ClauseWeighted => self.clause_weighted,
            Level::Formula => self.formula,
        }
    }
}

/// Whether the predicate and constant weights of a formula are checked to sum to one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum BudgetCheck {
    /// Note an unbalanced budget in the logs, and continue.
    #[default]
    Permissive,

    /// Refuse to compare formulas with an unbalanced budget.
    Strict,
}
