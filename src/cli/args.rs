use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use formula_sim::config::{Aggregation, BudgetCheck, Config};

/// Scores the similarity of two weighted formulas
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The first formula
    pub first: PathBuf,

    /// The second formula
    pub second: PathBuf,

    /// Weight of similarity mass found only in the first formula, when comparing clauses
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Weight of similarity mass found only in the second formula, when comparing clauses
    #[arg(long)]
    pub beta: Option<f64>,

    /// Power each pairwise literal score is raised to, when comparing clauses
    #[arg(long)]
    pub power: Option<f64>,

    /// How literal scores are aggregated, when comparing clauses
    #[arg(long, value_enum, default_value_t = AggregationArg::Max)]
    pub aggregation: AggregationArg,

    /// Temperature of a softmax aggregation
    #[arg(long, default_value_t = Aggregation::DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Share of positional alignment when comparing arguments, the remainder is unordered alignment
    #[arg(long)]
    pub positional: Option<f64>,

    /// How tokens are compared
    #[arg(long, value_enum, default_value_t = Metric::Exact)]
    pub metric: Metric,

    /// Capacity of the token cache
    #[arg(long, default_value_t = 4096)]
    pub cache: usize,

    /// Refuse formulas whose predicate and constant weights do not sum to one
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Display the trace as JSON
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AggregationArg {
    Max,
    Mean,
    Softmax,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Metric {
    /// Identical tokens score 1, all others 0
    Exact,
    /// Normalized Levenshtein similarity
    Levenshtein,
}

impl Args {
    /// The configuration given by the arguments, without validation.
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        if let Some(alpha) = self.alpha {
            config.clause.alpha.value = alpha;
        }
        if let Some(beta) = self.beta {
            config.clause.beta.value = beta;
        }
        if let Some(power) = self.power {
            config.clause.power.value = power;
        }
        if let Some(positional) = self.positional {
            config.blend.set_positional(positional);
        }

        config.clause.aggregation = match self.aggregation {
            AggregationArg::Max => Aggregation::Maximum,
            AggregationArg::Mean => Aggregation::ArithmeticMean,
            AggregationArg::Softmax => Aggregation::SoftmaxWeightedMean {
                temperature: self.temperature,
            },
        };

        if self.strict {
            config.budget = BudgetCheck::Strict;
        }

        config
    }
}
