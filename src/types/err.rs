//! Error types used in the library.
//!
//! - Scoring itself never fails: empty inputs, zero weight mass and absent weights all resolve to defined scores.
//! - Errors arise from configuration, from a strict check of weight budgets, and from reading formulas from text.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The top-level error type.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Budget(BudgetError),
    Config(ConfigError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget(e) => write!(f, "Budget error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Which of the two formulas of a comparison an error relates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Noted errors when checking the weight budget of a formula.
#[derive(Clone, Debug, PartialEq)]
pub enum BudgetError {
    /// The predicate and constant weights of a side do not sum to one.
    Unbalanced { side: Side, total: f64 },
}

impl std::fmt::Display for BudgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbalanced { side, total } => write!(
                f,
                "predicate and constant weights of the {side} formula sum to {total}, not 1"
            ),
        }
    }
}

impl From<BudgetError> for ErrorKind {
    fn from(e: BudgetError) -> Self {
        ErrorKind::Budget(e)
    }
}

/// Errors in a configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The value of the named option lies outside the permitted range.
    OutOfBounds(&'static str),

    /// The positional and unordered parts of a blend do not sum to one.
    Blend,

    /// A softmax aggregation was given a temperature which is not strictly positive.
    Temperature,

    /// A cache was given no capacity.
    CacheCapacity,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds(name) => write!(f, "{name} is out of bounds"),
            Self::Blend => write!(f, "positional and unordered blend must sum to 1"),
            Self::Temperature => write!(f, "softmax temperature must be positive"),
            Self::CacheCapacity => write!(f, "cache capacity must be positive"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A literal could not be read at the given line.
    Literal(usize),

    /// A weight could not be read at the given line.
    Weight(usize),

    /// A directive was missing parts at the given line.
    Directive(usize),

    /// An empty literal, where some literal was required.
    Empty(usize),

    /// The input could not be read.
    Read,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(line) => write!(f, "malformed literal on line {line}"),
            Self::Weight(line) => write!(f, "malformed weight on line {line}"),
            Self::Directive(line) => write!(f, "incomplete directive on line {line}"),
            Self::Empty(line) => write!(f, "empty literal on line {line}"),
            Self::Read => write!(f, "failed to read input"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
