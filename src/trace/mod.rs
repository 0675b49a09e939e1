/*!
A record of every comparison made during a comparison of formulas.

A fresh [Trace] is made for each top-level comparison, passed by (mutable) reference to every procedure which compares something, and handed to the caller with the final score.
As nothing about a trace is shared between comparisons, comparisons on different scorers may proceed in parallel.

A trace has five [levels](Level):
- [LiteralFlat](Level::LiteralFlat) and [LiteralWeighted](Level::LiteralWeighted), with a [LiteralEntry] for each pair of literals compared.
- [ClauseFlat](Level::ClauseFlat) and [ClauseWeighted](Level::ClauseWeighted), with a [ClauseEntry] for each pair of clauses compared.
- [Formula](Level::Formula), with a [total](FormulaEntry::Total) followed by a [pair](FormulaEntry::Pair) for each pair of clauses in the correspondence.

Within a level, a pair of compared things is recorded at most once, whichever way round the pair was compared.
And, a level switched off in the [configuration](crate::config::TraceConfig) records nothing.
*/

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    config::TraceConfig,
    procedures::tversky::TverskyScore,
    structures::{clause::Clause, literal::Literal},
};

/// The levels of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    LiteralFlat,
    LiteralWeighted,
    ClauseFlat,
    ClauseWeighted,
    Formula,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::LiteralFlat,
        Level::LiteralWeighted,
        Level::ClauseFlat,
        Level::ClauseWeighted,
        Level::Formula,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::LiteralFlat => "literal_flat",
            Self::LiteralWeighted => "literal_weighted",
            Self::ClauseFlat => "clause_flat",
            Self::ClauseWeighted => "clause_weighted",
            Self::Formula => "formula",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A comparison of two literals.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LiteralEntry {
    pub first: Literal,
    pub second: Literal,

    /// The similarity of the predicates.
    pub predicate: f64,

    /// The similarity of the arguments.
    pub arguments: f64,

    /// The score of the pair.
    pub combined: f64,
}

/// A comparison of two clauses, with the masses of the Tversky coefficient which scored the pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClauseEntry {
    pub first: Clause,
    pub second: Clause,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub score: f64,
}

/// An entry in the formula level of a trace.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum FormulaEntry {
    /// The final score of a comparison.
    Total { a: f64, b: f64, c: f64, score: f64 },

    /// A pair of clauses from the correspondence, with the flat score of the pair.
    Pair {
        first: Clause,
        second: Clause,
        score: f64,
    },
}

/// The key of an unordered pair.
fn unordered<T: Ord + Clone>(a: &T, b: &T) -> (T, T) {
    match a <= b {
        true => (a.clone(), b.clone()),
        false => (b.clone(), a.clone()),
    }
}

/// The trace of a single comparison.
#[derive(Clone, Debug, Serialize)]
pub struct Trace {
    #[serde(skip)]
    config: TraceConfig,

    literal_flat: Vec<LiteralEntry>,
    literal_weighted: Vec<LiteralEntry>,
    clause_flat: Vec<ClauseEntry>,
    clause_weighted: Vec<ClauseEntry>,
    formula: Vec<FormulaEntry>,

    #[serde(skip)]
    seen_literals: [HashSet<(Literal, Literal)>; 2],

    #[serde(skip)]
    seen_clauses: [HashSet<(Clause, Clause)>; 3],
}

impl Trace {
    pub fn new(config: TraceConfig) -> Self {
        Trace {
            config,
            literal_flat: Vec::default(),
            literal_weighted: Vec::default(),
            clause_flat: Vec::default(),
            clause_weighted: Vec::default(),
            formula: Vec::default(),
            seen_literals: Default::default(),
            seen_clauses: Default::default(),
        }
    }

    /// A trace which records nothing.
    pub fn silent() -> Self {
        Trace::new(TraceConfig::silent())
    }

    /// Whether `level` is recorded.
    pub fn records(&self, level: Level) -> bool {
        self.config.enabled(level)
    }

    /// Records a comparison of `first` and `second` at `level`, unless already recorded.
    ///
    /// Returns true if the comparison was recorded.
    pub fn record_literals(
        &mut self,
        level: Level,
        first: &Literal,
        second: &Literal,
        predicate: f64,
        arguments: f64,
        combined: f64,
    ) -> bool {
        let (seen, entries) = match level {
            Level::LiteralFlat => (&mut self.seen_literals[0], &mut self.literal_flat),
            Level::LiteralWeighted => (&mut self.seen_literals[1], &mut self.literal_weighted),
            _ => return false,
        };
        if !self.config.enabled(level) || !seen.insert(unordered(first, second)) {
            return false;
        }

        entries.push(LiteralEntry {
            first: first.clone(),
            second: second.clone(),
            predicate,
            arguments,
            combined,
        });
        true
    }

    /// Records a comparison of `first` and `second` at `level`, unless already recorded.
    ///
    /// Returns true if the comparison was recorded.
    pub fn record_clauses(
        &mut self,
        level: Level,
        first: &Clause,
        second: &Clause,
        score: &TverskyScore,
    ) -> bool {
        let (seen, entries) = match level {
            Level::ClauseFlat => (&mut self.seen_clauses[0], &mut self.clause_flat),
            Level::ClauseWeighted => (&mut self.seen_clauses[1], &mut self.clause_weighted),
            _ => return false,
        };
        if !self.config.enabled(level) || !seen.insert(unordered(first, second)) {
            return false;
        }

        entries.push(ClauseEntry {
            first: first.clone(),
            second: second.clone(),
            a: score.a,
            b: score.b,
            c: score.c,
            score: score.score,
        });
        true
    }

    /// Records the final score of a comparison.
    pub fn record_total(&mut self, score: &TverskyScore) {
        if self.config.formula {
            self.formula.push(FormulaEntry::Total {
                a: score.a,
                b: score.b,
                c: score.c,
                score: score.score,
            });
        }
    }

    /// Records a pair of clauses from a correspondence, unless already recorded.
    pub fn record_correspondence(&mut self, first: &Clause, second: &Clause, score: f64) -> bool {
        if !self.config.formula || !self.seen_clauses[2].insert(unordered(first, second)) {
            return false;
        }
        self.formula.push(FormulaEntry::Pair {
            first: first.clone(),
            second: second.clone(),
            score,
        });
        true
    }

    /// Entries of a literal level, or an empty slice for any other level.
    pub fn literals(&self, level: Level) -> &[LiteralEntry] {
        match level {
            Level::LiteralFlat => &self.literal_flat,
            Level::LiteralWeighted => &self.literal_weighted,
            _ => &[],
        }
    }

    /// Entries of a clause level, or an empty slice for any other level.
    pub fn clauses(&self, level: Level) -> &[ClauseEntry] {
        match level {
            Level::ClauseFlat => &self.clause_flat,
            Level::ClauseWeighted => &self.clause_weighted,
            _ => &[],
        }
    }

    pub fn formula(&self) -> &[FormulaEntry] {
        &self.formula
    }

    /// A count of entries at `level`.
    pub fn len(&self, level: Level) -> usize {
        match level {
            Level::LiteralFlat | Level::LiteralWeighted => self.literals(level).len(),
            Level::ClauseFlat | Level::ClauseWeighted => self.clauses(level).len(),
            Level::Formula => self.formula.len(),
        }
    }

    /// Whether no level holds an entry.
    pub fn is_empty(&self) -> bool {
        Level::ALL.iter().all(|level| self.len(*level) == 0)
    }
}
