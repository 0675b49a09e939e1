//! Reference similarity capabilities.
//!
//! - [ExactMatch], 1.0 on identical tokens and 0.0 otherwise.
//! - [EditDistance], the normalized Levenshtein similarity of two tokens.
//! - [LookupTable], explicitly given scores for unordered pairs of tokens.
//!
//! Each capability expects [normalized](crate::atomic::normalize) tokens.

use std::collections::HashMap;

use crate::atomic::{normalize, TermSimilarity};

/// 1.0 on identical tokens and 0.0 otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactMatch;

impl TermSimilarity for ExactMatch {
    fn similarity(&mut self, a: &str, b: &str) -> f64 {
        match a == b {
            true => 1.0,
            false => 0.0,
        }
    }
}

/// The normalized Levenshtein similarity of two tokens.
///
/// Empty tokens are similar only to each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct EditDistance;

impl TermSimilarity for EditDistance {
    fn similarity(&mut self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }
}

/// Explicitly given scores for unordered pairs of tokens.
///
/// Identical tokens score 1.0, and a pair absent from the table scores `default`.
///
/// ```rust
/// # use formula_sim::atomic::{compare, LookupTable};
/// let mut table = LookupTable::default();
/// table.insert("Dog", "Canine", 0.9);
///
/// assert_eq!(compare(&mut table, "canine", "DOG"), 0.9);
/// assert_eq!(compare(&mut table, "Dog", "Monkey"), 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LookupTable {
    scores: HashMap<(String, String), f64>,
    default: f64,
}

impl LookupTable {
    /// A table where absent pairs score `default`.
    pub fn with_default(default: f64) -> Self {
        LookupTable {
            scores: HashMap::default(),
            default,
        }
    }

    /// Records `score` for the (unordered) pair `a`, `b`, normalizing both.
    pub fn insert(&mut self, a: &str, b: &str, score: f64) {
        let key = unordered_key(normalize(a), normalize(b));
        self.scores.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl TermSimilarity for LookupTable {
    fn similarity(&mut self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let key = unordered_key(a.to_string(), b.to_string());
        self.scores.get(&key).copied().unwrap_or(self.default)
    }
}

/// The pair `a`, `b` ordered so the key is independent of argument order.
pub(super) fn unordered_key(a: String, b: String) -> (String, String) {
    match a <= b {
        true => (a, b),
        false => (b, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance() {
        let mut edit = EditDistance;
        assert_eq!(edit.similarity("dog", "dog"), 1.0);
        assert_eq!(edit.similarity("", ""), 1.0);

        let partial = edit.similarity("dog", "dogs");
        assert!(0.0 < partial && partial < 1.0);
        assert_eq!(partial, edit.similarity("dogs", "dog"));
    }

    #[test]
    fn table_default() {
        let mut table = LookupTable::with_default(0.1);
        table.insert("Monkey", "Ape", 0.8);

        assert_eq!(table.len(), 1);
        assert_eq!(table.similarity("ape", "monkey"), 0.8);
        assert_eq!(table.similarity("monkey", "ape"), 0.8);
        assert_eq!(table.similarity("monkey", "dog"), 0.1);
        assert_eq!(table.similarity("dog", "dog"), 1.0);
    }
}
