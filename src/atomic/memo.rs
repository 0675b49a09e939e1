use crate::{
    atomic::{metrics::unordered_key, TermSimilarity},
    generic::lru::Lru,
    misc::log::targets::{self},
};

/// A bounded cache of scores from some capability.
///
/// Scores are keyed by the unordered pair of (normalized) tokens, and the least recently used score is evicted when the cache is full.
/// The cache is owned by whoever owns the wrapped capability, and so lives as long as the caller chooses, e.g. across many comparisons.
///
/// ```rust
/// # use formula_sim::atomic::{compare, EditDistance, Memoized};
/// let mut memo = Memoized::new(EditDistance, 1024);
///
/// let first = compare(&mut memo, "Monkey", "Donkey");
/// let second = compare(&mut memo, "donkey", "MONKEY");
///
/// assert_eq!(first, second);
/// assert_eq!(memo.misses(), 1);
/// assert_eq!(memo.hits(), 1);
/// ```
pub struct Memoized<S: TermSimilarity> {
    similarity: S,
    cache: Lru<(String, String), f64>,
    hits: usize,
    misses: usize,
}

impl<S: TermSimilarity> Memoized<S> {
    /// Wraps `similarity` in a cache of at most `capacity` scores.
    pub fn new(similarity: S, capacity: usize) -> Self {
        Memoized {
            similarity,
            cache: Lru::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// A count of requests answered by the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// A count of requests passed to the wrapped capability.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// A count of cached scores.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn inner(&self) -> &S {
        &self.similarity
    }

    pub fn into_inner(self) -> S {
        self.similarity
    }
}

impl<S: TermSimilarity> TermSimilarity for Memoized<S> {
    fn similarity(&mut self, a: &str, b: &str) -> f64 {
        let key = unordered_key(a.to_string(), b.to_string());

        if let Some(score) = self.cache.get(&key) {
            self.hits += 1;
            return *score;
        }

        self.misses += 1;
        let score = self.similarity.similarity(&key.0, &key.1);
        log::trace!(target: targets::ATOMIC, "Cached {score} for {key:?}");

        if let Some((evicted, _)) = self.cache.insert(key, score) {
            log::debug!(target: targets::ATOMIC, "Evicted {evicted:?}");
        }
        score
    }
}
