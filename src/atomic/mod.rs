/*!
Similarity of atomic text tokens, such as predicate names and constants.

How two tokens are scored is left to the caller, through the [TermSimilarity] trait.
Any symmetric function from two tokens to [0, 1] will do, whether backed by a learned embedding, an edit distance, or a lookup table.

Before a capability sees a pair of tokens, each token is [normalized](normalize):
- Case is folded.
- Underscores, hyphens, and runs of whitespace become a single space.
- Parentheses are removed.
- A leading negation marker (`~`, `¬`, `!`, `-`, or `not`) becomes the prefix `not `.

So, for example, `At_Location` and `at location` reach a capability as the same token.

Reference capabilities are given in [metrics], and any capability may be wrapped in a bounded cache with [Memoized].

```rust
# use formula_sim::atomic::{compare, normalize, ExactMatch};
assert_eq!(normalize("  At_Location(Zoo) "), "at locationzoo");
assert_eq!(normalize("¬Teasing"), "not teasing");

let mut exact = ExactMatch;
assert_eq!(compare(&mut exact, "Is_Hungry", "is hungry"), 1.0);
assert_eq!(compare(&mut exact, "Dog", "Monkey"), 0.0);
```
*/

mod memo;
pub mod metrics;

pub use memo::Memoized;
pub use metrics::{EditDistance, ExactMatch, LookupTable};

/// A symmetric similarity between two normalized tokens, in [0, 1].
///
/// A capability may hold state (e.g. a cache), and so is taken mutably.
pub trait TermSimilarity {
    /// The similarity of `a` and `b`.
    ///
    /// Implementations should ensure `similarity(a, b) == similarity(b, a)`.
    fn similarity(&mut self, a: &str, b: &str) -> f64;
}

impl<F: FnMut(&str, &str) -> f64> TermSimilarity for F {
    fn similarity(&mut self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Markers which negate a token, when leading the token.
const NEGATION_MARKERS: [char; 4] = ['~', '¬', '!', '-'];

/// The canonical prefix of a negated token.
const NEGATION: &str = "not";

/// The normalized form of `text`.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();

    let (negated, rest) = match lowered.strip_prefix(NEGATION_MARKERS) {
        Some(rest) => (true, rest),
        None => (false, lowered.as_str()),
    };

    let mut spaced = String::with_capacity(rest.len());
    for character in rest.chars() {
        match character {
            '(' | ')' => {}
            '_' | '-' => spaced.push(' '),
            c if c.is_whitespace() => spaced.push(' '),
            c => spaced.push(c),
        }
    }

    let words = spaced.split_whitespace().collect::<Vec<_>>();
    let body = words.join(" ");

    match negated {
        false => body,
        true if body.is_empty() => NEGATION.to_string(),
        true => format!("{NEGATION} {body}"),
    }
}

/// The similarity of `a` and `b` on `similarity`, after normalization.
///
/// The score given by `similarity` is clamped to [0, 1].
pub fn compare(similarity: &mut impl TermSimilarity, a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    similarity.similarity(&a, &b).clamp(0.0, 1.0)
}
