//! Literals, aka. a predicate applied to an ordered list of arguments.
//!
//! ```rust
//! # use formula_sim::structures::literal::Literal;
//! let literal = Literal::new("Teasing", ["Dog", "Monkey"]);
//!
//! assert_eq!(literal.predicate(), "Teasing");
//! assert_eq!(literal.arity(), 2);
//! assert_eq!(literal.to_string(), "Teasing(Dog, Monkey)");
//!
//! assert_ne!(literal, Literal::new("Teasing", ["Monkey", "Dog"]));
//! ```
//!
//! Literals are ordered by predicate and then by arguments, and this ordering is the canonical order of literals within a [clause](crate::structures::clause).

use serde::{Deserialize, Serialize};

/// A predicate applied to an ordered list of arguments.
///
/// Two literals are the same literal only if both the predicate and the full ordered list of arguments are identical.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    predicate: String,
    arguments: Vec<String>,
}

impl Literal {
    pub fn new<P, I, A>(predicate: P, arguments: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Literal {
            predicate: predicate.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// A literal without arguments.
    pub fn nullary(predicate: impl Into<String>) -> Self {
        Literal {
            predicate: predicate.into(),
            arguments: Vec::default(),
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// The arguments of the literal, in order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.predicate, self.arguments.join(", "))
    }
}
