/*!
Reading weighted formulas from text.

A formula is read line by line:
- Blank lines, and lines which are `c` or begin with `c `, are comments.
- `p <predicate> <weight>` sets the weight of a predicate.
- `k <constant> <weight>` sets the weight of a constant.
- `w <weight> <clause>` is a clause with a weight.
- Any other line is a clause, written as literals separated by `|`.

A literal is written `Predicate(argument, argument)`, or as a bare `Predicate` if the literal has no arguments.
A nullary literal named `p`, `k`, `w`, or `c` at the start of a line should be written with parentheses, e.g. `p()`.

```rust
# use formula_sim::builder::read_formula;
# use formula_sim::structures::literal::Literal;
let text = "
c The dog teases the monkey at the zoo.
p Teasing 0.1
p AtLocation 0.1
k Dog 0.35
k Monkey 0.35
k Zoo 0.1

w 0.05 AtLocation(Dog, Zoo)
w 0.05 AtLocation(Monkey, Zoo)
w 0.9  Teasing(Dog, Monkey)
";

let weighted = read_formula(text.as_bytes()).expect("Well formed");
assert_eq!(weighted.formula.size(), 3);
assert_eq!(weighted.weights.constant("Dog"), 0.35);
assert!((weighted.weights.budget() - 1.0).abs() < 1e-9);
```
*/

use std::{io::BufRead, str::FromStr};

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::Clause,
        formula::{Formula, WeightedFormula},
        literal::Literal,
        weights::Weights,
    },
    types::err::{ErrorKind, ParseError},
};

/// Reads a weighted formula from `reader`.
pub fn read_formula(reader: impl BufRead) -> Result<WeightedFormula, ErrorKind> {
    let mut formula = Formula::default();
    let mut weights = Weights::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(_) => return Err(ParseError::Read.into()),
        };
        let line = line.trim();

        if line.is_empty() || line == "c" || line.starts_with("c ") {
            continue;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let directive = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default().trim();

        match directive {
            "p" | "k" => {
                let (name, weight) = read_named_weight(rest, line_number)?;
                match directive {
                    "p" => weights.predicates.insert(name, weight),
                    _ => weights.constants.insert(name, weight),
                };
            }

            "w" => {
                let mut parts = rest.splitn(2, char::is_whitespace);
                let weight = read_weight(parts.next().unwrap_or_default(), line_number)?;
                let clause = read_clause(parts.next().unwrap_or_default(), line_number)?;
                weights.clauses.insert(clause.clone(), weight);
                formula.insert(clause);
            }

            _ => {
                let clause = read_clause(line, line_number)?;
                formula.insert(clause);
            }
        }
    }

    log::info!(target: targets::BUILDER, "Read {} clauses", formula.size());
    Ok(WeightedFormula::new(formula, weights))
}

/// A name followed by a weight.
fn read_named_weight(text: &str, line_number: usize) -> Result<(String, f64), ParseError> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(weight), None) => Ok((name.to_string(), read_weight(weight, line_number)?)),
        _ => Err(ParseError::Directive(line_number)),
    }
}

/// A finite, non-negative, weight.
fn read_weight(text: &str, line_number: usize) -> Result<f64, ParseError> {
    match text.parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight >= 0.0 => Ok(weight),
        _ => Err(ParseError::Weight(line_number)),
    }
}

/// Literals separated by `|`.
pub fn read_clause(text: &str, line_number: usize) -> Result<Clause, ParseError> {
    let mut clause = Clause::default();
    for part in text.split('|') {
        let literal = read_literal(part, line_number)?;
        if !clause.insert(literal) {
            log::debug!(target: targets::BUILDER, "Duplicate literal on line {line_number}");
        }
    }
    Ok(clause)
}

/// A literal, e.g. `Teasing(Dog, Monkey)` or `Raining`.
pub fn read_literal(text: &str, line_number: usize) -> Result<Literal, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty(line_number));
    }

    let Some(open) = text.find('(') else {
        return match text.contains([')', ',']) || text.contains(char::is_whitespace) {
            true => Err(ParseError::Literal(line_number)),
            false => Ok(Literal::nullary(text)),
        };
    };

    let predicate = text[..open].trim();
    let Some(inner) = text[open + 1..].strip_suffix(')') else {
        return Err(ParseError::Literal(line_number));
    };

    if predicate.is_empty() || inner.contains(['(', ')']) {
        return Err(ParseError::Literal(line_number));
    }

    if inner.trim().is_empty() {
        return Ok(Literal::nullary(predicate));
    }

    let mut arguments = Vec::default();
    for argument in inner.split(',') {
        let argument = argument.trim();
        if argument.is_empty() {
            return Err(ParseError::Literal(line_number));
        }
        arguments.push(argument);
    }

    Ok(Literal::new(predicate, arguments))
}

impl FromStr for Literal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_literal(s, 1)
    }
}
