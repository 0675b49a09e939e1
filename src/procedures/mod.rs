/*!
Procedures which score the similarity of literals, clauses, and formulas.

Scores are built bottom-up:
- Tokens are compared by some [atomic similarity](crate::atomic).
- Arguments lists are compared by the [aligner], which blends positional and unordered alignment.
- Literals are compared by [literal], which combines similarity of predicates with similarity of arguments, either [flat](literal::flat) or [weighted](literal::weighted).
- Clauses are compared by a [Tversky coefficient](tversky) over their literals, see [clause].
- Clauses of one formula are paired with clauses of another by a [correspondence].
- Formulas are compared by [formula], through the weighted scores of corresponding clauses.

Each procedure is a plain function, given a capability for atomic similarity and a [trace](crate::trace::Trace) to record comparisons to.
No procedure fails: an empty argument list, clause, or formula, or a comparison without weight, scores 0.0.
*/

pub mod aligner;
pub mod clause;
pub mod correspondence;
pub mod formula;
pub mod literal;
pub mod tversky;

/// `weighted / (mass + correction)`, clamped to [0, 1], or 0.0 if either `mass` or the corrected mass is not positive.
pub(crate) fn normalized(weighted: f64, mass: f64, correction: f64) -> f64 {
    if mass <= 0.0 {
        return 0.0;
    }
    let denominator = mass + correction;
    match denominator > 0.0 {
        true => (weighted / denominator).clamp(0.0, 1.0),
        false => 0.0,
    }
}
