/*!
Similarity of two ordered argument lists.

The similarity of two lists blends two components:
- A *positional* component, which compares the arguments at each index shared by both lists.
- An *unordered* component, which compares each argument of the first list with its best match in the second list, wherever that match lies.

Each comparison of two arguments is weighted by the product of the importance of each argument, and each component is the weighted mean of its comparisons, with the [correction](crate::structures::weights::correction) term added to the mass.

So, swapping the arguments of a literal is penalised by the positional component and rewarded by the unordered component.

The unordered component takes the best match of each argument in the first list only.
This is not an optimal assignment between the lists, and the same argument of the second list may be the best match of many arguments of the first list.
*/

use crate::{
    atomic::{compare, TermSimilarity},
    procedures::normalized,
    structures::weights::{weight_of, WeightMap},
};

/// The importance of arguments.
#[derive(Clone, Copy)]
pub enum ArgumentWeights<'w> {
    /// Every argument has importance one.
    Uniform,

    /// Arguments of the first list take importance from `first` and arguments of the second list from `second`.
    Mapped {
        first: &'w WeightMap<String>,
        second: &'w WeightMap<String>,
    },
}

impl ArgumentWeights<'_> {
    /// The importance of comparing `a`, from the first list, with `b`, from the second list.
    pub fn importance(&self, a: &str, b: &str) -> f64 {
        match self {
            Self::Uniform => 1.0,
            Self::Mapped { first, second } => weight_of(first, a) * weight_of(second, b),
        }
    }
}

/// The parts of a blend of positional and unordered alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendFactors {
    pub positional: f64,
    pub unordered: f64,
}

impl Default for BlendFactors {
    fn default() -> Self {
        BlendFactors {
            positional: 0.8,
            unordered: 0.2,
        }
    }
}

/// The components and blended score of an alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Alignment {
    pub positional: f64,
    pub unordered: f64,
    pub score: f64,
}

/// Aligns `first` with `second`.
///
/// If either list is empty, every part of the alignment is 0.0.
pub fn align(
    first: &[String],
    second: &[String],
    similarity: &mut impl TermSimilarity,
    weights: ArgumentWeights,
    blend: BlendFactors,
    correction: f64,
) -> Alignment {
    if first.is_empty() || second.is_empty() {
        return Alignment::default();
    }

    let positional = {
        let mut weighted = 0.0;
        let mut mass = 0.0;
        for (a, b) in first.iter().zip(second) {
            let importance = weights.importance(a, b);
            weighted += compare(similarity, a, b) * importance;
            mass += importance;
        }
        normalized(weighted, mass, correction)
    };

    let unordered = {
        let mut weighted = 0.0;
        let mut mass = 0.0;
        for a in first {
            let mut best_match = &second[0];
            let mut best_similarity = compare(similarity, a, best_match);
            for b in &second[1..] {
                let candidate = compare(similarity, a, b);
                if candidate > best_similarity {
                    best_match = b;
                    best_similarity = candidate;
                }
            }

            let importance = weights.importance(a, best_match);
            weighted += best_similarity * importance;
            mass += importance;
        }
        normalized(weighted, mass, correction)
    };

    Alignment {
        positional,
        unordered,
        score: blend.positional * positional + blend.unordered * unordered,
    }
}
