//! Generic structures, unrelated to formulas.

pub mod lru;
