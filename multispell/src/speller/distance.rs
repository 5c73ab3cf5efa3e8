//! Damerau-Levenshtein distance, optimal string alignment variant.
use crate::types::Distance;

/// Counts insertions, deletions, substitutions and transpositions of adjacent
/// characters, each costing 1. No substring is edited more than once.
#[inline(always)]
pub fn distance(a: &str, b: &str) -> Distance {
    strsim::osa_distance(a, b)
}
