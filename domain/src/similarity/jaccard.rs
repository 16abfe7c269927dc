//! Lexical overlap scoring between prompts

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Jaccard similarity in `[0.0, 1.0]`, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Round `raw` to two decimals, half away from zero
    fn from_ratio(raw: f64) -> Self {
        Self((raw * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<SimilarityScore> for f64 {
    fn from(score: SimilarityScore) -> Self {
        score.0
    }
}

fn token_set(s: &str) -> HashSet<String> {
    s.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity of the lowercased whitespace-token sets of `a` and `b`.
///
/// Punctuation stays attached to tokens, so `"hello."` and `"hello"` differ.
/// Two inputs without any tokens score `0.0`.
pub fn simple_similarity(a: &str, b: &str) -> SimilarityScore {
    let set_a = token_set(a);
    let set_b = token_set(b);
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return SimilarityScore::default();
    }
    let intersection = set_a.intersection(&set_b).count();
    SimilarityScore::from_ratio(intersection as f64 / union as f64)
}

/// Score `base_prompt` against every suggestion, preserving order
pub fn similarity_scores<S: AsRef<str>>(
    base_prompt: &str,
    suggestions: &[S],
) -> Vec<SimilarityScore> {
    suggestions
        .iter()
        .map(|s| simple_similarity(base_prompt, s.as_ref()))
        .collect()
}
