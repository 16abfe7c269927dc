//! Similarity scoring domain.
//!
//! Set-based lexical overlap between a base prompt and its suggestions.

mod jaccard;

pub use jaccard::{SimilarityScore, simple_similarity, similarity_scores};
