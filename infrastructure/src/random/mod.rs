//! Random sources for template selection.

mod rng_source;

pub use rng_source::{SeededRandomSource, ThreadRandomSource};
