//! Corpus index: vocabulary, TF-IDF matrix and row-to-movie table

mod builder;
mod cache;
pub mod types;

pub use builder::{build_index, smoothed_idf};
pub use cache::{fingerprint, IndexCache};
pub use types::{CorpusIndex, SparseVector, TermWeightMatrix, Vocabulary};
