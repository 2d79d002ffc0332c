//! Similarity engine for ranking movies against an anchor movie

use std::time::Instant;

use crate::index::{SparseVector, TermWeightMatrix};
use crate::trace_time;

/// A matrix row and its similarity to the anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Row index in the term-weight matrix
    pub row: usize,
    /// Similarity score (0.0 to 1.0)
    pub score: f64,
}

/// Cosine similarity of two non-negative sparse vectors.
///
/// Zero vectors have similarity 0 with everything, including themselves.
pub fn cosine_similarity(vec_a: &SparseVector, vec_b: &SparseVector) -> f64 {
    let norm_a = vec_a.norm();
    let norm_b = vec_b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (vec_a.dot(vec_b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Similarity of the anchor row to every row, anchor included, in row order
pub fn similarity_scores(matrix: &TermWeightMatrix, anchor: usize) -> Vec<Neighbor> {
    let Some(anchor_vec) = matrix.row(anchor) else {
        return Vec::new();
    };

    matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(row, vec)| Neighbor {
            row,
            score: cosine_similarity(anchor_vec, vec),
        })
        .collect()
}

/// Top `k` rows most similar to `anchor`.
///
/// Sorted by score descending with ties broken by ascending row index. The
/// anchor row is removed by index, so a different row with an identical
/// document is still returned. An out-of-range anchor yields no neighbours.
pub fn rank_similar(matrix: &TermWeightMatrix, anchor: usize, k: usize) -> Vec<Neighbor> {
    let start = Instant::now();
    let mut scores = similarity_scores(matrix, anchor);

    scores.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.row.cmp(&b.row)));
    let ranked: Vec<Neighbor> = scores
        .into_iter()
        .filter(|n| n.row != anchor)
        .take(k)
        .collect();

    trace_time!(start, "rank_similar", anchor = anchor, neighbors = ranked.len());
    ranked
}
