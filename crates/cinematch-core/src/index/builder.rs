use std::collections::HashMap;
use std::time::Instant;

use super::types::{CorpusIndex, SparseVector, TermWeightMatrix, Vocabulary};
use crate::config::TextConfig;
use crate::id::MovieId;
use crate::text::tokenize;
use crate::trace_time;

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`
pub fn smoothed_idf(total_docs: usize, doc_freq: usize) -> f64 {
    ((1.0 + total_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Build the TF-IDF vector space of a corpus.
///
/// Each document becomes one row, in input order. Weights are raw term
/// frequency times smoothed IDF, and every non-empty row is scaled to unit
/// length. An empty corpus gives an empty vocabulary and a zero-row matrix.
pub fn build_index<S: AsRef<str>>(
    documents: &[S],
    config: &TextConfig,
) -> (Vocabulary, TermWeightMatrix) {
    let start = Instant::now();
    let mut vocabulary = Vocabulary::new();
    let mut doc_freqs: Vec<usize> = Vec::new();
    let mut term_freqs: Vec<HashMap<usize, f64>> = Vec::with_capacity(documents.len());

    for doc in documents {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(doc.as_ref(), config) {
            let column = vocabulary.intern(&term);
            if column == doc_freqs.len() {
                doc_freqs.push(0);
            }
            *counts.entry(column).or_insert(0.0) += 1.0;
        }
        for &column in counts.keys() {
            doc_freqs[column] += 1;
        }
        term_freqs.push(counts);
    }

    let total_docs = documents.len();
    let idf: Vec<f64> = doc_freqs
        .iter()
        .map(|&df| smoothed_idf(total_docs, df))
        .collect();

    let rows: Vec<SparseVector> = term_freqs
        .into_iter()
        .map(|counts| {
            let mut row = SparseVector::from_entries(
                counts
                    .into_iter()
                    .map(|(column, tf)| (column, tf * idf[column]))
                    .collect(),
            );
            row.l2_normalize();
            row
        })
        .collect();

    let matrix = TermWeightMatrix::new(rows, vocabulary.len());
    trace_time!(
        start,
        "build_index",
        rows = matrix.n_rows(),
        terms = vocabulary.len()
    );
    (vocabulary, matrix)
}

impl CorpusIndex {
    /// Index `(id, text)` documents, keeping the row-to-id table alongside
    #[tracing::instrument(skip_all, fields(documents = documents.len()))]
    pub fn build<S: AsRef<str>>(documents: &[(MovieId, S)], config: &TextConfig) -> Self {
        let texts: Vec<&str> = documents.iter().map(|(_, text)| text.as_ref()).collect();
        let (vocabulary, matrix) = build_index(&texts, config);
        let ids = documents.iter().map(|(id, _)| id.clone()).collect();

        tracing::debug!(
            rows = matrix.n_rows(),
            terms = vocabulary.len(),
            "corpus_indexed"
        );

        CorpusIndex {
            ids,
            vocabulary,
            matrix,
        }
    }
}
