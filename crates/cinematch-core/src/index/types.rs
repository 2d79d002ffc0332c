use std::collections::HashMap;

use crate::id::MovieId;

/// Distinct corpus terms and their column indices.
///
/// Columns are assigned in first-seen order while the corpus is scanned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    columns: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column of `term`, assigning the next free column if unseen
    pub(crate) fn intern(&mut self, term: &str) -> usize {
        if let Some(&column) = self.columns.get(term) {
            return column;
        }
        let column = self.terms.len();
        self.terms.push(term.to_string());
        self.columns.insert(term.to_string(), column);
        column
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in column order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Sparse row of non-negative weights, entries sorted by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(column, weight)` pairs; zero weights are dropped
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(column, _)| column);
        SparseVector { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn get(&self, column: usize) -> f64 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit length; an all-zero vector stays zero
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            return;
        }
        for entry in &mut self.entries {
            entry.1 /= norm;
        }
    }
}

/// Sparse matrix of document rows over vocabulary columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeightMatrix {
    rows: Vec<SparseVector>,
    columns: usize,
}

impl TermWeightMatrix {
    pub fn new(rows: Vec<SparseVector>, columns: usize) -> Self {
        TermWeightMatrix { rows, columns }
    }

    pub fn row(&self, row: usize) -> Option<&SparseVector> {
        self.rows.get(row)
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Vector space of a corpus with its row-to-movie table.
///
/// Row `i` of `matrix` is the document of `ids[i]`; both are produced in the
/// same pass and never reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusIndex {
    pub(crate) ids: Vec<MovieId>,
    pub(crate) vocabulary: Vocabulary,
    pub(crate) matrix: TermWeightMatrix,
}

impl CorpusIndex {
    pub fn ids(&self) -> &[MovieId] {
        &self.ids
    }

    /// Movie of a matrix row
    pub fn id(&self, row: usize) -> Option<&MovieId> {
        self.ids.get(row)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn matrix(&self) -> &TermWeightMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
