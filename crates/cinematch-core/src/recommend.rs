//! Recommendation pipeline: resolve, index, rank, assemble
//!
//! One query resolves an anchor title, indexes the configured corpus field,
//! ranks every movie against the anchor and joins the neighbours back to
//! their metadata.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{Catalog, MovieRecord};
use crate::config::{CinematchConfig, RecommendConfig, TextConfig};
use crate::id::MovieId;
use crate::index::{CorpusIndex, IndexCache};
use crate::logging::ResourceMetrics;
use crate::resolve::resolve_with;
use crate::similarity::{rank_similar, Neighbor};

/// One recommended movie with its enrichment and similarity score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: MovieId,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub year: Option<i32>,
    pub average_rating: Option<f64>,
    pub rating_count: Option<u64>,
    pub overview: Option<String>,
    pub keywords: String,
    pub similarity: f64,
}

impl Recommendation {
    fn from_record(record: &MovieRecord, similarity: f64) -> Self {
        Recommendation {
            id: record.id.clone(),
            title: record.title.clone(),
            release_date: record.release_date.clone(),
            year: record.release_year(),
            average_rating: record.rating.map(|r| r.average),
            rating_count: record.rating.map(|r| r.count),
            overview: record.overview.clone(),
            keywords: record.keywords.clone(),
            similarity,
        }
    }
}

/// The movie a query resolved to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anchor {
    pub row: usize,
    pub id: MovieId,
    pub title: Option<String>,
}

/// Result of one query
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No title matched the query
    NotFound,
    /// Anchor resolved; `recommendations` may still be empty
    Found {
        anchor: Anchor,
        recommendations: Vec<Recommendation>,
    },
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        match self {
            Outcome::Found { anchor, .. } => Some(anchor),
            Outcome::NotFound => None,
        }
    }

    /// Recommendations, empty when the query was not found
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Outcome::Found {
                recommendations, ..
            } => recommendations,
            Outcome::NotFound => &[],
        }
    }
}

/// Map ranked matrix rows to movie ids through the index's row table
pub fn neighbor_ids(index: &CorpusIndex, ranked: &[Neighbor]) -> Vec<(MovieId, f64)> {
    ranked
        .iter()
        .filter_map(|n| index.id(n.row).map(|id| (id.clone(), n.score)))
        .collect()
}

/// Join ranked ids back to the catalog, ordered by similarity descending.
///
/// Equal scores keep their ranked order. Ids missing from the catalog are
/// skipped.
pub fn assemble(ranked: &[(MovieId, f64)], catalog: &Catalog) -> Vec<Recommendation> {
    let mut rows: Vec<Recommendation> = ranked
        .iter()
        .filter_map(|(id, score)| match catalog.find(id) {
            Some(record) => Some(Recommendation::from_record(record, *score)),
            None => {
                warn!(id = %id, "ranked movie missing from catalog");
                None
            }
        })
        .collect();

    rows.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    rows
}

/// Runs queries against one catalog
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    settings: RecommendConfig,
    text: TextConfig,
    cache: Option<IndexCache>,
    metrics: ResourceMetrics,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a Catalog, config: &CinematchConfig) -> Self {
        let cache = config.recommend.cache_index.then(IndexCache::new);
        Recommender {
            catalog,
            settings: config.recommend.clone(),
            text: config.text.clone(),
            cache,
            metrics: ResourceMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &ResourceMetrics {
        &self.metrics
    }

    /// Index the configured corpus field, through the cache when enabled
    pub fn corpus_index(&mut self) -> Arc<CorpusIndex> {
        let documents = self.catalog.documents(self.settings.corpus);
        match self.cache.as_mut() {
            Some(cache) => cache.get_or_build(&documents, &self.text, &self.metrics),
            None => {
                self.metrics.record_index_build();
                Arc::new(CorpusIndex::build(&documents, &self.text))
            }
        }
    }

    /// Recommend movies similar to the title matching `query`
    #[tracing::instrument(skip(self), fields(corpus = %self.settings.corpus, top_k = self.settings.top_k))]
    pub fn recommend(&mut self, query: &str) -> Outcome {
        let start = Instant::now();
        let titles = self.catalog.titles();
        let Some(row) = resolve_with(self.settings.resolve, query, &titles) else {
            return Outcome::NotFound;
        };

        let index = self.corpus_index();
        let Some(id) = index.id(row).cloned() else {
            return Outcome::NotFound;
        };

        let ranked = rank_similar(index.matrix(), row, self.settings.top_k);
        let recommendations = assemble(&neighbor_ids(&index, &ranked), self.catalog);

        debug!(
            anchor = %id,
            results = recommendations.len(),
            elapsed = ?start.elapsed(),
            "recommend"
        );

        Outcome::Found {
            anchor: Anchor {
                row,
                title: self.catalog.find(&id).and_then(|m| m.title.clone()),
                id,
            },
            recommendations,
        }
    }
}
