//! The joined movie table the recommender works over
//!
//! Movies are left-joined with their flattened keyword text and their rating
//! summary. Every join is a left join: a movie without keywords gets empty
//! keyword text, a movie without ratings gets no rating summary.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bail_unsupported;
use crate::error::{CinematchError, Result};
use crate::id::MovieId;
use crate::ingest::{KeywordRow, MovieRow, RatingRow};
use crate::normalize::keywords_text;

/// Which text field of a movie forms the similarity corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusField {
    /// Flattened keyword tags
    #[default]
    Keywords,
    /// Free-text plot overview
    Overview,
}

impl FromStr for CorpusField {
    type Err = CinematchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "keywords" => Ok(CorpusField::Keywords),
            "overview" => Ok(CorpusField::Overview),
            other => bail_unsupported!("corpus field", other, "keywords, overview"),
        }
    }
}

impl fmt::Display for CorpusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusField::Keywords => write!(f, "keywords"),
            CorpusField::Overview => write!(f, "overview"),
        }
    }
}

/// Average and count of the ratings of one movie
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: u64,
}

/// Group ratings by movie and compute mean and count
pub fn aggregate_ratings(ratings: &[RatingRow]) -> HashMap<MovieId, RatingSummary> {
    let mut sums: HashMap<&MovieId, (f64, u64)> = HashMap::new();
    for row in ratings {
        let entry = sums.entry(&row.movie_id).or_insert((0.0, 0));
        entry.0 += row.rating;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(id, (sum, count))| {
            (
                id.clone(),
                RatingSummary {
                    average: sum / count as f64,
                    count,
                },
            )
        })
        .collect()
}

/// One movie with its enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    /// Flattened keyword text, empty when the movie has none
    pub keywords: String,
    pub rating: Option<RatingSummary>,
}

impl MovieRecord {
    /// Title, or empty text when the table had none
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Text of the chosen corpus field, empty when absent
    pub fn text(&self, field: CorpusField) -> &str {
        match field {
            CorpusField::Keywords => &self.keywords,
            CorpusField::Overview => self.overview.as_deref().unwrap_or(""),
        }
    }

    /// Release year parsed from the release date
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(parse_release_year)
    }
}

/// Year of a `YYYY-MM-DD` date, falling back to a leading 4-digit year
pub fn parse_release_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }
    let prefix = raw.get(..4)?;
    if prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}

/// Summary counts reported by `cinematch stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub movies: usize,
    pub with_keywords: usize,
    pub with_overview: usize,
    pub with_ratings: usize,
}

/// Ordered, id-unique table of enriched movies
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
    rows: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Left-join movies with keyword text and rating summaries.
    ///
    /// Repeated movie ids keep their first row, as do repeated keyword rows.
    #[tracing::instrument(skip_all, fields(movies = movies.len(), keywords = keywords.len(), ratings = ratings.len()))]
    pub fn join(movies: Vec<MovieRow>, keywords: Vec<KeywordRow>, ratings: &[RatingRow]) -> Self {
        let mut keyword_text: HashMap<MovieId, String> = HashMap::new();
        for row in keywords {
            if let Entry::Vacant(slot) = keyword_text.entry(row.id) {
                slot.insert(keywords_text(row.keywords.as_deref()));
            }
        }

        let summaries = aggregate_ratings(ratings);
        let mut seen: HashSet<MovieId> = HashSet::new();
        let mut records = Vec::with_capacity(movies.len());
        let mut duplicates = 0usize;

        for row in movies {
            if !seen.insert(row.id.clone()) {
                duplicates += 1;
                continue;
            }

            let keywords = keyword_text.get(&row.id).cloned().unwrap_or_default();
            let rating = summaries.get(&row.id).copied();
            records.push(MovieRecord {
                id: row.id,
                title: row.title,
                release_date: row.release_date,
                overview: row.overview,
                keywords,
                rating,
            });
        }

        if duplicates > 0 {
            warn!(duplicates, "dropped movie rows with repeated ids");
        }
        debug!(movies = records.len(), "catalog_joined");

        Self::from_records(records)
    }

    /// Wrap already-joined records; later duplicates of an id are dropped
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let mut movies = Vec::with_capacity(records.len());
        let mut rows = HashMap::with_capacity(records.len());
        for record in records {
            if let Entry::Vacant(slot) = rows.entry(record.id.clone()) {
                slot.insert(movies.len());
                movies.push(record);
            }
        }
        Catalog { movies, rows }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&MovieRecord> {
        self.movies.get(row)
    }

    /// Record of a movie id
    pub fn find(&self, id: &MovieId) -> Option<&MovieRecord> {
        self.rows.get(id).map(|&row| &self.movies[row])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter()
    }

    /// Titles in catalog order, missing titles as empty text
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(MovieRecord::title_or_empty).collect()
    }

    /// `(id, text)` pairs of the chosen field, in catalog order
    pub fn documents(&self, field: CorpusField) -> Vec<(MovieId, &str)> {
        self.movies
            .iter()
            .map(|m| (m.id.clone(), m.text(field)))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            movies: self.movies.len(),
            with_keywords: self.movies.iter().filter(|m| !m.keywords.is_empty()).count(),
            with_overview: self.movies.iter().filter(|m| m.overview.is_some()).count(),
            with_ratings: self.movies.iter().filter(|m| m.rating.is_some()).count(),
        }
    }
}
