//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::CorpusField;
use crate::resolve::ResolveStrategy;

/// Top-level cinematch configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CinematchConfig {
    /// Input table locations
    #[serde(default)]
    pub data: DataConfig,

    /// Recommendation parameters
    #[serde(default)]
    pub recommend: RecommendConfig,

    /// Tokenizer settings
    #[serde(default)]
    pub text: TextConfig,

    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Paths of the three input tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Movie metadata CSV (id, title, release_date, overview)
    #[serde(default = "default_movies_path")]
    pub movies: PathBuf,

    /// Keyword CSV (id, keywords)
    #[serde(default = "default_keywords_path")]
    pub keywords: PathBuf,

    /// Ratings CSV (movieId, rating)
    #[serde(default = "default_ratings_path")]
    pub ratings: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            movies: default_movies_path(),
            keywords: default_keywords_path(),
            ratings: default_ratings_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Neighbours kept after ranking (anchor excluded)
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Which text field forms the corpus
    #[serde(default)]
    pub corpus: CorpusField,

    /// How a query picks its anchor movie
    #[serde(default)]
    pub resolve: ResolveStrategy,

    /// Reuse a built index when the corpus fingerprint matches
    #[serde(default)]
    pub cache_index: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            corpus: CorpusField::default(),
            resolve: ResolveStrategy::default(),
            cache_index: false,
        }
    }
}

/// Tokenizer settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextConfig {
    /// Shortest token kept, in characters
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// Drop common English stop words
    #[serde(default)]
    pub stop_words: bool,

    /// Apply Porter stemming
    #[serde(default)]
    pub stemming: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_token_len: default_min_token_len(),
            stop_words: false,
            stemming: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows shown per query
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("movies_metadata.csv")
}

fn default_keywords_path() -> PathBuf {
    PathBuf::from("keywords.csv")
}

fn default_ratings_path() -> PathBuf {
    PathBuf::from("ratings.csv")
}

fn default_top_k() -> usize {
    9
}

fn default_min_token_len() -> usize {
    2
}

fn default_limit() -> usize {
    5
}
