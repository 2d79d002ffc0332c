//! Cinematch Core Library
//!
//! Content-based movie recommendation: CSV ingestion, TF-IDF indexing of
//! keyword or overview text, cosine ranking against an anchor title and
//! assembly of the enriched result rows.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod id;
pub mod index;
pub mod ingest;
pub mod logging;
pub mod normalize;
pub mod recommend;
pub mod resolve;
pub mod similarity;
pub mod text;
