//! Resolution of a free-text query to one anchor movie
//!
//! Matching is case-insensitive. Among several candidates the one earliest
//! in corpus order wins, so resolution is deterministic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_unsupported;
use crate::error::{CinematchError, Result};

/// How a query selects its anchor title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveStrategy {
    /// Exact title match first, then first title containing the query
    #[default]
    ExactThenSubstring,
    /// First title containing the query
    Substring,
}

impl FromStr for ResolveStrategy {
    type Err = CinematchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "exact-then-substring" => Ok(ResolveStrategy::ExactThenSubstring),
            "substring" => Ok(ResolveStrategy::Substring),
            other => bail_unsupported!(
                "resolve strategy",
                other,
                "exact-then-substring, substring"
            ),
        }
    }
}

impl fmt::Display for ResolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveStrategy::ExactThenSubstring => write!(f, "exact-then-substring"),
            ResolveStrategy::Substring => write!(f, "substring"),
        }
    }
}

/// Resolve with exact match first, then substring match
pub fn resolve_anchor<S: AsRef<str>>(query: &str, titles: &[S]) -> Option<usize> {
    resolve_with(ResolveStrategy::ExactThenSubstring, query, titles)
}

/// Resolve `query` against `titles` using `strategy`.
///
/// Blank queries never resolve; a title never matches unless the query is a
/// non-empty part of it.
pub fn resolve_with<S: AsRef<str>>(
    strategy: ResolveStrategy,
    query: &str,
    titles: &[S],
) -> Option<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let lowered: Vec<String> = titles.iter().map(|t| t.as_ref().to_lowercase()).collect();

    if strategy == ResolveStrategy::ExactThenSubstring {
        if let Some(row) = lowered.iter().position(|t| *t == needle) {
            debug!(row, "anchor_exact_match");
            return Some(row);
        }
    }

    let found = lowered.iter().position(|t| t.contains(&needle));
    match found {
        Some(row) => debug!(row, %strategy, "anchor_substring_match"),
        None => debug!(query = %needle, "anchor_not_found"),
    }
    found
}
