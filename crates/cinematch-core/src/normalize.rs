//! Flattening of tagged keyword lists into plain document text
//!
//! The keyword table stores each movie's keywords as a serialized list of
//! tagged entries, e.g. `[{'id': 931, 'name': 'jealousy'}, {'id': 4290, 'name': 'toy'}]`.
//! The normalizer extracts the `name` of every entry and joins them with
//! single spaces. It is total: anything it cannot decode becomes empty text.

use serde::Deserialize;
use tracing::trace;

/// Result of normalizing one raw keyword field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Names extracted and joined
    Text(String),
    /// Field was absent, malformed, or had the wrong shape
    Empty,
}

impl Normalized {
    /// Flat text, empty when nothing could be extracted
    pub fn into_text(self) -> String {
        match self {
            Normalized::Text(text) => text,
            Normalized::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Normalized::Empty)
    }
}

#[derive(Debug, Deserialize)]
struct TaggedEntry {
    name: String,
}

/// Decode a serialized list of tagged entries.
///
/// Single quotes are rewritten to double quotes before JSON decoding, so a
/// name containing an apostrophe makes the whole field undecodable.
pub fn normalize_keywords(raw: Option<&str>) -> Normalized {
    let Some(raw) = raw else {
        return Normalized::Empty;
    };

    let json = raw.replace('\'', "\"");
    match serde_json::from_str::<Vec<TaggedEntry>>(&json) {
        Ok(entries) => {
            let names: Vec<String> = entries.into_iter().map(|e| e.name).collect();
            Normalized::Text(names.join(" "))
        }
        Err(e) => {
            trace!(error = %e, "keyword_field_undecodable");
            Normalized::Empty
        }
    }
}

/// Convenience wrapper returning the flat text directly
pub fn keywords_text(raw: Option<&str>) -> String {
    normalize_keywords(raw).into_text()
}
