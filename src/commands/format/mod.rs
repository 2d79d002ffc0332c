//! Output formatting for recommendation results
//!
//! Each renderer turns one query outcome into the text printed for it, so the
//! one-shot command and the interactive prompt share the same output.

pub mod human;
pub mod json;
pub mod records;

use cinematch_core::error::Result;
use cinematch_core::format::OutputFormat;
use cinematch_core::recommend::Outcome;

/// Render one outcome, showing at most `limit` rows
pub fn render(format: OutputFormat, query: &str, outcome: &Outcome, limit: usize) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render(outcome, limit)),
        OutputFormat::Json => json::render(outcome, limit),
        OutputFormat::Records => Ok(records::render(query, outcome, limit)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use cinematch_core::id::MovieId;
    use cinematch_core::recommend::{Anchor, Outcome, Recommendation};

    pub fn rec(id: u64, title: &str, similarity: f64) -> Recommendation {
        Recommendation {
            id: MovieId::from(id),
            title: Some(title.to_string()),
            release_date: None,
            year: None,
            average_rating: None,
            rating_count: None,
            overview: None,
            keywords: String::new(),
            similarity,
        }
    }

    pub fn found(recommendations: Vec<Recommendation>) -> Outcome {
        Outcome::Found {
            anchor: Anchor {
                row: 0,
                id: MovieId::from(1),
                title: Some("Anchor".to_string()),
            },
            recommendations,
        }
    }
}
