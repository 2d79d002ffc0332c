//! JSON output formatting

use serde_json::json;

use cinematch_core::error::Result;
use cinematch_core::recommend::Outcome;

/// Render results as a JSON array, ranks starting at 1
pub fn render(outcome: &Outcome, limit: usize) -> Result<String> {
    let output: Vec<_> = outcome
        .recommendations()
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, r)| {
            json!({
                "rank": i + 1,
                "id": r.id,
                "title": r.title,
                "release_date": r.release_date,
                "year": r.year,
                "average_rating": r.average_rating,
                "rating_count": r.rating_count,
                "overview": r.overview,
                "keywords": r.keywords,
                "similarity": r.similarity,
            })
        })
        .collect();
    Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::format::test_support::{found, rec};

    #[test]
    fn test_not_found_is_empty_array() {
        let out = render(&Outcome::NotFound, 5).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_fields_and_ranks() {
        let mut first = rec(7, "Alien", 0.9);
        first.average_rating = Some(4.0);
        first.rating_count = Some(2);
        let out = render(&found(vec![first, rec(8, "Heat", 0.2)]), 5).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["rank"], 1);
        assert_eq!(rows[0]["id"], "7");
        assert_eq!(rows[0]["title"], "Alien");
        assert_eq!(rows[0]["average_rating"], 4.0);
        assert_eq!(rows[0]["rating_count"], 2);
        assert_eq!(rows[1]["rank"], 2);
        assert!(rows[1]["average_rating"].is_null());
    }
}
