//! Human-readable output formatting

use std::fmt::Write;

use cinematch_core::recommend::{Outcome, Recommendation};

/// Shown when a query resolves to nothing or yields no neighbours
pub const NOT_FOUND_MESSAGE: &str = "No movies found with that term. Try another search.";

/// Render results as a numbered list
pub fn render(outcome: &Outcome, limit: usize) -> String {
    let rows = outcome.recommendations();
    if rows.is_empty() {
        return format!("{}\n", NOT_FOUND_MESSAGE);
    }

    let mut out = String::new();
    for (i, rec) in rows.iter().take(limit).enumerate() {
        let _ = writeln!(out, "\n{}. {} ({})", i + 1, title(rec), year(rec));
        let _ = writeln!(out, "   Score: {}", score(rec));
        let _ = writeln!(out, "   Similarity: {:.3}", rec.similarity);
    }
    out
}

fn title(rec: &Recommendation) -> &str {
    rec.title.as_deref().unwrap_or("Untitled")
}

fn year(rec: &Recommendation) -> String {
    rec.year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn score(rec: &Recommendation) -> String {
    match (rec.average_rating, rec.rating_count) {
        (Some(avg), Some(1)) => format!("{:.1}/5.0 (1 rating)", avg),
        (Some(avg), Some(count)) => format!("{:.1}/5.0 ({} ratings)", avg, count),
        (Some(avg), None) => format!("{:.1}/5.0", avg),
        (None, _) => "Not available".to_string(),
    }
}
