//! Records output formatting

use std::fmt::Write;

use cinematch_core::format::escape_quotes;
use cinematch_core::recommend::Outcome;

/// Render a header line and one `R` line per row
pub fn render(query: &str, outcome: &Outcome, limit: usize) -> String {
    let rows: Vec<_> = outcome.recommendations().iter().take(limit).collect();

    let mut out = format!(
        "H cinematch=1 records=1 mode=recommend query=\"{}\" found={} results={}\n",
        escape_quotes(query),
        outcome.is_found(),
        rows.len()
    );

    if let Some(anchor) = outcome.anchor() {
        let _ = writeln!(
            out,
            "A {} \"{}\"",
            anchor.id,
            escape_quotes(anchor.title.as_deref().unwrap_or(""))
        );
    }

    for (i, r) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "R {} {} \"{}\" year={} rating={} votes={} similarity={:.4}",
            i + 1,
            r.id,
            escape_quotes(r.title.as_deref().unwrap_or("")),
            or_dash(r.year),
            r.average_rating
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string()),
            or_dash(r.rating_count),
            r.similarity
        );
    }
    out
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
