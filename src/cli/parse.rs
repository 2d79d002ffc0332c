use cinematch_core::catalog::CorpusField;
use cinematch_core::format::OutputFormat;
use cinematch_core::resolve::ResolveStrategy;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse corpus field from string
pub fn parse_corpus_field(s: &str) -> std::result::Result<CorpusField, String> {
    s.parse::<CorpusField>().map_err(|e| e.to_string())
}

/// Parse anchor resolution strategy from string
pub fn parse_resolve_strategy(s: &str) -> std::result::Result<ResolveStrategy, String> {
    s.parse::<ResolveStrategy>().map_err(|e| e.to_string())
}
