use clap::Args;

use super::parse::{parse_corpus_field, parse_resolve_strategy};
use cinematch_core::catalog::CorpusField;
use cinematch_core::resolve::ResolveStrategy;

/// Per-run overrides of the `[recommend]` and `[display]` settings
#[derive(Args, Debug, Clone, Default)]
pub struct TuningArgs {
    /// Neighbours ranked per query
    #[arg(long, short = 'k')]
    pub top_k: Option<usize>,

    /// Rows shown per query
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Text field compared between movies (keywords, overview)
    #[arg(long, value_parser = parse_corpus_field)]
    pub corpus: Option<CorpusField>,

    /// Anchor resolution (exact-then-substring, substring)
    #[arg(long, value_parser = parse_resolve_strategy)]
    pub resolve: Option<ResolveStrategy>,

    /// Reuse the built index across queries
    #[arg(long)]
    pub cache_index: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Movie title or part of one
    pub query: String,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Text field whose vocabulary is counted (keywords, overview)
    #[arg(long, value_parser = parse_corpus_field)]
    pub corpus: Option<CorpusField>,
}
