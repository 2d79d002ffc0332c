//! `cinematch stats` command - catalog summary

use serde_json::json;

use crate::cli::{StatsArgs, TuningArgs};
use crate::commands::dispatch::CommandContext;
use cinematch_core::catalog::{CatalogStats, CorpusField};
use cinematch_core::error::Result;
use cinematch_core::format::OutputFormat;
use cinematch_core::index::CorpusIndex;

/// Execute the stats command
pub fn execute(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let tuning = TuningArgs {
        corpus: args.corpus,
        ..TuningArgs::default()
    };
    let config = ctx.config(Some(&tuning))?;
    let catalog = ctx.catalog(&config)?;

    let corpus = config.recommend.corpus;
    let index = CorpusIndex::build(&catalog.documents(corpus), &config.text);
    let stats = catalog.stats();

    print!(
        "{}",
        render(ctx.cli.format, &stats, corpus, index.vocabulary().len())?
    );
    Ok(())
}

fn render(
    format: OutputFormat,
    stats: &CatalogStats,
    corpus: CorpusField,
    vocabulary: usize,
) -> Result<String> {
    let text = match format {
        OutputFormat::Human => format!(
            "Movies: {}\nWith keywords: {}\nWith overview: {}\nWith ratings: {}\nVocabulary ({}): {}\n",
            stats.movies,
            stats.with_keywords,
            stats.with_overview,
            stats.with_ratings,
            corpus,
            vocabulary
        ),
        OutputFormat::Json => {
            let output = json!({
                "movies": stats.movies,
                "with_keywords": stats.with_keywords,
                "with_overview": stats.with_overview,
                "with_ratings": stats.with_ratings,
                "corpus": corpus.to_string(),
                "vocabulary_size": vocabulary,
            });
            format!("{}\n", serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Records => format!(
            "H cinematch=1 records=1 mode=stats movies={} with_keywords={} with_overview={} with_ratings={} corpus={} vocabulary={}\n",
            stats.movies,
            stats.with_keywords,
            stats.with_overview,
            stats.with_ratings,
            corpus,
            vocabulary
        ),
    };
    Ok(text)
}
