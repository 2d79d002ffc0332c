//! `cinematch recommend` command - one query, then exit

use tracing::debug;

use crate::cli::RecommendArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format;
use cinematch_core::error::Result;
use cinematch_core::format::OutputFormat;
use cinematch_core::log_resource_metrics;
use cinematch_core::recommend::Recommender;

/// Execute the recommend command
pub fn execute(ctx: &CommandContext, args: &RecommendArgs) -> Result<()> {
    let config = ctx.config(Some(&args.tuning))?;
    let catalog = ctx.catalog(&config)?;

    let mut recommender = Recommender::new(&catalog, &config);
    let outcome = recommender.recommend(&args.query);
    debug!(
        found = outcome.is_found(),
        results = outcome.recommendations().len(),
        elapsed = ?ctx.start.elapsed(),
        "recommend_done"
    );

    let quiet_miss = ctx.cli.quiet
        && ctx.cli.format == OutputFormat::Human
        && outcome.recommendations().is_empty();
    if !quiet_miss {
        let text = format::render(ctx.cli.format, &args.query, &outcome, config.display.limit)?;
        print!("{}", text);
    }

    log_resource_metrics!(recommender.metrics(), "recommend");
    Ok(())
}
