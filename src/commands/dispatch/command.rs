//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, TuningArgs};
use crate::commands::interactive;
use cinematch_core::catalog::Catalog;
use cinematch_core::config::CinematchConfig;
use cinematch_core::error::Result;
use cinematch_core::ingest::{load_keywords, load_movies, load_ratings};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Discover the config file and apply command-line overrides
    pub fn config(&self, tuning: Option<&TuningArgs>) -> Result<CinematchConfig> {
        let mut config = CinematchConfig::discover(self.cli.config.as_deref())?;
        apply_overrides(&mut config, self.cli, tuning);
        config.validate()?;
        debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }

    /// Read the three data tables and join them
    pub fn catalog(&self, config: &CinematchConfig) -> Result<Catalog> {
        let movies = load_movies(&config.data.movies)?;
        let keywords = load_keywords(&config.data.keywords)?;
        let ratings = load_ratings(&config.data.ratings)?;
        let catalog = Catalog::join(movies, keywords, &ratings);
        debug!(movies = catalog.len(), elapsed = ?self.start.elapsed(), "load_catalog");
        Ok(catalog)
    }
}

/// Command-line values win over the config file
pub fn apply_overrides(config: &mut CinematchConfig, cli: &Cli, tuning: Option<&TuningArgs>) {
    if let Some(path) = &cli.movies {
        config.data.movies = path.clone();
    }
    if let Some(path) = &cli.keywords {
        config.data.keywords = path.clone();
    }
    if let Some(path) = &cli.ratings {
        config.data.ratings = path.clone();
    }

    let Some(tuning) = tuning else {
        return;
    };
    if let Some(top_k) = tuning.top_k {
        config.recommend.top_k = top_k;
    }
    if let Some(limit) = tuning.limit {
        config.display.limit = limit;
    }
    if let Some(corpus) = tuning.corpus {
        config.recommend.corpus = corpus;
    }
    if let Some(resolve) = tuning.resolve {
        config.recommend.resolve = resolve;
    }
    if tuning.cache_index {
        config.recommend.cache_index = true;
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Bare `cinematch` runs the interactive prompt
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        interactive::execute(ctx, &TuningArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use cinematch_core::catalog::CorpusField;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "cinematch",
            "--movies",
            "m.csv",
            "recommend",
            "alien",
            "--top-k",
            "4",
            "--corpus",
            "overview",
            "--cache-index",
        ])
        .unwrap();
        let tuning = match &cli.command {
            Some(crate::cli::Commands::Recommend(args)) => args.tuning.clone(),
            _ => unreachable!(),
        };

        let mut config = CinematchConfig::default();
        apply_overrides(&mut config, &cli, Some(&tuning));

        assert_eq!(config.data.movies, PathBuf::from("m.csv"));
        assert_eq!(config.data.keywords, PathBuf::from("keywords.csv"));
        assert_eq!(config.recommend.top_k, 4);
        assert_eq!(config.recommend.corpus, CorpusField::Overview);
        assert!(config.recommend.cache_index);
        assert_eq!(config.display.limit, 5);
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        let cli = Cli::try_parse_from(["cinematch", "interactive", "--limit", "0"]).unwrap();
        let tuning = match &cli.command {
            Some(crate::cli::Commands::Interactive(args)) => args.clone(),
            _ => unreachable!(),
        };
        let mut config = CinematchConfig::default();
        apply_overrides(&mut config, &cli, Some(&tuning));
        assert!(config.validate().is_err());
    }
}
