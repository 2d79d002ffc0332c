//! Command implementations for all cinematch commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{interactive, recommend, stats};
use cinematch_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Recommend(args) => recommend::execute(ctx, args),
            Commands::Interactive(args) => interactive::execute(ctx, args),
            Commands::Stats(args) => stats::execute(ctx, args),
        }
    }
}
