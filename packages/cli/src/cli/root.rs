use super::rewrite::{ConfigArgs, RewriteArgs};
use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rowcap")]
#[command(about = "Bound the number of rows SQL queries can return")]
pub struct Cli {
    /// Path to a JSON rewriter config; flags override its values.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Log pipeline decisions to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite SQL text so it returns at most the configured number of rows.
    Rewrite(RewriteArgs),
    /// Print the effective rewriter configuration as JSON.
    Config(ConfigArgs),
}
