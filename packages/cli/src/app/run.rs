use super::context::AppContext;
use super::logging;
use crate::cli::root::{Cli, Command};
use crate::commands;
use crate::error::CliError;
use clap::Parser;

pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    let context = AppContext {
        config_path: cli.config,
    };

    match cli.command {
        Command::Rewrite(args) => commands::rewrite::run(&context, args),
        Command::Config(args) => commands::config::run(&context, args),
    }
}
