use crate::app::AppContext;
use crate::cli::rewrite::{OutputFormat, RewriteArgs};
use crate::config;
use crate::error::CliError;
use crate::output;
use rowcap_engine::QueryLimiter;
use std::io::Read;

pub fn run(context: &AppContext, args: RewriteArgs) -> Result<(), CliError> {
    let sql = resolve_sql(&args, std::io::stdin())?;
    let limiter = QueryLimiter::new(config::resolve_config(context, &args.flags)?)?;
    let outcome = limiter.rewrite_detailed(&sql)?;

    match args.format {
        OutputFormat::Json => output::print_outcome_json(&outcome)?,
        OutputFormat::Text => output::print_outcome_text(&outcome),
    }

    Ok(())
}

/// Returns the positional SQL, or everything read from `stdin` when the
/// argument is `-`.
fn resolve_sql(args: &RewriteArgs, mut stdin: impl Read) -> Result<String, CliError> {
    if args.sql == "-" {
        let mut input = String::new();
        stdin
            .read_to_string(&mut input)
            .map_err(|source| CliError::io("failed to read SQL from stdin", source))?;
        if input.trim().is_empty() {
            return Err(CliError::InvalidArgs("stdin SQL input is empty"));
        }
        return Ok(input);
    }

    Ok(args.sql.clone())
}
