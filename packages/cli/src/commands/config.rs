use crate::app::AppContext;
use crate::cli::rewrite::ConfigArgs;
use crate::config;
use crate::error::CliError;
use crate::output;
use rowcap_engine::QueryLimiter;

pub fn run(context: &AppContext, args: ConfigArgs) -> Result<(), CliError> {
    let limiter = QueryLimiter::new(config::resolve_config(context, &args.flags)?)?;
    output::print_config_json(limiter.config())
}
