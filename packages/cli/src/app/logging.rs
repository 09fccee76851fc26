use crate::error::CliError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Logs go to stderr so rewritten SQL on stdout stays pipeable.
pub fn init(verbose: bool) -> Result<(), CliError> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| CliError::msg(format!("failed to install logger: {err}")))
}
