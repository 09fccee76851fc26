use crate::app::AppContext;
use crate::cli::rewrite::RewriterFlags;
use crate::error::CliError;
use rowcap_engine::{FormatStyle, RewriterConfig, RowLimit, SynthesisStrategy};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file contents. Every field is optional so flags and env vars can
/// supply what the file leaves out.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub limit: Option<i64>,
    pub dialect: Option<String>,
    pub cte_name: Option<String>,
    pub strategy: Option<SynthesisStrategy>,
    pub style: Option<FormatStyle>,
}

pub fn load_file_config(path: &Path) -> Result<FileConfig, CliError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CliError::io("failed to read config file", source))?;
    serde_json::from_str(&raw).map_err(|err| {
        CliError::msg(format!("invalid config file {}: {err}", path.display()))
    })
}

pub fn resolve_config(
    context: &AppContext,
    flags: &RewriterFlags,
) -> Result<RewriterConfig, CliError> {
    let file = match &context.config_path {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    merge_config(file, flags)
}

fn merge_config(file: FileConfig, flags: &RewriterFlags) -> Result<RewriterConfig, CliError> {
    let limit = flags.limit.or(file.limit).ok_or(CliError::InvalidArgs(
        "a row limit is required; pass --limit, set ROWCAP_LIMIT or add \"limit\" to the config file",
    ))?;
    let mut config = RewriterConfig::new(RowLimit::try_from(limit)?);

    if let Some(dialect) = flags.dialect.clone().or(file.dialect) {
        config = config.with_dialect(dialect);
    }
    if let Some(cte_name) = flags.cte_name.clone().or(file.cte_name) {
        config = config.with_cte_name(cte_name);
    }
    if let Some(strategy) = flags.strategy.map(SynthesisStrategy::from).or(file.strategy) {
        config = config.with_strategy(strategy);
    }
    if flags.pretty {
        config = config.with_style(FormatStyle::Pretty);
    } else if let Some(style) = file.style {
        config = config.with_style(style);
    }
    Ok(config)
}
