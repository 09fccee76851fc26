use crate::error::CliError;
use rowcap_engine::{RewriteOutcome, RewriterConfig};

pub fn print_outcome_text(outcome: &RewriteOutcome) {
    println!("{}", outcome.sql);
}

pub fn print_outcome_json(outcome: &RewriteOutcome) -> Result<(), CliError> {
    println!("{}", render_outcome_json(outcome)?);
    Ok(())
}

pub fn render_outcome_json(outcome: &RewriteOutcome) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "sql": outcome.sql,
        "kind": outcome.kind,
        "synthetic_name": outcome.synthetic_name,
    });
    serde_json::to_string_pretty(&payload)
        .map_err(|err| CliError::msg(format!("failed to render rewrite outcome: {err}")))
}

pub fn print_config_json(config: &RewriterConfig) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(config)
        .map_err(|err| CliError::msg(format!("failed to render config: {err}")))?;
    println!("{rendered}");
    Ok(())
}
