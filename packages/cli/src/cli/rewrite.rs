use clap::{Args, ValueEnum};
use rowcap_engine::SynthesisStrategy;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    Splice,
    Reparse,
}

impl From<StrategyArg> for SynthesisStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Splice => Self::Splice,
            StrategyArg::Reparse => Self::Reparse,
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct RewriterFlags {
    /// Maximum number of rows a rewritten query may return.
    #[arg(long, env = "ROWCAP_LIMIT", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// SQL dialect used to parse the input (generic, postgresql, mysql, sqlite, ...).
    #[arg(long, env = "ROWCAP_DIALECT")]
    pub dialect: Option<String>,

    /// Base name of the synthetic CTE.
    #[arg(long)]
    pub cte_name: Option<String>,

    /// How the limiting wrapper is built.
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Print multi-line SQL.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub flags: RewriterFlags,

    /// Output format for the rewritten statement.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// SQL statement to rewrite. Use '-' to read from stdin.
    pub sql: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub flags: RewriterFlags,
}
