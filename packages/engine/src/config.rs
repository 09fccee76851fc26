use serde::{Deserialize, Serialize};

use crate::{RewriteError, RowLimit};

pub const DEFAULT_DIALECT: &str = "generic";
pub const DEFAULT_CTE_NAME: &str = "bounded_rows";

/// How the limiting wrapper is put around the original query body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisStrategy {
    /// Parse a fixed wrapper skeleton and splice the body AST into its CTE.
    #[default]
    Splice,
    /// Format the body, embed it in wrapper text and parse the result.
    Reparse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatStyle {
    #[default]
    Compact,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewriterConfig {
    pub limit: RowLimit,
    #[serde(default = "default_dialect")]
    pub dialect: String,
    #[serde(default = "default_cte_name")]
    pub cte_name: String,
    #[serde(default)]
    pub strategy: SynthesisStrategy,
    #[serde(default)]
    pub style: FormatStyle,
}

impl RewriterConfig {
    pub fn new(limit: RowLimit) -> Self {
        Self {
            limit,
            dialect: default_dialect(),
            cte_name: default_cte_name(),
            strategy: SynthesisStrategy::default(),
            style: FormatStyle::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, RewriteError> {
        serde_json::from_str(json).map_err(|error| {
            RewriteError::invalid_argument(format!("invalid rewriter config: {error}"))
        })
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }

    pub fn with_cte_name(mut self, cte_name: impl Into<String>) -> Self {
        self.cte_name = cte_name.into();
        self
    }

    pub fn with_strategy(mut self, strategy: SynthesisStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_style(mut self, style: FormatStyle) -> Self {
        self.style = style;
        self
    }
}

fn default_dialect() -> String {
    DEFAULT_DIALECT.to_string()
}

fn default_cte_name() -> String {
    DEFAULT_CTE_NAME.to_string()
}
