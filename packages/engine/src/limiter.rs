use crate::sql::{
    parse_skeleton, resolve_dialect, rewrite_sql, validate_cte_base_name, PipelineOptions,
};
use crate::{RewriteError, RewriteOutcome, RewriterConfig, RowLimit};

/// Rewrites query statements so they return at most the configured number of
/// rows. Holds only immutable configuration and can be shared across threads.
#[derive(Debug, Clone)]
pub struct QueryLimiter {
    config: RewriterConfig,
}

impl QueryLimiter {
    pub fn new(config: RewriterConfig) -> Result<Self, RewriteError> {
        validate_cte_base_name(&config.cte_name)?;
        let dialect = resolve_dialect(&config.dialect)?;
        parse_skeleton(&config.cte_name, config.limit, dialect.as_ref()).map_err(|error| {
            RewriteError::invalid_argument(format!(
                "synthetic CTE name `{}` is not usable with dialect `{}`: {error}",
                config.cte_name, config.dialect
            ))
        })?;
        Ok(Self { config })
    }

    pub fn from_limit(limit: RowLimit) -> Result<Self, RewriteError> {
        Self::new(RewriterConfig::new(limit))
    }

    pub fn config(&self) -> &RewriterConfig {
        &self.config
    }

    pub fn limit(&self) -> RowLimit {
        self.config.limit
    }

    pub fn rewrite(&self, sql: &str) -> Result<String, RewriteError> {
        self.rewrite_detailed(sql).map(|outcome| outcome.sql)
    }

    pub fn rewrite_detailed(&self, sql: &str) -> Result<RewriteOutcome, RewriteError> {
        let dialect = resolve_dialect(&self.config.dialect)?;
        rewrite_sql(
            sql,
            dialect.as_ref(),
            &PipelineOptions {
                limit: self.config.limit,
                cte_name: &self.config.cte_name,
                strategy: self.config.strategy,
                style: self.config.style,
            },
        )
    }
}

/// Rewrites `sql` with the default configuration and the given row limit.
///
/// The limit is validated before any parsing happens.
pub fn rewrite(sql: &str, limit: i64) -> Result<String, RewriteError> {
    let limit = RowLimit::try_from(limit)?;
    QueryLimiter::from_limit(limit)?.rewrite(sql)
}
