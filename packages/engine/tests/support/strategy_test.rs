#![allow(dead_code)]

use rowcap_engine::{
    QueryLimiter, RewriteError, RewriteOutcome, RewriterConfig, RowLimit, SynthesisStrategy,
};

/// Runs rewrites with one synthesis strategy; `strategy_test!` builds one
/// harness per strategy so every assertion is checked against both.
pub struct Harness {
    pub strategy: SynthesisStrategy,
}

impl Harness {
    pub fn new(strategy: SynthesisStrategy) -> Self {
        Self { strategy }
    }

    pub fn config(&self, limit: u64) -> RewriterConfig {
        let limit = RowLimit::new(limit).expect("test limit should be valid");
        RewriterConfig::new(limit).with_strategy(self.strategy)
    }

    pub fn limiter(&self, limit: u64) -> QueryLimiter {
        self.limiter_with(self.config(limit))
    }

    pub fn limiter_with(&self, config: RewriterConfig) -> QueryLimiter {
        QueryLimiter::new(config.with_strategy(self.strategy))
            .expect("test limiter config should be valid")
    }

    pub fn try_rewrite(&self, sql: &str, limit: u64) -> Result<String, RewriteError> {
        self.limiter(limit).rewrite(sql)
    }

    pub fn rewrite(&self, sql: &str, limit: u64) -> String {
        self.try_rewrite(sql, limit)
            .unwrap_or_else(|error| panic!("rewrite of {sql:?} failed: {error}"))
    }

    pub fn rewrite_detailed(&self, sql: &str, limit: u64) -> RewriteOutcome {
        self.limiter(limit)
            .rewrite_detailed(sql)
            .unwrap_or_else(|error| panic!("rewrite of {sql:?} failed: {error}"))
    }
}
