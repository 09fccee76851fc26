//! Bounded-result query rewriting.
//!
//! Query statements are wrapped as
//! `WITH <name> AS (<query>) SELECT * FROM <name> LIMIT <n>`, keeping any CTEs
//! of the original query ahead of the synthetic one. Every other statement is
//! returned exactly as it was given.

mod config;
mod error;
mod errors;
mod limiter;
mod sql;
mod types;

pub use config::{
    FormatStyle, RewriterConfig, SynthesisStrategy, DEFAULT_CTE_NAME, DEFAULT_DIALECT,
};
pub use error::{RewriteError, SourcePosition};
pub use errors::ErrorCode;
pub use limiter::{rewrite, QueryLimiter};
pub use types::{RewriteOutcome, RowLimit, StatementKind};
