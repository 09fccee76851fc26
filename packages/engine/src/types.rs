use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::RewriteError;

/// Maximum number of rows a rewritten query may return.
///
/// Valid values are `1..=i64::MAX`, the largest literal every supported
/// dialect accepts in a `LIMIT` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RowLimit(NonZeroU64);

impl RowLimit {
    pub const MAX: u64 = i64::MAX as u64;

    pub fn new(value: u64) -> Result<Self, RewriteError> {
        if value > Self::MAX {
            return Err(RewriteError::invalid_argument(format!(
                "row limit {value} exceeds the maximum of {}",
                Self::MAX
            )));
        }
        NonZeroU64::new(value).map(Self).ok_or_else(|| {
            RewriteError::invalid_argument("row limit must be a positive integer, got 0")
        })
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<i64> for RowLimit {
    type Error = RewriteError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u64::try_from(value).map_err(|_| {
            RewriteError::invalid_argument(format!(
                "row limit must be a positive integer, got {value}"
            ))
        })?;
        Self::new(value)
    }
}

impl TryFrom<u64> for RowLimit {
    type Error = RewriteError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RowLimit> for i64 {
    fn from(limit: RowLimit) -> Self {
        // RowLimit::new caps the value at i64::MAX.
        limit.get() as i64
    }
}

impl std::fmt::Display for RowLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Query,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteOutcome {
    pub sql: String,
    pub kind: StatementKind,
    /// Name of the CTE that bounds the result; `None` when the statement
    /// passed through unchanged.
    pub synthetic_name: Option<String>,
}
