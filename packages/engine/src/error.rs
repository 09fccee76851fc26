use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Line/column of a syntax error, both 1-based, as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: u64,
    pub column: u64,
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// The input text is not exactly one well-formed statement.
    #[error("syntax error: {message}")]
    Syntax {
        message: String,
        position: Option<SourcePosition>,
    },

    /// The synthesized wrapper does not have the `WITH <name> AS (...)` shape.
    #[error("synthesized wrapper has an unexpected shape: {0}")]
    Structural(String),

    /// The WITH slot of the synthesized statement could not be replaced.
    #[error("failed to rebuild statement: {0}")]
    Reconstruction(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RewriteError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn structural(message: impl Into<String>) -> Self {
        Self::Structural(message.into())
    }

    pub(crate) fn reconstruction(message: impl Into<String>) -> Self {
        Self::Reconstruction(message.into())
    }

    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            Self::Syntax { position, .. } => *position,
            _ => None,
        }
    }
}
