use sqlparser::ast::{Query, Statement};

use crate::StatementKind;

/// A parsed statement split into the only shape the rewriter acts on and
/// everything else.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ClassifiedStatement {
    Query(Box<Query>),
    Other(Statement),
}

impl ClassifiedStatement {
    pub(crate) fn kind(&self) -> StatementKind {
        match self {
            Self::Query(_) => StatementKind::Query,
            Self::Other(_) => StatementKind::Other,
        }
    }
}

pub(crate) fn classify_statement(statement: Statement) -> ClassifiedStatement {
    match statement {
        Statement::Query(query) => ClassifiedStatement::Query(query),
        other => ClassifiedStatement::Other(other),
    }
}
