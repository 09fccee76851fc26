use sqlparser::ast::{Query, Statement, With};

use crate::sql::merge::MergedWith;
use crate::RewriteError;

/// Returns `synthesized` with its WITH clause replaced by `merged`. Every
/// other field of the query and of the WITH clause is moved across as is.
pub(crate) fn rebuild_statement(
    synthesized: Statement,
    merged: MergedWith,
) -> Result<Statement, RewriteError> {
    let Statement::Query(query) = synthesized else {
        return Err(RewriteError::reconstruction(
            "synthesized statement is not a query",
        ));
    };
    let query = *query;
    let Some(with) = query.with else {
        return Err(RewriteError::reconstruction(
            "synthesized query has no WITH slot to replace",
        ));
    };

    Ok(Statement::Query(Box::new(Query {
        with: Some(With {
            recursive: merged.recursive,
            cte_tables: merged.cte_tables,
            ..with
        }),
        ..query
    })))
}
