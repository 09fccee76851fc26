use sqlparser::ast::{Cte, Query, Statement, With};
use sqlparser::dialect::Dialect;

use crate::sql::ast_utils::parse_single_statement;
use crate::{RewriteError, RowLimit, SynthesisStrategy};

const SKELETON_BODY: &str = "SELECT 1";

pub(crate) fn wrapper_sql(name: &str, body_sql: &str, limit: RowLimit) -> String {
    format!("WITH {name} AS ({body_sql}) SELECT * FROM {name} LIMIT {limit}")
}

/// Builds `WITH <name> AS (<body>) SELECT * FROM <name> LIMIT <limit>`.
///
/// `body` is the original query with its WITH clause removed.
pub(crate) fn synthesize_wrapper(
    body: Query,
    name: &str,
    limit: RowLimit,
    strategy: SynthesisStrategy,
    dialect: &dyn Dialect,
) -> Result<Statement, RewriteError> {
    match strategy {
        SynthesisStrategy::Splice => splice_into_skeleton(body, name, limit, dialect),
        SynthesisStrategy::Reparse => reparse_wrapper_text(&body, name, limit, dialect),
    }
}

/// Parses the wrapper with a placeholder body. Also used to check that a
/// configured CTE name is accepted by the dialect.
pub(crate) fn parse_skeleton(
    name: &str,
    limit: RowLimit,
    dialect: &dyn Dialect,
) -> Result<Statement, RewriteError> {
    parse_single_statement(&wrapper_sql(name, SKELETON_BODY, limit), dialect)
}

fn splice_into_skeleton(
    body: Query,
    name: &str,
    limit: RowLimit,
    dialect: &dyn Dialect,
) -> Result<Statement, RewriteError> {
    let skeleton = parse_skeleton(name, limit, dialect).map_err(|error| {
        RewriteError::structural(format!("wrapper skeleton does not parse: {error}"))
    })?;
    let Statement::Query(skeleton) = skeleton else {
        return Err(RewriteError::structural("wrapper skeleton is not a query"));
    };
    let skeleton = *skeleton;
    let Some(with) = skeleton.with else {
        return Err(RewriteError::structural("wrapper skeleton has no WITH clause"));
    };
    let [placeholder]: [Cte; 1] = with.cte_tables.try_into().map_err(|tables: Vec<Cte>| {
        RewriteError::structural(format!(
            "wrapper skeleton binds {} CTEs, expected 1",
            tables.len()
        ))
    })?;

    let binding = Cte {
        query: Box::new(body),
        ..placeholder
    };
    Ok(Statement::Query(Box::new(Query {
        with: Some(With {
            cte_tables: vec![binding],
            ..with
        }),
        ..skeleton
    })))
}

fn reparse_wrapper_text(
    body: &Query,
    name: &str,
    limit: RowLimit,
    dialect: &dyn Dialect,
) -> Result<Statement, RewriteError> {
    let sql = wrapper_sql(name, &body.to_string(), limit);
    tracing::trace!(sql = %sql, "synthesized wrapper text");
    parse_single_statement(&sql, dialect).map_err(|error| {
        RewriteError::structural(format!("wrapper text does not parse: {error}"))
    })
}
