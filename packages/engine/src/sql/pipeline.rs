use sqlparser::ast::Query;
use sqlparser::dialect::Dialect;

use crate::sql::ast_utils::{format_statement, parse_single_statement};
use crate::sql::classify::{classify_statement, ClassifiedStatement};
use crate::sql::merge::merge_with_clauses;
use crate::sql::naming::pick_synthetic_name;
use crate::sql::rebuild::rebuild_statement;
use crate::sql::synthesize::synthesize_wrapper;
use crate::{FormatStyle, RewriteError, RewriteOutcome, RowLimit, SynthesisStrategy};

pub(crate) struct PipelineOptions<'a> {
    pub(crate) limit: RowLimit,
    pub(crate) cte_name: &'a str,
    pub(crate) strategy: SynthesisStrategy,
    pub(crate) style: FormatStyle,
}

/// Parses `sql` and, when it is a query, wraps it in a CTE bounded by
/// `options.limit`. Any other statement is returned as the original text.
pub(crate) fn rewrite_sql(
    sql: &str,
    dialect: &dyn Dialect,
    options: &PipelineOptions<'_>,
) -> Result<RewriteOutcome, RewriteError> {
    let statement = parse_single_statement(sql, dialect)?;
    let classified = classify_statement(statement);
    let kind = classified.kind();

    let query = match classified {
        ClassifiedStatement::Query(query) => *query,
        ClassifiedStatement::Other(_) => {
            tracing::debug!("statement is not a query, passing through");
            return Ok(RewriteOutcome {
                sql: sql.to_string(),
                kind,
                synthetic_name: None,
            });
        }
    };

    let synthetic_name = pick_synthetic_name(&query, options.cte_name);
    let body = Query { with: None, ..query };
    let original_with = query.with;
    let original_bindings = original_with
        .as_ref()
        .map_or(0, |with| with.cte_tables.len());

    let wrapper = synthesize_wrapper(
        body,
        &synthetic_name,
        options.limit,
        options.strategy,
        dialect,
    )?;
    let (wrapper, merged) = merge_with_clauses(original_with, wrapper)?;
    let rebuilt = rebuild_statement(wrapper, merged)?;

    tracing::debug!(
        limit = %options.limit,
        synthetic_name = %synthetic_name,
        original_bindings,
        strategy = ?options.strategy,
        "wrapped query in limiting CTE"
    );

    Ok(RewriteOutcome {
        sql: format_statement(&rebuilt, options.style),
        kind,
        synthetic_name: Some(synthetic_name),
    })
}
