use sqlparser::ast::{Cte, Query, Statement, With};

use crate::RewriteError;

/// Bindings for the rebuilt WITH clause: the original CTEs in their original
/// order, then the synthetic one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MergedWith {
    pub(crate) recursive: bool,
    pub(crate) cte_tables: Vec<Cte>,
}

/// Moves the single synthetic binding out of `synthesized` and appends it to
/// the original bindings. Returns the wrapper with an emptied WITH slot, ready
/// for the rebuilder, together with the merged bindings.
pub(crate) fn merge_with_clauses(
    original: Option<With>,
    synthesized: Statement,
) -> Result<(Statement, MergedWith), RewriteError> {
    let (wrapper, synthetic) = take_synthetic_binding(synthesized)?;
    let (recursive, mut cte_tables) = match original {
        Some(with) => (with.recursive, with.cte_tables),
        None => (false, Vec::with_capacity(1)),
    };
    cte_tables.push(synthetic);
    Ok((
        wrapper,
        MergedWith {
            recursive,
            cte_tables,
        },
    ))
}

fn take_synthetic_binding(synthesized: Statement) -> Result<(Statement, Cte), RewriteError> {
    let Statement::Query(query) = synthesized else {
        return Err(RewriteError::structural("synthesized statement is not a query"));
    };
    let query = *query;
    let Some(with) = query.with else {
        return Err(RewriteError::structural("synthesized statement has no WITH clause"));
    };
    let bindings = with.cte_tables.len();
    let Ok([binding]) = <[Cte; 1]>::try_from(with.cte_tables) else {
        return Err(RewriteError::structural(format!(
            "synthesized WITH clause binds {bindings} CTEs, expected 1"
        )));
    };
    let wrapper = Statement::Query(Box::new(Query {
        with: Some(With {
            cte_tables: Vec::new(),
            ..with
        }),
        ..query
    }));
    Ok((wrapper, binding))
}
