use std::collections::HashSet;
use std::ops::ControlFlow;

use sqlparser::ast::{ObjectName, Query, Visit, Visitor};

use crate::sql::ast_utils::object_name_ident;
use crate::RewriteError;

pub(crate) fn validate_cte_base_name(name: &str) -> Result<(), RewriteError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RewriteError::invalid_argument(format!(
            "synthetic CTE name `{name}` must match [A-Za-z_][A-Za-z0-9_]*"
        )))
    }
}

/// Picks the first of `base`, `base_1`, `base_2`, ... that neither names a
/// CTE nor a relation anywhere in `node`. Comparison is case-insensitive.
pub(crate) fn pick_synthetic_name<V: Visit>(node: &V, base: &str) -> String {
    let taken = collect_bound_names(node);
    let base_lower = base.to_ascii_lowercase();
    if !taken.contains(&base_lower) {
        return base.to_string();
    }
    (1_u64..)
        .find(|suffix| !taken.contains(&format!("{base_lower}_{suffix}")))
        .map(|suffix| format!("{base}_{suffix}"))
        .unwrap_or_else(|| base.to_string())
}

fn collect_bound_names<V: Visit>(node: &V) -> HashSet<String> {
    let mut collector = BoundNameCollector::default();
    let _ = node.visit(&mut collector);
    collector.names
}

#[derive(Default)]
struct BoundNameCollector {
    names: HashSet<String>,
}

impl Visitor for BoundNameCollector {
    type Break = ();

    fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<Self::Break> {
        if let Some(ident) = object_name_ident(relation) {
            self.names.insert(ident.value.to_ascii_lowercase());
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_query(&mut self, query: &Query) -> ControlFlow<Self::Break> {
        if let Some(with) = &query.with {
            for cte in &with.cte_tables {
                self.names.insert(cte.alias.name.value.to_ascii_lowercase());
            }
        }
        ControlFlow::Continue(())
    }
}
