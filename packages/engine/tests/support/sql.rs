#![allow(dead_code)]

use sqlparser::ast::{Query, Statement};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

/// Lowercases, drops comments and collapses whitespace so formatter layout
/// does not matter when comparing SQL text.
pub fn normalize_sql(sql: &str) -> String {
    let mut stripped = String::with_capacity(sql.len());
    let mut rest = sql;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("--") {
            rest = after.find('\n').map_or("", |end| &after[end..]);
            stripped.push(' ');
        } else if let Some(after) = rest.strip_prefix("/*") {
            rest = after.find("*/").map_or("", |end| &after[end + 2..]);
            stripped.push(' ');
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                stripped.push(c);
            }
            rest = chars.as_str();
        }
    }
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn assert_sql_eq(actual: &str, expected: &str) {
    assert_eq!(
        normalize_sql(actual),
        normalize_sql(expected),
        "\nactual:   {actual}\nexpected: {expected}"
    );
}

pub fn parse_query(sql: &str) -> Query {
    let mut statements = Parser::parse_sql(&GenericDialect {}, sql).expect("parse SQL");
    assert_eq!(statements.len(), 1);
    match statements.remove(0) {
        Statement::Query(query) => *query,
        other => panic!("expected query, got {other:?}"),
    }
}

pub fn cte_names(sql: &str) -> Vec<String> {
    parse_query(sql)
        .with
        .map(|with| {
            with.cte_tables
                .into_iter()
                .map(|cte| cte.alias.name.value)
                .collect()
        })
        .unwrap_or_default()
}

pub fn cte_body(sql: &str, name: &str) -> String {
    let with = parse_query(sql).with.expect("query should have a WITH clause");
    with.cte_tables
        .into_iter()
        .find(|cte| cte.alias.name.value == name)
        .map(|cte| cte.query.to_string())
        .unwrap_or_else(|| panic!("no CTE named {name} in {sql}"))
}

/// The query with its WITH clause removed, formatted.
pub fn outer_body(sql: &str) -> String {
    let query = parse_query(sql);
    Query { with: None, ..query }.to_string()
}

pub fn is_recursive(sql: &str) -> bool {
    parse_query(sql).with.is_some_and(|with| with.recursive)
}
