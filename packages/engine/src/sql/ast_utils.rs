use sqlparser::ast::{Ident, ObjectName, ObjectNamePart, Statement};
use sqlparser::dialect::{dialect_from_str, Dialect};
use sqlparser::parser::{Parser, ParserError};

use crate::{FormatStyle, RewriteError, SourcePosition};

pub(crate) fn resolve_dialect(name: &str) -> Result<Box<dyn Dialect>, RewriteError> {
    dialect_from_str(name)
        .ok_or_else(|| RewriteError::invalid_argument(format!("unknown SQL dialect `{name}`")))
}

pub(crate) fn parse_single_statement(
    sql: &str,
    dialect: &dyn Dialect,
) -> Result<Statement, RewriteError> {
    let mut statements = Parser::parse_sql(dialect, sql).map_err(syntax_error)?;
    if statements.len() != 1 {
        return Err(RewriteError::Syntax {
            message: format!(
                "expected exactly one statement, found {}",
                statements.len()
            ),
            position: None,
        });
    }
    Ok(statements.remove(0))
}

pub(crate) fn format_statement(statement: &Statement, style: FormatStyle) -> String {
    match style {
        FormatStyle::Compact => statement.to_string(),
        FormatStyle::Pretty => format!("{statement:#}"),
    }
}

pub(crate) fn object_name_ident(name: &ObjectName) -> Option<&Ident> {
    name.0.last().and_then(ObjectNamePart::as_ident)
}

fn syntax_error(error: ParserError) -> RewriteError {
    let message = error.to_string();
    let position = position_from_message(&message);
    RewriteError::Syntax { message, position }
}

// sqlparser appends "at Line: <l>, Column: <c>" to positioned errors.
fn position_from_message(message: &str) -> Option<SourcePosition> {
    let start = message.rfind("Line: ")?;
    let (line, rest) = message[start + "Line: ".len()..].split_once(", Column: ")?;
    let column = rest
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();
    Some(SourcePosition {
        line: line.trim().parse().ok()?,
        column: column.parse().ok()?,
    })
}
