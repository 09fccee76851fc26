mod ast_utils;
mod classify;
mod merge;
mod naming;
mod pipeline;
mod rebuild;
mod synthesize;

pub(crate) use ast_utils::resolve_dialect;
pub(crate) use naming::validate_cte_base_name;
pub(crate) use pipeline::{rewrite_sql, PipelineOptions};
pub(crate) use synthesize::parse_skeleton;
