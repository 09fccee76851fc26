pub mod config;
pub mod rewrite;
