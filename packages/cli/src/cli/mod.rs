pub mod rewrite;
pub mod root;
