use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub config_path: Option<PathBuf>,
}
