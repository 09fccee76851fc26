mod context;
mod logging;
mod run;

pub use context::AppContext;
pub use run::run;
