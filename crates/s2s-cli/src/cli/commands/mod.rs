//! CLI command handlers, one per file.

mod check;
mod cluster;
mod config_path;
mod resolve;
mod resource;

pub use check::run_check;
pub use cluster::run_cluster;
pub use config_path::run_config_path;
pub use resolve::run_resolve;
pub use resource::run_resource;
