pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalMigrationStore, toml_config::ProjectConfig, CliConfig};

pub use crate::core::{engine::MigrateEngine, runner::GuidedRunner};
pub use utils::error::{MigrateError, Result};
