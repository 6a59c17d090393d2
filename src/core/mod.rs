pub mod engine;
pub mod runner;

pub use crate::domain::model::{ApplyReport, Migration, MigrationScript};
pub use crate::domain::ports::{ConfigProvider, MigrationStore, Runner};
pub use crate::utils::error::Result;
