use crate::domain::ports::MigrationStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalMigrationStore {
    base_path: PathBuf,
}

impl LocalMigrationStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl MigrationStore for LocalMigrationStore {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = self.full_path(path);
        let sql = fs::read_to_string(full_path)?;
        Ok(sql)
    }

    async fn exists(&self, path: &str) -> bool {
        self.full_path(path).exists()
    }
}
