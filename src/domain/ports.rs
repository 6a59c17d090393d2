use crate::domain::model::{ApplyReport, Migration, MigrationScript};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait MigrationStore: Send + Sync {
    fn read_to_string(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn service_role_key(&self) -> &str;
    fn migrations_dir(&self) -> &str;
    fn migration_file(&self) -> &str;
    fn project_url(&self) -> Option<&str>;
}

#[async_trait]
pub trait Runner: Send + Sync {
    async fn discover(&self) -> Result<Vec<Migration>>;
    async fn read(&self, migrations: Vec<Migration>) -> Result<Vec<MigrationScript>>;
    async fn apply(&self, scripts: Vec<MigrationScript>) -> Result<ApplyReport>;
}
