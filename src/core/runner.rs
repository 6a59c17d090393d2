use crate::core::{ApplyReport, ConfigProvider, Migration, MigrationScript, MigrationStore, Result, Runner};
use crate::domain::model::APPLY_ALTERNATIVES;
use crate::utils::error::MigrateError;
use std::path::Path;

/// Runner that resolves and reads the migration locally, then hands the
/// operator the routes that can actually execute it. The platform's REST
/// surface has no endpoint for raw SQL, so `apply` never succeeds.
pub struct GuidedRunner<S: MigrationStore, C: ConfigProvider> {
    store: S,
    config: C,
}

impl<S: MigrationStore, C: ConfigProvider> GuidedRunner<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self { store, config }
    }
}

#[async_trait::async_trait]
impl<S: MigrationStore, C: ConfigProvider> Runner for GuidedRunner<S, C> {
    async fn discover(&self) -> Result<Vec<Migration>> {
        let file = self.config.migration_file();
        let full_path = Path::new(self.config.migrations_dir()).join(file);

        tracing::debug!("Resolving migration: {}", full_path.display());

        if !self.store.exists(file).await {
            return Err(MigrateError::MigrationNotFound {
                path: full_path.display().to_string(),
            });
        }

        let migration = Migration::from_path(full_path);
        if let Some(version) = migration.version {
            tracing::debug!("Migration '{}' versioned {}", migration.name, version);
        }

        Ok(vec![migration])
    }

    async fn read(&self, migrations: Vec<Migration>) -> Result<Vec<MigrationScript>> {
        let mut scripts = Vec::new();

        for migration in migrations {
            println!("📖 Reading migration: {}", migration.path.display());
            let sql = self.store.read_to_string(&migration.file_name).await?;
            let script = MigrationScript::new(migration, sql);

            tracing::debug!(
                "Loaded {} ({} bytes, {} statement(s))",
                script.migration.file_name,
                script.bytes,
                script.statements
            );

            scripts.push(script);
        }

        Ok(scripts)
    }

    async fn apply(&self, scripts: Vec<MigrationScript>) -> Result<ApplyReport> {
        println!("⚠️  NOTE: executing raw SQL via the REST API is not supported.");
        println!("Use one of the alternatives:");
        for (i, alternative) in APPLY_ALTERNATIVES.iter().enumerate() {
            println!("  {}. {}", i + 1, alternative);
        }

        if let Some(url) = self.config.project_url() {
            println!("🔗 Project: {}", url);
        }

        let (file_name, bytes, statements) = scripts
            .first()
            .map(|s| (s.migration.file_name.clone(), s.bytes, s.statements))
            .unwrap_or_default();

        Ok(ApplyReport {
            file_name,
            bytes,
            statements,
            applied: false,
            alternatives: APPLY_ALTERNATIVES.iter().map(|s| s.to_string()).collect(),
        })
    }
}
