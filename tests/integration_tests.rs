use anyhow::Result;
use supa_migrate::domain::ports::Runner;
use supa_migrate::utils::validation::Validate;
use supa_migrate::{CliConfig, GuidedRunner, LocalMigrationStore, MigrateEngine, MigrateError};
use tempfile::TempDir;

const MEMBER_TABLES_SQL: &str = "\
-- member area tables
CREATE TABLE member_profiles (
    id UUID PRIMARY KEY,
    display_name TEXT NOT NULL
);
CREATE TABLE member_lessons (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL
);
";

fn config_for(dir: &TempDir, file: &str) -> CliConfig {
    CliConfig {
        service_role_key: Some("sk-role-test".to_string()),
        migrations_dir: dir.path().to_str().unwrap().to_string(),
        migration_file: file.to_string(),
        project_url: None,
        config: None,
        verbose: false,
        monitor: false,
    }
}

fn write_migration(dir: &TempDir, file: &str) {
    std::fs::write(dir.path().join(file), MEMBER_TABLES_SQL).unwrap();
}

#[tokio::test]
async fn test_run_never_applies_even_with_valid_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_migration(&temp_dir, "20251114_create_member_tables.sql");

    let config = config_for(&temp_dir, "20251114_create_member_tables.sql");
    assert!(config.validate().is_ok());

    let store = LocalMigrationStore::new(temp_dir.path());
    let engine = MigrateEngine::new(GuidedRunner::new(store, config));

    let result = engine.run().await;

    // Valid key, readable file, and the run still fails: there is no
    // supported path for pushing raw SQL through the REST API.
    match result {
        Err(MigrateError::RawSqlUnsupported { file }) => {
            assert_eq!(file, "20251114_create_member_tables.sql");
        }
        other => panic!("expected RawSqlUnsupported, got {:?}", other.map(|r| r.applied)),
    }

    Ok(())
}

#[tokio::test]
async fn test_missing_migration_file_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let config = config_for(&temp_dir, "20251114_create_member_tables.sql");
    let store = LocalMigrationStore::new(temp_dir.path());
    let engine = MigrateEngine::new(GuidedRunner::new(store, config));

    let result = engine.run().await;

    match result {
        Err(MigrateError::MigrationNotFound { path }) => {
            assert!(path.contains("20251114_create_member_tables.sql"));
        }
        other => panic!("expected MigrationNotFound, got {:?}", other.map(|r| r.applied)),
    }

    Ok(())
}

#[tokio::test]
async fn test_apply_report_carries_guidance() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_migration(&temp_dir, "20251114_create_member_tables.sql");

    let config = config_for(&temp_dir, "20251114_create_member_tables.sql");
    let store = LocalMigrationStore::new(temp_dir.path());
    let runner = GuidedRunner::new(store, config);

    let migrations = runner.discover().await?;
    assert_eq!(migrations.len(), 1);
    assert_eq!(migrations[0].name, "create_member_tables");
    assert!(migrations[0].version.is_some());

    let scripts = runner.read(migrations).await?;
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].statements, 2);
    assert_eq!(scripts[0].bytes, MEMBER_TABLES_SQL.len());

    let report = runner.apply(scripts).await?;
    assert!(!report.applied);
    assert_eq!(report.alternatives.len(), 3);
    assert!(report.alternatives.iter().any(|a| a.contains("SQL Editor")));
    assert!(report.alternatives.iter().any(|a| a.contains("psql")));
    assert!(report
        .alternatives
        .iter()
        .any(|a| a.contains("supabase db push")));

    Ok(())
}

#[tokio::test]
async fn test_run_with_monitoring_still_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_migration(&temp_dir, "20251114_create_member_tables.sql");

    let config = config_for(&temp_dir, "20251114_create_member_tables.sql");
    let store = LocalMigrationStore::new(temp_dir.path());
    let engine = MigrateEngine::new_with_monitoring(GuidedRunner::new(store, config), true);

    assert!(engine.run().await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_missing_service_role_key_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = config_for(&temp_dir, "20251114_create_member_tables.sql");
    config.service_role_key = None;

    let result = config.validate();

    match result {
        Err(MigrateError::MissingConfigError { field }) => {
            assert_eq!(field, "service_role_key");
        }
        other => panic!("expected MissingConfigError, got {:?}", other),
    }

    Ok(())
}
