pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "supa-migrate"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Apply a SQL migration to a hosted Supabase project")
)]
pub struct CliConfig {
    /// Administrative key for the project. Found under
    /// Supabase Console → Settings → API Keys → service_role.
    #[cfg_attr(feature = "cli", arg(value_name = "SERVICE_ROLE_KEY"))]
    pub service_role_key: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "supabase/migrations"))]
    pub migrations_dir: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "20251114_create_member_tables.sql")
    )]
    pub migration_file: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Project URL, printed alongside the apply instructions")
    )]
    pub project_url: Option<String>,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Load project settings from a TOML file instead of flags")
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log system resource usage per phase"))]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn service_role_key(&self) -> &str {
        self.service_role_key.as_deref().unwrap_or("")
    }

    fn migrations_dir(&self) -> &str {
        &self.migrations_dir
    }

    fn migration_file(&self) -> &str {
        &self.migration_file
    }

    fn project_url(&self) -> Option<&str> {
        self.project_url.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let key = validation::validate_required_field("service_role_key", &self.service_role_key)?;
        validation::validate_non_empty_string("service_role_key", key)?;

        validation::validate_path("migrations_dir", &self.migrations_dir)?;
        validation::validate_path("migration_file", &self.migration_file)?;
        validation::validate_sql_extension("migration_file", &self.migration_file)?;

        if let Some(url) = &self.project_url {
            validation::validate_url("project_url", url)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            service_role_key: Some("sk-role-abc".to_string()),
            migrations_dir: "supabase/migrations".to_string(),
            migration_file: "20251114_create_member_tables.sql".to_string(),
            project_url: None,
            config: None,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let mut config = base_config();
        config.service_role_key = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_sql_migration_file_is_rejected() {
        let mut config = base_config();
        config.migration_file = "notes.md".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_project_url_is_checked_when_present() {
        let mut config = base_config();
        config.project_url = Some("ftp://abc.supabase.co".to_string());
        assert!(config.validate().is_err());

        config.project_url = Some("https://abc.supabase.co".to_string());
        assert!(config.validate().is_ok());
    }
}
