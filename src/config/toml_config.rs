use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MigrateError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project settings file, an alternative to passing everything as flags:
///
/// ```toml
/// [project]
/// name = "members-area"
/// url = "https://abc123.supabase.co"
/// service_role_key = "${SUPABASE_SERVICE_ROLE_KEY}"
///
/// [migrations]
/// dir = "supabase/migrations"
/// file = "20251114_create_member_tables.sql"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectSection,
    #[serde(default)]
    pub migrations: MigrationsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub url: Option<String>,
    pub service_role_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationsSection {
    #[serde(default = "default_migrations_dir")]
    pub dir: String,
    #[serde(default = "default_migration_file")]
    pub file: String,
}

fn default_migrations_dir() -> String {
    "supabase/migrations".to_string()
}

fn default_migration_file() -> String {
    "20251114_create_member_tables.sql".to_string()
}

impl Default for MigrationsSection {
    fn default() -> Self {
        Self {
            dir: default_migrations_dir(),
            file: default_migration_file(),
        }
    }
}

impl ProjectConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MigrateError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MigrateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    /// Unknown variables are left in place and caught by validation.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("project.name", &self.project.name)?;

        validation::validate_non_empty_string(
            "project.service_role_key",
            &self.project.service_role_key,
        )?;
        validation::validate_placeholder_resolved(
            "project.service_role_key",
            &self.project.service_role_key,
        )?;

        if let Some(url) = &self.project.url {
            validation::validate_url("project.url", url)?;
        }

        validation::validate_path("migrations.dir", &self.migrations.dir)?;
        validation::validate_path("migrations.file", &self.migrations.file)?;
        validation::validate_sql_extension("migrations.file", &self.migrations.file)?;

        Ok(())
    }
}

impl ConfigProvider for ProjectConfig {
    fn service_role_key(&self) -> &str {
        &self.project.service_role_key
    }

    fn migrations_dir(&self) -> &str {
        &self.migrations.dir
    }

    fn migration_file(&self) -> &str {
        &self.migrations.file
    }

    fn project_url(&self) -> Option<&str> {
        self.project.url.as_deref()
    }
}

impl Validate for ProjectConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_project_config() {
        let toml_content = r#"
[project]
name = "members-area"
url = "https://abc123.supabase.co"
service_role_key = "sk-role-abc"

[migrations]
dir = "supabase/migrations"
file = "20251114_create_member_tables.sql"
"#;

        let config = ProjectConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.project.name, "members-area");
        assert_eq!(config.migrations.file, "20251114_create_member_tables.sql");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_migrations_section_defaults() {
        let toml_content = r#"
[project]
name = "members-area"
service_role_key = "sk-role-abc"
"#;

        let config = ProjectConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.migrations.dir, "supabase/migrations");
        assert_eq!(config.migrations.file, "20251114_create_member_tables.sql");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_SUPA_MIGRATE_KEY", "sk-from-env");

        let toml_content = r#"
[project]
name = "members-area"
service_role_key = "${TEST_SUPA_MIGRATE_KEY}"
"#;

        let config = ProjectConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.project.service_role_key, "sk-from-env");

        std::env::remove_var("TEST_SUPA_MIGRATE_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[project]
name = "members-area"
service_role_key = "${SUPA_MIGRATE_VAR_THAT_IS_NOT_SET}"
"#;

        let config = ProjectConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_project_url_fails_validation() {
        let toml_content = r#"
[project]
name = "members-area"
url = "not-a-url"
service_role_key = "sk-role-abc"
"#;

        let config = ProjectConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[project]
name = "file-test"
service_role_key = "sk-role-abc"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ProjectConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project.name, "file-test");
    }
}
