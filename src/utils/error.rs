use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Migration file not found: {path}")]
    MigrationNotFound { path: String },

    #[error("Raw SQL execution via the REST API is not supported (migration: {file})")]
    RawSqlUnsupported { file: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Migration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MigrateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MigrateError::IoError(_) | MigrateError::SerializationError(_) => ErrorCategory::Io,
            MigrateError::MissingConfigError { .. }
            | MigrateError::InvalidConfigValueError { .. }
            | MigrateError::ConfigValidationError { .. } => ErrorCategory::Config,
            MigrateError::MigrationNotFound { .. } | MigrateError::RawSqlUnsupported { .. } => {
                ErrorCategory::Migration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MigrateError::IoError(_) => ErrorSeverity::Critical,
            MigrateError::SerializationError(_) => ErrorSeverity::Medium,
            MigrateError::MissingConfigError { .. }
            | MigrateError::InvalidConfigValueError { .. }
            | MigrateError::ConfigValidationError { .. }
            | MigrateError::MigrationNotFound { .. }
            | MigrateError::RawSqlUnsupported { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MigrateError::IoError(_) => {
                "Check file permissions and that the working directory is the project root"
                    .to_string()
            }
            MigrateError::SerializationError(_) => {
                "This is an internal formatting problem; re-run with --verbose and report it"
                    .to_string()
            }
            MigrateError::MissingConfigError { field } if field == "service_role_key" => {
                "Get the service role key at: Supabase Console → Settings → API Keys → service_role"
                    .to_string()
            }
            MigrateError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            MigrateError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and retry", field)
            }
            MigrateError::ConfigValidationError { field, .. } => {
                format!("Review the '{}' section of the config file", field)
            }
            MigrateError::MigrationNotFound { .. } => {
                "Check --migrations-dir and --migration-file, the path is resolved relative to the working directory"
                    .to_string()
            }
            MigrateError::RawSqlUnsupported { .. } => {
                "Apply the migration through the console SQL editor, psql, or `supabase db push`"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MigrateError::MissingConfigError { field } if field == "service_role_key" => {
                "A service role key is required".to_string()
            }
            MigrateError::RawSqlUnsupported { file } => {
                format!("Could not apply '{}' automatically", file)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
