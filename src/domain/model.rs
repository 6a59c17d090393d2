use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A migration file resolved on disk, before its SQL is loaded.
///
/// The version is taken from the leading timestamp of the filename
/// (`20251114_create_member_tables.sql`); files without a timestamp prefix
/// are still valid migrations, they just carry no version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Migration {
    pub path: PathBuf,
    pub file_name: String,
    pub version: Option<NaiveDateTime>,
    pub name: String,
}

impl Migration {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let stem = file_name.strip_suffix(".sql").unwrap_or(&file_name);
        let (version, name) = match stem.split_once('_') {
            Some((prefix, rest)) => match parse_version(prefix) {
                Some(version) => (Some(version), rest.to_string()),
                None => (None, stem.to_string()),
            },
            None => (parse_version(stem), stem.to_string()),
        };

        Self {
            path,
            file_name,
            version,
            name,
        }
    }
}

/// Supabase migrations are stamped either `YYYYMMDD` or `YYYYMMDDHHMMSS`.
fn parse_version(prefix: &str) -> Option<NaiveDateTime> {
    if !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match prefix.len() {
        14 => NaiveDateTime::parse_from_str(prefix, "%Y%m%d%H%M%S").ok(),
        8 => NaiveDate::parse_from_str(prefix, "%Y%m%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0)),
        _ => None,
    }
}

/// A migration together with its loaded SQL text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationScript {
    pub migration: Migration,
    pub sql: String,
    pub bytes: usize,
    pub statements: usize,
}

impl MigrationScript {
    pub fn new(migration: Migration, sql: String) -> Self {
        let bytes = sql.len();
        let statements = count_statements(&sql);
        Self {
            migration,
            sql,
            bytes,
            statements,
        }
    }
}

/// Counts semicolon-terminated statements, skipping `--` line comments.
/// This is a display figure only, not a SQL parse.
fn count_statements(sql: &str) -> usize {
    sql.lines()
        .map(|line| match line.find("--") {
            Some(idx) => &line[..idx],
            None => line,
        })
        .map(|code| code.matches(';').count())
        .sum()
}

/// The routes that do work for applying raw SQL to a hosted project.
pub const APPLY_ALTERNATIVES: [&str; 3] = [
    "Supabase Console → SQL Editor → paste the SQL → Run",
    "Run psql directly against the database from your terminal",
    "Use the Supabase CLI: supabase db push",
];

/// Outcome of an apply attempt. `applied` stays false for every run today:
/// the REST surface cannot execute raw SQL, so the report only carries the
/// script summary and the alternative instructions.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    pub file_name: String,
    pub bytes: usize,
    pub statements: usize,
    pub applied: bool,
    pub alternatives: Vec<String>,
}
