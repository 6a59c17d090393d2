use clap::Parser;
use supa_migrate::domain::ports::ConfigProvider;
use supa_migrate::utils::{logger, validation::Validate};
use supa_migrate::{CliConfig, GuidedRunner, LocalMigrationStore, MigrateEngine, MigrateError, ProjectConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting supa-migrate CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;

    match cli.config.clone() {
        Some(config_path) => {
            let project = match ProjectConfig::from_file(&config_path) {
                Ok(project) => project,
                Err(e) => {
                    tracing::error!("❌ Could not load config file: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            run(project, monitor_enabled).await;
        }
        None => run(cli, monitor_enabled).await,
    }

    Ok(())
}

async fn run<C>(config: C, monitor_enabled: bool)
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        if matches!(e, MigrateError::MissingConfigError { .. }) {
            eprintln!("Usage: supa-migrate <SERVICE_ROLE_KEY> [OPTIONS]");
        }
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let store = LocalMigrationStore::new(config.migrations_dir());
    let runner = GuidedRunner::new(store, config);
    let engine = MigrateEngine::new_with_monitoring(runner, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Migration applied successfully!");
            println!("✅ Migration applied: {}", report.file_name);
        }
        Err(e) => {
            tracing::error!(
                "❌ Migration run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                supa_migrate::utils::error::ErrorSeverity::Low => 0,
                supa_migrate::utils::error::ErrorSeverity::Medium => 2,
                supa_migrate::utils::error::ErrorSeverity::High => 1,
                supa_migrate::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
