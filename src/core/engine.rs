use crate::core::{ApplyReport, Result, Runner};
use crate::utils::error::MigrateError;
use crate::utils::monitor::SystemMonitor;

pub struct MigrateEngine<R: Runner> {
    runner: R,
    monitor: SystemMonitor,
}

impl<R: Runner> MigrateEngine<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(runner: R, monitor_enabled: bool) -> Self {
        Self {
            runner,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<ApplyReport> {
        println!("Starting migration run...");

        // Discover
        println!("Discovering migrations...");
        let migrations = self.runner.discover().await?;
        println!("Discovered {} migration(s)", migrations.len());
        self.monitor.log_stats("Discover");

        // Read
        println!("Reading SQL...");
        let scripts = self.runner.read(migrations).await?;
        println!("Read {} script(s)", scripts.len());
        self.monitor.log_stats("Read");

        // Apply
        println!("Applying...");
        let report = self.runner.apply(scripts).await?;
        self.monitor.log_stats("Apply");
        self.monitor.log_final_stats();

        tracing::debug!("Run report: {}", serde_json::to_string_pretty(&report)?);

        if !report.applied {
            return Err(MigrateError::RawSqlUnsupported {
                file: report.file_name.clone(),
            });
        }

        Ok(report)
    }
}
