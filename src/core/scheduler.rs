//! Cron-based scheduler that triggers watchlist scans on a fixed interval.

use std::str::FromStr;
use std::sync::Arc;

use cron::Schedule;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::core::scanner::Scanner;

/// Scheduler that runs a full scan on every cron tick.
pub struct ScanScheduler {
    scanner: Arc<Scanner>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler.
    ///
    /// # Arguments
    /// * `scanner` - The orchestrator to run on every tick
    /// * `interval_seconds` - Scan interval in seconds (0 = disabled)
    pub fn new(
        scanner: Arc<Scanner>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        // Convert the interval to a cron expression
        // (second minute hour day month weekday).
        let cron_expr = if interval_seconds >= 3600 && interval_seconds % 3600 == 0 {
            format!("0 0 */{} * * *", interval_seconds / 3600)
        } else if interval_seconds >= 60 {
            format!("0 */{} * * * *", interval_seconds / 60)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "scan scheduler created"
        );

        Ok(Self {
            scanner,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the scheduler loop.
    pub async fn start(&self) {
        let scanner = self.scanner.clone();
        let schedule = self.schedule.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("scan scheduler started, waiting for first tick");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                if let Err(e) = scanner.run_scan().await {
                    error!(error = %e, "scheduled scan failed to persist");
                }
            }
        });

        {
            let mut h = handle_arc.write().await;
            *h = Some(handle);
        }
    }

    /// Stop the scheduler.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("scan scheduler stopped");
        }
    }

    /// Check if the scheduler is running.
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
