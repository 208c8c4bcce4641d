//! JSON report persistence for the static dashboard.
//!
//! `latest.json` is replaced atomically (temp file + rename) so a dashboard
//! read never observes a half-written report; `history.jsonl` accumulates
//! one compact summary line per scan.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::models::report::WatchReport;

const LATEST_FILE: &str = "latest.json";
const HISTORY_FILE: &str = "history.jsonl";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One line of `history.jsonl`: enough to chart score evolution without
/// replaying full reports.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub generated_at: DateTime<Utc>,
    pub strong_buy_count: usize,
    pub totals: BTreeMap<String, f64>,
}

impl HistoryEntry {
    pub fn from_report(report: &WatchReport) -> Self {
        Self {
            generated_at: report.generated_at,
            strong_buy_count: report.strong_buy_count,
            totals: report
                .tickers
                .iter()
                .map(|t| (t.ticker.clone(), t.score.total))
                .collect(),
        }
    }
}

pub struct ReportStore {
    output_dir: PathBuf,
}

impl ReportStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn latest_path(&self) -> PathBuf {
        self.output_dir.join(LATEST_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.output_dir.join(HISTORY_FILE)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Replace `latest.json` with this report.
    pub async fn write_latest(&self, report: &WatchReport) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.output_dir).await?;
        let json = serde_json::to_vec_pretty(report)?;
        let path = self.latest_path();
        let tmp = self.output_dir.join(format!("{}.tmp", LATEST_FILE));
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &path).await?;
        debug!(path = %path.display(), bytes = json.len(), "wrote latest report");
        Ok(path)
    }

    /// Append a one-line summary of this report to the history log.
    pub async fn append_history(&self, report: &WatchReport) -> Result<(), StoreError> {
        fs::create_dir_all(&self.output_dir).await?;
        let mut line = serde_json::to_vec(&HistoryEntry::from_report(report))?;
        line.push(b'\n');
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.history_path())
            .await?;
        file.write_all(&line).await?;
        Ok(())
    }

    /// Read back the most recent report, if any scan has completed yet.
    pub async fn read_latest(&self) -> Result<Option<WatchReport>, StoreError> {
        match fs::read(self.latest_path()).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
