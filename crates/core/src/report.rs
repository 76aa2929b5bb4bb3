//! Focus shelf report export.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    focus::{FocusQueue, FOCUS_CAPACITY},
    models::FocusTrack,
};

/// Snapshot of the focus shelf written by "Download Report".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Queued tracks in shelf order.
    pub tracks: Vec<FocusTrack>,
    /// Number of queued tracks.
    pub count: usize,
    /// Shelf capacity at the time of export.
    pub capacity: usize,
}

impl ShelfReport {
    /// Capture the current state of `queue`.
    pub fn from_queue(queue: &FocusQueue) -> Self {
        Self {
            generated_at: Utc::now(),
            tracks: queue.tracks().to_vec(),
            count: queue.len(),
            capacity: FOCUS_CAPACITY,
        }
    }
}

/// Writes shelf reports into a directory. Reports are never read back.
pub struct ReportWriter {
    root: PathBuf,
    prefix: String,
}

impl ReportWriter {
    /// Writer rooted at `root`; the directory is created on first export.
    /// `name` becomes the file name prefix once sanitised for the filesystem.
    pub fn new(root: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            root: root.into(),
            prefix: sanitize_component(name),
        }
    }

    /// Export `queue` as `<prefix>_<timestamp>.json` and return its path.
    pub fn export(&self, queue: &FocusQueue) -> Result<PathBuf> {
        let report = ShelfReport::from_queue(queue);
        let file_name = format!(
            "{}_{}.json",
            self.prefix,
            report.generated_at.format("%Y%m%d%H%M%S%3f")
        );
        let path = self.root.join(file_name);
        self.write_report(&path, &report)?;
        info!(path = %path.display(), count = report.count, "focus shelf report exported");
        Ok(path)
    }

    fn write_report(&self, path: &Path, report: &ShelfReport) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let serialised = serde_json::to_vec_pretty(report)?;
        fs::write(path, serialised).with_context(|| format!("failed to write {}", path.display()))
    }
}

fn sanitize_component(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_') {
            result.push(ch);
        }
    }
    if result.is_empty() {
        "report".to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn shelf() -> FocusQueue {
        let mut queue = FocusQueue::new();
        queue.add(FocusTrack::new("b1", "Summer Nights", "Luna Wave"));
        queue.add(FocusTrack::new("r2", "Broken Glass", "Echo Valley"));
        queue
    }

    #[test]
    fn export_writes_parsable_json() -> Result<()> {
        let dir = tempdir()?;
        let writer = ReportWriter::new(dir.path().join("reports"), "focus-shelf");
        let path = writer.export(&shelf())?;
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));

        let value: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["count"], 2);
        assert_eq!(value["capacity"], 10);
        assert_eq!(value["tracks"][1]["id"], "r2");
        assert!(value["generated_at"].is_string());
        Ok(())
    }

    #[test]
    fn empty_shelf_still_exports() -> Result<()> {
        let dir = tempdir()?;
        let writer = ReportWriter::new(dir.path(), "focus-shelf");
        let path = writer.export(&FocusQueue::new())?;
        let report: ShelfReport = serde_json::from_str(&fs::read_to_string(path)?)?;
        assert_eq!(report.count, 0);
        assert!(report.tracks.is_empty());
        Ok(())
    }

    #[test]
    fn configured_name_is_sanitised() -> Result<()> {
        let dir = tempdir()?;
        let writer = ReportWriter::new(dir.path(), "../My Shelf: Q3!");
        let path = writer.export(&shelf())?;
        assert_eq!(path.parent(), Some(dir.path()));
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        assert!(file_name.starts_with("MyShelfQ3_"), "{file_name}");
        assert!(file_name.ends_with(".json"));
        Ok(())
    }

    #[test]
    fn sanitize_falls_back_when_nothing_survives() {
        assert_eq!(sanitize_component("?? //"), "report");
        assert_eq!(sanitize_component("week_42-final"), "week_42-final");
    }
}
