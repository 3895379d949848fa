// SPDX-License-Identifier: MPL-2.0
//! Report export for collected diagnostic events.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEvent;

/// Snapshot of the collector written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub crate_version: String,
    pub collection_started_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
    pub event_count: usize,
    /// Events lost to buffer overflow before this report was built.
    pub overwritten_events: u64,
    pub events: Vec<DiagnosticEvent>,
}

/// Generates a timestamped default filename for a report.
///
/// Format: `admin_feedback_diagnostics_YYYYMMDD_HHMMSS.json`
///
/// Uses local time for user-friendly filenames.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "admin_feedback_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes content to a file atomically.
///
/// Uses a temporary file with `.tmp` extension, then renames to the final path.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Returns the default directory for saving diagnostic reports.
///
/// Uses the user's Documents folder if available, otherwise falls back
/// to the current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_default_filename_has_correct_format() {
        let filename = generate_default_filename();

        assert!(filename.starts_with("admin_feedback_diagnostics_"));
        assert!(filename.ends_with(".json"));
        // prefix (27) + YYYYMMDD_HHMMSS (15) + .json (5)
        assert_eq!(filename.len(), 47);
    }

    #[test]
    fn write_atomic_replaces_content_and_leaves_no_temp_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("report.json");

        write_atomic(&path, "{\"a\":1}").expect("first write");
        write_atomic(&path, "{\"a\":2}").expect("second write");

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":2}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn write_atomic_fails_for_missing_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing").join("report.json");

        assert!(write_atomic(&path, "{}").is_err());
    }
}
