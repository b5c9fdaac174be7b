//! Snapshot file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;

use mastr_model::Period;

use crate::error::{IngestError, Result};

/// A snapshot file together with the period named by its file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    pub period: Period,
    pub path: PathBuf,
}

/// Lists all JSON files in a directory, sorted by filename.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Check for .json extension (case-insensitive)
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Discovers period snapshots (`<YYYY-MM>.json`) in chronological order.
///
/// JSON files whose stem is not a period are skipped with a warning.
pub fn discover_snapshots(dir: &Path) -> Result<Vec<SnapshotFile>> {
    let mut snapshots = Vec::new();
    for path in list_json_files(dir)? {
        let stem = path
            .file_stem()
            .and_then(|v| v.to_str())
            .unwrap_or("");
        match stem.parse::<Period>() {
            Ok(period) => snapshots.push(SnapshotFile { period, path }),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping file without a period name");
            }
        }
    }
    snapshots.sort_by_key(|snapshot| snapshot.period);
    Ok(snapshots)
}
