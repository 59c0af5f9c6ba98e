//! Reading dataset files and writing exports.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{LabelError, Result};

/// Name used for exports when the session has no file name.
pub const DEFAULT_EXPORT_BASE: &str = "labeled_data";

/// A dataset file read from disk, not yet validated.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name without path.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Raw file text.
    pub content: String,
}

impl SourceFile {
    /// Read a dataset file. Only files whose type is JSON are accepted.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !is_json_path(path) {
            return Err(LabelError::UnsupportedFormat(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|source| LabelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(file = %name, bytes = content.len(), "Read dataset file");

        Ok(Self {
            name,
            path: path.to_path_buf(),
            size_bytes: content.len() as u64,
            content,
        })
    }

    /// Human-readable size, e.g. `1.5 KB`.
    pub fn formatted_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

/// Whether the file name's type is JSON.
pub fn is_json_path(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .is_some_and(|mime| mime == mime_guess::mime::APPLICATION_JSON)
}

/// Format a byte count with base-1024 units and at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Export file name: `{base}_labeled_{YYYY-MM-DDTHH-MM-SS}.json`.
///
/// `base` is the source name with its first `.json` removed, or
/// [`DEFAULT_EXPORT_BASE`] when nothing is left.
pub fn export_file_name(file_name: &str, now: DateTime<Utc>) -> String {
    let base = file_name.replacen(".json", "", 1);
    let base = if base.is_empty() {
        DEFAULT_EXPORT_BASE
    } else {
        base.as_str()
    };
    format!("{}_labeled_{}.json", base, now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Write export text into `dir` under `file_name`, creating `dir` if needed.
pub fn write_export(dir: impl AsRef<Path>, file_name: &str, text: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();

    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| LabelError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = dir.join(file_name);
    fs::write(&path, text).map_err(|source| LabelError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(102_400), "100 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            export_file_name("snli_dev.json", now),
            "snli_dev_labeled_2024-03-09T14-05-07.json"
        );
        assert_eq!(
            export_file_name("", now),
            "labeled_data_labeled_2024-03-09T14-05-07.json"
        );
        assert_eq!(
            export_file_name(".json", now),
            "labeled_data_labeled_2024-03-09T14-05-07.json"
        );
        assert_eq!(
            export_file_name("a.json.json", now),
            "a.json_labeled_2024-03-09T14-05-07.json"
        );
    }

    #[test]
    fn test_json_type_check() {
        assert!(is_json_path(Path::new("data/pairs.json")));
        assert!(is_json_path(Path::new("PAIRS.JSON")));
        assert!(!is_json_path(Path::new("pairs.csv")));
        assert!(!is_json_path(Path::new("pairs")));
    }
}
