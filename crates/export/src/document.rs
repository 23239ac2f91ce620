//! Timestamped export documents.
//!
//! `CsvDocument` is the file-system analog of a browser blob download: a
//! filename, a MIME type, and the body, written into a chosen directory.

use crate::error::ExportError;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// MIME type the platform serves CSV exports under.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Formats a moment as `YYYY-MM-DD_HH-MM-SS` with zero-padded components.
/// Used in export filenames to avoid collisions across repeated exports.
pub fn ts_stamp(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Builds `<subject>_<timestamp>.csv`.
pub fn export_filename(subject: &str, t: DateTime<Utc>) -> String {
    format!("{}_{}.csv", subject, ts_stamp(t))
}

/// A fully assembled CSV export, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub filename: String,
    pub mime: &'static str,
    pub body: String,
}

impl CsvDocument {
    pub fn new(filename: String, body: String) -> Self {
        Self {
            filename,
            mime: CSV_MIME,
            body,
        }
    }

    /// Writes the document into `dir` and returns the resulting path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.body)?;
        tracing::info!(path = %path.display(), bytes = self.body.len(), "CSV export written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ts_stamp_zero_pads_every_component() {
        let t = Utc.with_ymd_and_hms(2026, 3, 7, 4, 5, 9).unwrap();
        assert_eq!(ts_stamp(t), "2026-03-07_04-05-09");
    }

    #[test]
    fn export_filename_shape() {
        let t = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            export_filename("evaluations", t),
            "evaluations_2026-12-31_23-59-59.csv"
        );
    }
}
