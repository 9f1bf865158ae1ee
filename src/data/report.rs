//! JSON envelope written by the binaries.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::DisplayCandle;

/// `{"candles": [...]}` on success (possibly empty), `{"error": "..."}` otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Report {
    Candles { candles: Vec<DisplayCandle> },
    Error { error: String },
}

impl Report {
    pub fn from_candles(candles: Vec<DisplayCandle>) -> Self {
        Report::Candles { candles }
    }

    pub fn from_error(error: &impl fmt::Display) -> Self {
        Report::Error {
            error: error.to_string(),
        }
    }

    pub fn file_not_found(path: &Path) -> Self {
        Report::Error {
            error: format!("File not found: {}", path.display()),
        }
    }

    /// Process exit code for this report: 0 for candles (even none), 1 for errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Report::Candles { .. } => 0,
            Report::Error { .. } => 1,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize report")
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .context(format!("Failed to serialize report to: {}", path.display()))?;
        writer
            .flush()
            .context(format!("Failed to flush report to: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_envelope_shape() {
        let report = Report::from_candles(vec![DisplayCandle {
            time: 0,
            open: 75.0,
            close: 125.0,
            high: 150.0,
            low: 50.0,
        }]);
        assert_eq!(
            report.to_json(false).unwrap(),
            r#"{"candles":[{"time":0,"open":75.0,"close":125.0,"high":150.0,"low":50.0}]}"#
        );
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let report = Report::from_candles(Vec::new());
        assert_eq!(report.to_json(false).unwrap(), r#"{"candles":[]}"#);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_error_envelope_shape() {
        let report = Report::file_not_found(Path::new("charts/missing.png"));
        assert_eq!(
            report.to_json(false).unwrap(),
            r#"{"error":"File not found: charts/missing.png"}"#
        );
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_saved_report_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("chart.json");
        let report = Report::from_error(&"boom");
        report.save_to_path(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Report>(&text).unwrap(), report);
    }
}
