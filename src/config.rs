// ⚙️ Driver configuration
//
// Optional JSON file; every field has a default so `{}` is a valid config.
// Only the binary reads this. The library types never look at it.

use crate::chart::DEFAULT_CHART_TITLE;
use crate::entities::record::RENAME_SENTINEL;
use crate::report::ReportFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Where the exported report is written
    pub report_path: PathBuf,

    pub report_format: ReportFormat,

    /// Line that ends the interactive rename loop
    pub rename_sentinel: String,

    pub chart_title: String,

    /// Open the terminal chart at the end of the run
    pub show_chart: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            report_path: PathBuf::from("disaster_report.txt"),
            report_format: ReportFormat::Plain,
            rename_sentinel: RENAME_SENTINEL.to_string(),
            chart_title: DEFAULT_CHART_TITLE.to_string(),
            show_chart: true,
        }
    }
}

impl DriverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid driver config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = DriverConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DriverConfig::default());
        assert_eq!(config.rename_sentinel, "done");
        assert_eq!(config.report_format, ReportFormat::Plain);
        assert!(config.show_chart);
    }

    #[test]
    fn test_partial_override() {
        let config = DriverConfig::from_json_str(
            r#"{"report_path": "out/bencana.csv", "report_format": "csv", "show_chart": false}"#,
        )
        .unwrap();

        assert_eq!(config.report_path, PathBuf::from("out/bencana.csv"));
        assert_eq!(config.report_format, ReportFormat::Csv);
        assert!(!config.show_chart);
        assert_eq!(config.chart_title, DEFAULT_CHART_TITLE);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = DriverConfig::from_json_str(r#"{"report_format": "xlsx"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid driver config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("no_such_config_{}.json", uuid::Uuid::new_v4()));
        assert!(DriverConfig::load(&path).is_err());
        assert_eq!(DriverConfig::load_or_default(None).unwrap(), DriverConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("driver_config_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{"chart_title": "Flood 2024"}"#).unwrap();

        let config = DriverConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.chart_title, "Flood 2024");

        std::fs::remove_file(&path).unwrap();
    }
}
