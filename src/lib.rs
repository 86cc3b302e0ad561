// Disaster Record - Core Library
// Exposes the record model, report export and chart data for the driver and tests

pub mod casualty;
pub mod damage;
pub mod reporter;
pub mod report;
pub mod chart;
pub mod config;
pub mod entities;

// Only compile the terminal chart when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use casualty::{CasualtyTally, Sex};
pub use damage::{DamageAssessment, DAMAGE_PHRASE, NO_DAMAGE_INFO};
pub use reporter::{AidSource, StationSite, VictimReporter, DISASTER_LABEL, STATION_LABEL};
pub use report::{
    save_row, CsvSink, ReportFormat, ReportRow, ReportSink, TabulatedSink, REPORT_COLUMNS,
};
pub use chart::{ChartData, ChartSink, DEFAULT_CHART_TITLE};
pub use config::DriverConfig;
pub use entities::{DisasterRecord, FieldStation, RecordSnapshot, ReliefDelivery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
