// 🌋 Disaster Record - one disaster event and its casualty state
//
// "Name is a VALUE (can change), id is IDENTITY (never changes)"
//
// The record owns exactly one casualty tally and one damage assessment.
// Total victims is always derived from the tally, never stored.

use crate::casualty::{CasualtyTally, Sex};
use crate::chart::{ChartData, ChartSink};
use crate::damage::DamageAssessment;
use crate::report::{save_row, ReportFormat, ReportRow, ReportSink};
use crate::reporter::{victim_message, AidSource, StationSite, VictimReporter, DISASTER_LABEL};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{BufRead, Write};
use std::path::Path;

/// Timestamp layout used in snapshots and reports
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Input line that ends an interactive rename
pub const RENAME_SENTINEL: &str = "done";

/// Sex tag used when a caller has no better one
pub const DEFAULT_SEX: &str = "male";

pub const GOVERNMENT_NOTICE: &str =
    "The local government is providing direct assistance to disaster victims.";

pub const NO_VICTIMS_NOTICE: &str = "There are no victims. Damage must be addressed directly.";

/// Point-in-time copy of a record's reportable fields (insertion-ordered)
pub type RecordSnapshot = Map<String, Value>;

// ============================================================================
// DISASTER RECORD
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterRecord {
    /// Stable identity (UUID) - survives renames
    id: String,

    name: String,

    /// Fixed at construction
    location: String,

    created_at: DateTime<Local>,

    tally: CasualtyTally,

    damage: DamageAssessment,
}

impl DisasterRecord {
    /// Create a record stamped with the current time
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::with_created_at(name, location, Local::now())
    }

    pub fn with_created_at(
        name: impl Into<String>,
        location: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        DisasterRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            location: location.into(),
            created_at,
            tally: CasualtyTally::new(),
            damage: DamageAssessment::new(),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn tally(&self) -> &CasualtyTally {
        &self.tally
    }

    pub fn damage(&self) -> &DamageAssessment {
        &self.damage
    }

    // ========================================================================
    // ACCUMULATION
    // ========================================================================

    pub fn add_fatalities(&mut self, count: u32, sex: &str) {
        self.tally.add_fatalities(count, sex);
    }

    pub fn add_injuries(&mut self, count: u32, sex: &str) {
        self.tally.add_injuries(count, sex);
    }

    pub fn total_victims(&self) -> u64 {
        self.tally.total()
    }

    // ========================================================================
    // DAMAGE
    // ========================================================================

    pub fn record_damage_percentage(&mut self, value: f64) {
        self.damage.record_damage_percentage(value);
        tracing::info!(record = %self.name, value, "damage percentage recorded");
    }

    pub fn damage_summary(&self) -> String {
        self.damage.summary(self.total_victims())
    }

    // ========================================================================
    // RENAME
    // ========================================================================

    /// Replace the record's name. Identity is unchanged.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        tracing::info!(id = %self.id, from = %self.name, to = %new_name, "record renamed");
        self.name = new_name;
    }

    /// Prompt on `output` and read names from `input` until "done"
    pub fn rename_interactive<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        self.rename_until(input, output, RENAME_SENTINEL)
    }

    /// Interactive rename with a custom sentinel (case-insensitive).
    /// End of input stops the loop the same way the sentinel does.
    pub fn rename_until<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        sentinel: &str,
    ) -> Result<()> {
        let sentinel = sentinel.to_lowercase();

        loop {
            write!(
                output,
                "Enter a new disaster name (or type '{}' to keep the current one): ",
                sentinel
            )
            .context("Failed to write rename prompt")?;
            output.flush().context("Failed to flush rename prompt")?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read new disaster name")?;
            if read == 0 {
                break;
            }

            let new_name = line.trim_end_matches(&['\r', '\n'][..]);
            if new_name.to_lowercase() == sentinel {
                break;
            }

            self.rename(new_name);
            writeln!(output, "Disaster name changed to '{}'.", new_name)
                .context("Failed to write rename confirmation")?;
        }

        Ok(())
    }

    // ========================================================================
    // SNAPSHOT / MERGE
    // ========================================================================

    /// Fresh copy of the reportable fields
    pub fn snapshot(&self) -> RecordSnapshot {
        let mut snapshot = Map::new();
        snapshot.insert("name".to_string(), Value::from(self.name.clone()));
        snapshot.insert("location".to_string(), Value::from(self.location.clone()));
        snapshot.insert(
            "created_at".to_string(),
            Value::from(self.created_at.format(DATE_FORMAT).to_string()),
        );
        snapshot.insert("deaths_male".to_string(), Value::from(self.tally.deaths(Sex::Male)));
        snapshot.insert("deaths_female".to_string(), Value::from(self.tally.deaths(Sex::Female)));
        snapshot.insert("injured_male".to_string(), Value::from(self.tally.injured(Sex::Male)));
        snapshot.insert("injured_female".to_string(), Value::from(self.tally.injured(Sex::Female)));
        snapshot.insert(
            "damage_descriptor".to_string(),
            Value::from(self.damage.descriptor().to_string()),
        );
        snapshot
    }

    /// Snapshot overlaid with `extra`: same-named keys are replaced in place,
    /// new keys are appended in the order given.
    pub fn merge_extra<I, K, V>(&self, extra: I) -> RecordSnapshot
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut merged = self.snapshot();
        for (key, value) in extra {
            merged.insert(key.into(), value.into());
        }
        merged
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    /// The single structured row handed to report sinks
    pub fn report_row(&self) -> ReportRow {
        ReportRow {
            name: self.name.clone(),
            location: self.location.clone(),
            date: self.created_at.format(DATE_FORMAT).to_string(),
            deaths_male: self.tally.deaths(Sex::Male),
            deaths_female: self.tally.deaths(Sex::Female),
            injured_male: self.tally.injured(Sex::Male),
            injured_female: self.tally.injured(Sex::Female),
            damage_percent: self.damage.recorded_percentage(),
        }
    }

    pub fn export_report<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        sink.write_row(&self.report_row())
            .with_context(|| format!("Failed to export report for {}", self.name))
    }

    /// Write the report row to a file
    pub fn save_report(&self, path: &Path, format: ReportFormat) -> Result<()> {
        save_row(path, format, &self.report_row())
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData::from_tally(&self.tally)
    }

    pub fn show_chart<S: ChartSink + ?Sized>(&self, sink: &mut S, title: &str) -> Result<()> {
        sink.render(title, &self.chart_data())
    }

    // ========================================================================
    // COORDINATION MESSAGES
    // ========================================================================

    /// Announce aid of `delivery`'s type, or that there is nobody to deliver to
    pub fn request_aid_report<A: AidSource + ?Sized>(&self, delivery: &A) -> String {
        let message = if self.total_victims() > 0 {
            format!(
                "Aid of type {} is being delivered to disaster victims.",
                delivery.aid_type()
            )
        } else {
            NO_VICTIMS_NOTICE.to_string()
        };
        tracing::debug!(record = %self.name, aid_type = delivery.aid_type(), "{}", message);
        message
    }

    pub fn government_response_notice(&self) -> String {
        tracing::debug!("{}", GOVERNMENT_NOTICE);
        GOVERNMENT_NOTICE.to_string()
    }

    /// Announce that `station` has been set up (uses the station's own name)
    pub fn establish_station<S: StationSite + ?Sized>(&self, station: &S) -> String {
        let message = format!(
            "Disaster field station {} has been established at {} for coordination and response.",
            station.name(),
            station.location()
        );
        tracing::debug!(record = %self.name, station = station.name(), "{}", message);
        message
    }
}

impl VictimReporter for DisasterRecord {
    fn reporter_label(&self) -> &str {
        DISASTER_LABEL
    }

    /// Message only; counters are untouched
    fn add_victim(&self, count: u32, sex: &str, incident_type: Option<&str>) -> String {
        let message = victim_message(self.reporter_label(), count, sex, incident_type);
        tracing::debug!(record = %self.name, count, sex, incident_type, "{}", message);
        message
    }
}

// ============================================================================
// TESTS
// ============================================================================
