// ⛺ Field Station - coordination post with its own victim reporting

use crate::reporter::{victim_message, StationSite, VictimReporter, STATION_LABEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStation {
    station_name: String,
    station_location: String,
}

impl FieldStation {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        FieldStation {
            station_name: name.into(),
            station_location: location.into(),
        }
    }

    /// Post a free-form information line for this station
    pub fn post_info(&self, info: &str) -> String {
        let message = format!("Field station information: {}", info);
        tracing::debug!(station = %self.station_name, "{}", message);
        message
    }
}

impl StationSite for FieldStation {
    fn name(&self) -> &str {
        &self.station_name
    }

    fn location(&self) -> &str {
        &self.station_location
    }
}

impl VictimReporter for FieldStation {
    fn reporter_label(&self) -> &str {
        STATION_LABEL
    }

    /// Station-scoped message; no counters exist here to update
    fn add_victim(&self, count: u32, sex: &str, incident_type: Option<&str>) -> String {
        let message = victim_message(self.reporter_label(), count, sex, incident_type);
        tracing::debug!(station = %self.station_name, count, sex, incident_type, "{}", message);
        message
    }
}
