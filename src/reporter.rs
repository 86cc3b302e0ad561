// 📣 Victim reporting - shared capability across records, deliveries and stations
//
// Each implementor owns its own label. Reporting never touches a tally.

/// Label used by the disaster record (and anything that reports like one)
pub const DISASTER_LABEL: &str = "Disaster Record";

/// Label used by field stations
pub const STATION_LABEL: &str = "Field Station";

/// Anything that can announce additional victims
pub trait VictimReporter {
    /// Label identifying who is reporting
    fn reporter_label(&self) -> &str;

    /// Announce `count` additional victims; returns the emitted message
    fn add_victim(&self, count: u32, sex: &str, incident_type: Option<&str>) -> String;
}

/// Something carrying a type of aid (see `DisasterRecord::request_aid_report`)
pub trait AidSource {
    fn aid_type(&self) -> &str;
}

/// Something that can be established as a station
pub trait StationSite {
    fn name(&self) -> &str;
    fn location(&self) -> &str;
}

/// Build the standard victim message for `label`
pub fn victim_message(label: &str, count: u32, sex: &str, incident_type: Option<&str>) -> String {
    let mut message = format!("Additional victims from {}: {} {}", label, count, sex);
    if let Some(incident) = incident_type {
        message.push_str(&format!(" in incident {}", incident));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victim_message_without_incident() {
        assert_eq!(
            victim_message(DISASTER_LABEL, 2, "female", None),
            "Additional victims from Disaster Record: 2 female"
        );
    }

    #[test]
    fn test_victim_message_with_incident() {
        assert_eq!(
            victim_message(STATION_LABEL, 3, "male", Some("flood")),
            "Additional victims from Field Station: 3 male in incident flood"
        );
    }
}
