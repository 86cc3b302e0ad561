// 📦 Relief Delivery - one aid shipment
//
// Carries only what it needs: the aid type (read by the record's aid
// report) and a quantity. Victim reports go out with the record's label.

use crate::reporter::{victim_message, AidSource, VictimReporter, DISASTER_LABEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefDelivery {
    aid_type: String,
    quantity: u32,
}

impl ReliefDelivery {
    pub fn new(aid_type: impl Into<String>, quantity: u32) -> Self {
        ReliefDelivery {
            aid_type: aid_type.into(),
            quantity,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// e.g. "500 units of Food"
    pub fn summary(&self) -> String {
        format!("{} units of {}", self.quantity, self.aid_type)
    }
}

impl AidSource for ReliefDelivery {
    fn aid_type(&self) -> &str {
        &self.aid_type
    }
}

impl VictimReporter for ReliefDelivery {
    fn reporter_label(&self) -> &str {
        DISASTER_LABEL
    }

    fn add_victim(&self, count: u32, sex: &str, incident_type: Option<&str>) -> String {
        let message = victim_message(self.reporter_label(), count, sex, incident_type);
        tracing::debug!(aid_type = %self.aid_type, count, sex, incident_type, "{}", message);
        message
    }
}
