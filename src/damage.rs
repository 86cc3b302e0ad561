// 🏚️ Damage Assessment - free-text damage descriptor
//
// The derived percentage is computed from the CHARACTER LENGTH of the
// stored descriptor divided by the victim count. It is not a real damage
// metric. Existing exported reports were produced with this formula.

use serde::{Deserialize, Serialize};

/// Trailing phrase appended to every recorded damage percentage
pub const DAMAGE_PHRASE: &str = "damage in the disaster area. Damage detail unknown.";

/// Returned by `summary` when there are no victims to divide by
pub const NO_DAMAGE_INFO: &str = "No damage information available.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageAssessment {
    descriptor: String,
}

impl DamageAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the descriptor with a sentence embedding `value` (two decimals)
    pub fn record_damage_percentage(&mut self, value: f64) {
        self.descriptor = format!("{:.2}% {}", value, DAMAGE_PHRASE);
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn is_recorded(&self) -> bool {
        !self.descriptor.is_empty()
    }

    /// Derived damage sentence: `len(descriptor) / total_victims * 100`
    pub fn summary(&self, total_victims: u64) -> String {
        if total_victims == 0 {
            return NO_DAMAGE_INFO.to_string();
        }

        let percentage = self.descriptor.chars().count() as f64 / total_victims as f64 * 100.0;
        format!("{:.2}% {}", percentage, DAMAGE_PHRASE)
    }

    /// Leading number of the descriptor, `0.0` when nothing was recorded
    pub fn recorded_percentage(&self) -> f64 {
        if !self.is_recorded() {
            return 0.0;
        }

        self.descriptor
            .split('%')
            .next()
            .and_then(|lead| lead.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}
