// 🩹 Casualty Tally - deaths and injuries by sex
//
// Four counters, only ever added to. Sex tags arrive as free text from
// callers; anything that isn't "male" or "female" is dropped on the floor
// without touching the counters.

use serde::{Deserialize, Serialize};

// ============================================================================
// SEX
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a sex tag (case-insensitive). Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Sex> {
        match tag.to_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    /// Both sexes in display order
    pub fn all() -> [Sex; 2] {
        [Sex::Male, Sex::Female]
    }
}

// ============================================================================
// CASUALTY TALLY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualtyTally {
    deaths_male: u32,
    deaths_female: u32,
    injured_male: u32,
    injured_female: u32,
}

impl CasualtyTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` deaths for the given sex tag
    pub fn add_fatalities(&mut self, count: u32, sex: &str) {
        match Sex::parse(sex) {
            Some(Sex::Male) => self.deaths_male = self.deaths_male.saturating_add(count),
            Some(Sex::Female) => self.deaths_female = self.deaths_female.saturating_add(count),
            None => tracing::debug!(sex, count, "ignoring fatalities with unrecognized sex tag"),
        }
    }

    /// Add `count` injuries for the given sex tag
    pub fn add_injuries(&mut self, count: u32, sex: &str) {
        match Sex::parse(sex) {
            Some(Sex::Male) => self.injured_male = self.injured_male.saturating_add(count),
            Some(Sex::Female) => self.injured_female = self.injured_female.saturating_add(count),
            None => tracing::debug!(sex, count, "ignoring injuries with unrecognized sex tag"),
        }
    }

    pub fn deaths(&self, sex: Sex) -> u32 {
        match sex {
            Sex::Male => self.deaths_male,
            Sex::Female => self.deaths_female,
        }
    }

    pub fn injured(&self, sex: Sex) -> u32 {
        match sex {
            Sex::Male => self.injured_male,
            Sex::Female => self.injured_female,
        }
    }

    /// Sum of all four counters
    pub fn total(&self) -> u64 {
        [
            self.deaths_male,
            self.deaths_female,
            self.injured_male,
            self.injured_female,
        ]
        .iter()
        .map(|&c| u64::from(c))
        .sum()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parse() {
        assert_eq!(Sex::parse("male"), Some(Sex::Male));
        assert_eq!(Sex::parse("FEMALE"), Some(Sex::Female));
        assert_eq!(Sex::parse(" Male "), None);
        assert_eq!(Sex::parse("other"), None);
        assert_eq!(Sex::parse(""), None);
    }

    #[test]
    fn test_new_tally_is_zero() {
        let tally = CasualtyTally::new();
        assert_eq!(tally.total(), 0);
        for sex in Sex::all() {
            assert_eq!(tally.deaths(sex), 0);
            assert_eq!(tally.injured(sex), 0);
        }
    }

    #[test]
    fn test_accumulation_targets_matching_counter() {
        let mut tally = CasualtyTally::new();
        tally.add_fatalities(5, "male");
        tally.add_fatalities(3, "Female");
        tally.add_injuries(12, "MALE");
        tally.add_injuries(8, "female");

        assert_eq!(tally.deaths(Sex::Male), 5);
        assert_eq!(tally.deaths(Sex::Female), 3);
        assert_eq!(tally.injured(Sex::Male), 12);
        assert_eq!(tally.injured(Sex::Female), 8);
        assert_eq!(tally.total(), 28);
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut a = CasualtyTally::new();
        a.add_fatalities(1, "male");
        a.add_fatalities(2, "female");
        a.add_injuries(3, "male");
        a.add_injuries(4, "female");

        let mut b = CasualtyTally::new();
        b.add_injuries(4, "female");
        b.add_injuries(3, "male");
        b.add_fatalities(2, "female");
        b.add_fatalities(1, "male");

        assert_eq!(a.total(), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unrecognized_sex_is_ignored() {
        let mut tally = CasualtyTally::new();
        tally.add_fatalities(2, "male");
        let before = tally.clone();

        tally.add_fatalities(7, "unknown");
        tally.add_injuries(9, "laki-laki");
        tally.add_injuries(1, "");

        assert_eq!(tally, before);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_padded_sex_tags_are_not_recognized() {
        let mut tally = CasualtyTally::new();
        tally.add_fatalities(4, " male");
        tally.add_injuries(2, "female\t");

        assert_eq!(tally.total(), 0);
        assert_eq!(tally, CasualtyTally::new());
    }

    #[test]
    fn test_adding_zero_changes_nothing() {
        let mut tally = CasualtyTally::new();
        tally.add_fatalities(0, "male");
        tally.add_injuries(0, "female");
        assert_eq!(tally, CasualtyTally::new());
    }

    #[test]
    fn test_counters_saturate_instead_of_wrapping() {
        let mut tally = CasualtyTally::new();
        tally.add_fatalities(u32::MAX, "male");
        tally.add_fatalities(10, "male");
        assert_eq!(tally.deaths(Sex::Male), u32::MAX);
        assert_eq!(tally.total(), u64::from(u32::MAX));
    }
}
