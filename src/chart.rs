// 📊 Chart data - casualty counters shaped for plotting
//
// Sinks receive {sex: [deaths, injured]} and decide how to draw it.

use crate::casualty::{CasualtyTally, Sex};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CHART_TITLE: &str = "Disaster Data Visualization";

/// Deaths and injured per sex, in `Sex` order (Male, Female)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub by_sex: BTreeMap<Sex, [u32; 2]>,
}

impl ChartData {
    pub fn from_tally(tally: &CasualtyTally) -> Self {
        let by_sex = Sex::all()
            .into_iter()
            .map(|sex| (sex, [tally.deaths(sex), tally.injured(sex)]))
            .collect();
        ChartData { by_sex }
    }

    /// Category labels for the x axis
    pub fn categories(&self) -> Vec<&'static str> {
        self.by_sex.keys().map(|sex| sex.as_str()).collect()
    }

    pub fn deaths_series(&self) -> Vec<u32> {
        self.by_sex.values().map(|pair| pair[0]).collect()
    }

    pub fn injured_series(&self) -> Vec<u32> {
        self.by_sex.values().map(|pair| pair[1]).collect()
    }

    /// Largest stacked value (deaths + injured for one sex)
    pub fn max_stacked(&self) -> u64 {
        self.by_sex
            .values()
            .map(|pair| u64::from(pair[0]) + u64::from(pair[1]))
            .max()
            .unwrap_or(0)
    }
}

/// Destination that renders casualty charts
pub trait ChartSink {
    fn render(&mut self, title: &str, data: &ChartData) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tally() -> CasualtyTally {
        let mut tally = CasualtyTally::new();
        tally.add_fatalities(5, "male");
        tally.add_fatalities(4, "female");
        tally.add_injuries(12, "male");
        tally.add_injuries(8, "female");
        tally
    }

    #[test]
    fn test_chart_data_shape() {
        let data = ChartData::from_tally(&sample_tally());

        assert_eq!(data.by_sex.get(&Sex::Male), Some(&[5, 12]));
        assert_eq!(data.by_sex.get(&Sex::Female), Some(&[4, 8]));
        assert_eq!(data.categories(), vec!["Male", "Female"]);
    }

    #[test]
    fn test_series_follow_category_order() {
        let data = ChartData::from_tally(&sample_tally());
        assert_eq!(data.deaths_series(), vec![5, 4]);
        assert_eq!(data.injured_series(), vec![12, 8]);
        assert_eq!(data.max_stacked(), 17);
    }

    #[test]
    fn test_empty_tally_charts_zeros() {
        let data = ChartData::from_tally(&CasualtyTally::new());
        assert_eq!(data.deaths_series(), vec![0, 0]);
        assert_eq!(data.max_stacked(), 0);
    }
}
