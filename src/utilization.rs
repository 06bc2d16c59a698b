//! Worker utilization summary.

use std::fmt;

use serde::Serialize;

use crate::ledger::CapacityLedger;

/// Load band for a worker's utilization percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Above 100%.
    Overloaded,
    /// Above 80%.
    HighLoad,
    /// Above 50%.
    Normal,
    LightLoad,
}

impl LoadStatus {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 100.0 {
            LoadStatus::Overloaded
        } else if percent > 80.0 {
            LoadStatus::HighLoad
        } else if percent > 50.0 {
            LoadStatus::Normal
        } else {
            LoadStatus::LightLoad
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Overloaded => "overloaded",
            LoadStatus::HighLoad => "high_load",
            LoadStatus::Normal => "normal",
            LoadStatus::LightLoad => "light_load",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One worker's share of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationEntry {
    pub name: String,
    pub committed_hours: f64,
    pub utilization_percent: f64,
    pub status: LoadStatus,
}

/// Utilization for every worker in the ledger, sorted by name.
pub fn summarize(ledger: &CapacityLedger, capacity_per_worker: f64) -> Vec<UtilizationEntry> {
    ledger
        .iter()
        .map(|(name, hours)| {
            let percent = hours / capacity_per_worker * 100.0;
            UtilizationEntry {
                name: name.to_string(),
                committed_hours: hours,
                utilization_percent: percent,
                status: LoadStatus::from_percent(percent),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bands_are_strict() {
        assert_eq!(LoadStatus::from_percent(100.5), LoadStatus::Overloaded);
        assert_eq!(LoadStatus::from_percent(100.0), LoadStatus::HighLoad);
        assert_eq!(LoadStatus::from_percent(80.0), LoadStatus::Normal);
        assert_eq!(LoadStatus::from_percent(50.0), LoadStatus::LightLoad);
        assert_eq!(LoadStatus::from_percent(0.0), LoadStatus::LightLoad);
    }

    #[test]
    fn test_summarize_sorted_by_name() {
        let mut ledger = CapacityLedger::new();
        ledger.commit("Zoe", 40.0);
        ledger.commit("Alice", 180.0);
        ledger.commit("Mia", 136.0);

        let summary = summarize(&ledger, 160.0);
        let names: Vec<&str> = summary.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Mia", "Zoe"]);

        assert_eq!(summary[0].utilization_percent, 112.5);
        assert_eq!(summary[0].status, LoadStatus::Overloaded);
        assert_eq!(summary[1].utilization_percent, 85.0);
        assert_eq!(summary[1].status, LoadStatus::HighLoad);
        assert_eq!(summary[2].utilization_percent, 25.0);
        assert_eq!(summary[2].status, LoadStatus::LightLoad);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&LoadStatus::HighLoad).unwrap();
        assert_eq!(json, "\"high_load\"");
        assert_eq!(LoadStatus::LightLoad.to_string(), "light_load");
    }
}
