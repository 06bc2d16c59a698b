//! Capacity ledger: hours committed per worker within one allocation run.
//!
//! The ledger is the only state shared across tasks in a run. Values only
//! grow during a run; [`CapacityLedger::reset`] clears them between runs.

use std::collections::BTreeMap;

use serde::Serialize;

/// Committed hours keyed by worker name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CapacityLedger {
    committed: BTreeMap<String, f64>,
}

impl CapacityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hours committed to `worker` so far (0 if none).
    pub fn committed(&self, worker: &str) -> f64 {
        self.committed.get(worker).copied().unwrap_or(0.0)
    }

    /// Add hours to a worker's commitment.
    ///
    /// Negative amounts are ignored so the ledger stays non-decreasing.
    pub fn commit(&mut self, worker: &str, hours: f64) {
        debug_assert!(hours >= 0.0, "negative commit for {}: {}", worker, hours);
        let entry = self.committed.entry(worker.to_string()).or_insert(0.0);
        *entry += hours.max(0.0);
    }

    /// Clear every commitment.
    pub fn reset(&mut self) {
        self.committed.clear();
    }

    /// Workers with a commitment, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.committed.iter().map(|(name, hours)| (name.as_str(), *hours))
    }

    /// Number of workers with a commitment.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Sum of all commitments.
    pub fn total(&self) -> f64 {
        self.committed.values().sum()
    }
}
