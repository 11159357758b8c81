//! Per-year output records and the ordered projection result

use super::{HEALTH_INDEX_BASELINE, HEALTH_INDEX_FLOOR};
use crate::config::SimulationConfig;
use serde::{Deserialize, Serialize};

/// All four metrics for a single projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    /// 1-based year index
    pub year: u32,
    pub employment: f64,
    pub emissions: f64,
    pub water_use: f64,
    /// Synthetic score in [0, 100]; 100 means no emissions
    pub health_index: f64,
}

impl YearRecord {
    /// Compute a year's metrics from its operation count
    pub fn from_operations(year: u32, operations: f64, config: &SimulationConfig) -> Self {
        let emissions = config.emission_per_op * operations;
        Self {
            year,
            employment: config.jobs_per_op * operations,
            emissions,
            water_use: config.water_per_op * operations,
            health_index: health_index(config.health_impact, emissions),
        }
    }

    /// True once emissions have driven the health index to its floor
    pub fn is_health_floored(&self) -> bool {
        self.health_index <= HEALTH_INDEX_FLOOR
    }
}

/// Health index for a level of emissions, floored at zero
pub fn health_index(health_impact: f64, emissions: f64) -> f64 {
    (HEALTH_INDEX_BASELINE - health_impact * emissions).max(HEALTH_INDEX_FLOOR)
}

/// Ordered year records for one projection run, year 1 first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationResult {
    years: Vec<YearRecord>,
}

impl SimulationResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            years: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, record: YearRecord) {
        self.years.push(record);
    }

    /// Number of projected years
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.years
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearRecord> {
        self.years.iter()
    }

    /// Record for a 1-based year, if it was projected
    pub fn year(&self, year: u32) -> Option<&YearRecord> {
        let idx = (year as usize).checked_sub(1)?;
        self.years.get(idx)
    }

    /// Last projected year
    pub fn final_year(&self) -> Option<&YearRecord> {
        self.years.last()
    }

    pub fn into_records(self) -> Vec<YearRecord> {
        self.years
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a YearRecord;
    type IntoIter = std::slice::Iter<'a, YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.years.iter()
    }
}

impl IntoIterator for SimulationResult {
    type Item = YearRecord;
    type IntoIter = std::vec::IntoIter<YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.years.into_iter()
    }
}
