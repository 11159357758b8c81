//! Simulation parameters supplied once per run

use super::bounds::{self, ParamRange};
use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Starting state and per-operation coefficients for a projection
///
/// Every field is optional on the wire; missing fields take the defaults
/// of the interactive input surface (20 years, 100 operations, 5% growth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of years to project (year 1 is the starting state)
    #[serde(default = "default_time_steps")]
    pub time_steps: u32,

    /// Operation count in year 1
    #[serde(default = "default_initial_operations")]
    pub initial_operations: f64,

    /// Annual compound growth of operations as a fraction (0.05 = 5%)
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,

    /// Jobs created per operation
    #[serde(default = "default_jobs_per_op")]
    pub jobs_per_op: f64,

    /// Emissions per operation
    #[serde(default = "default_emission_per_op")]
    pub emission_per_op: f64,

    /// Water use per operation
    #[serde(default = "default_water_per_op")]
    pub water_per_op: f64,

    /// Health index points lost per unit of emissions
    #[serde(default = "default_health_impact")]
    pub health_impact: f64,
}

fn default_time_steps() -> u32 { 20 }
fn default_initial_operations() -> f64 { 100.0 }
fn default_growth_rate() -> f64 { 0.05 }
fn default_jobs_per_op() -> f64 { 10.0 }
fn default_emission_per_op() -> f64 { 0.8 }
fn default_water_per_op() -> f64 { 0.5 }
fn default_health_impact() -> f64 { 0.3 }

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_steps: default_time_steps(),
            initial_operations: default_initial_operations(),
            growth_rate: default_growth_rate(),
            jobs_per_op: default_jobs_per_op(),
            emission_per_op: default_emission_per_op(),
            water_per_op: default_water_per_op(),
            health_impact: default_health_impact(),
        }
    }
}

impl SimulationConfig {
    /// Check every field against its documented range
    ///
    /// Returns the first offending field. The engine itself never calls this;
    /// shells that gather raw input are expected to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check(bounds::TIME_STEPS, f64::from(self.time_steps))?;
        check(bounds::INITIAL_OPERATIONS, self.initial_operations)?;
        check(bounds::GROWTH_RATE, self.growth_rate)?;
        check(bounds::JOBS_PER_OP, self.jobs_per_op)?;
        check(bounds::EMISSION_PER_OP, self.emission_per_op)?;
        check(bounds::WATER_PER_OP, self.water_per_op)?;
        check(bounds::HEALTH_IMPACT, self.health_impact)?;
        Ok(())
    }

    /// Cache key built from the exact bit patterns of every field
    pub(crate) fn cache_key(&self) -> [u64; 7] {
        [
            u64::from(self.time_steps),
            self.initial_operations.to_bits(),
            self.growth_rate.to_bits(),
            self.jobs_per_op.to_bits(),
            self.emission_per_op.to_bits(),
            self.water_per_op.to_bits(),
            self.health_impact.to_bits(),
        ]
    }
}

fn check(range: ParamRange, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field: range.field });
    }
    if !range.contains(value) {
        return Err(ConfigError::OutOfRange {
            field: range.field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}
