//! Documented input ranges for simulation parameters
//!
//! The projection engine trusts its caller; these ranges are enforced by the
//! input-gathering shells through [`SimulationConfig::validate`](super::SimulationConfig::validate).

/// Inclusive range accepted for a single parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Wire name of the parameter (as it appears in JSON configs)
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Check if a value lies within the range (inclusive at both ends)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Years to simulate
pub const TIME_STEPS: ParamRange = ParamRange::new("timeSteps", 5.0, 50.0);

/// Operation count in year 1
pub const INITIAL_OPERATIONS: ParamRange = ParamRange::new("initialOperations", 10.0, 500.0);

/// Annual growth rate as a fraction (1% to 20%)
pub const GROWTH_RATE: ParamRange = ParamRange::new("growthRate", 0.01, 0.20);

pub const JOBS_PER_OP: ParamRange = ParamRange::new("jobsPerOp", 1.0, 100.0);
pub const EMISSION_PER_OP: ParamRange = ParamRange::new("emissionPerOp", 0.1, 2.0);
pub const WATER_PER_OP: ParamRange = ParamRange::new("waterPerOp", 0.1, 2.0);
pub const HEALTH_IMPACT: ParamRange = ParamRange::new("healthImpact", 0.1, 2.0);

/// Every range, in config field order, for tests and tooling that walk all parameters
pub const ALL: [ParamRange; 7] = [
    TIME_STEPS,
    INITIAL_OPERATIONS,
    GROWTH_RATE,
    JOBS_PER_OP,
    EMISSION_PER_OP,
    WATER_PER_OP,
    HEALTH_IMPACT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        assert!(GROWTH_RATE.contains(0.01));
        assert!(GROWTH_RATE.contains(0.20));
        assert!(!GROWTH_RATE.contains(0.0));
        assert!(!GROWTH_RATE.contains(0.2001));
    }

    #[test]
    fn test_nan_is_never_contained() {
        for range in ALL {
            assert!(!range.contains(f64::NAN), "{} accepted NaN", range.field);
        }
    }
}
