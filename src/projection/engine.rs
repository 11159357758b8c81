//! Core projection engine
//!
//! Each year's metrics are recorded from the operation count at the start of
//! that year; growth is applied afterwards. Year 1 therefore always reflects
//! the initial operation count, and year N reflects
//! `initial_operations * (1 + growth_rate)^(N - 1)`.

use super::{ProjectionState, SimulationResult, YearRecord};
use crate::config::SimulationConfig;
use log::{debug, trace};

/// Projection engine bound to one set of parameters
///
/// Holds no state between runs; `project` can be called any number of times
/// and returns the same result each time.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: SimulationConfig,
}

impl ProjectionEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the projection over `time_steps` years
    pub fn project(&self) -> SimulationResult {
        let config = &self.config;
        let mut result = SimulationResult::with_capacity(config.time_steps as usize);
        let mut state = ProjectionState::initial(config.initial_operations);

        for year in 1..=config.time_steps {
            let record = YearRecord::from_operations(year, state.operations, config);
            trace!(
                "Year {}: operations={:.4} emissions={:.4} health={:.4}",
                record.year, state.operations, record.emissions, record.health_index
            );
            result.push(record);
            state.advance(config.growth_rate);
        }

        debug!(
            "Projected {} years from {} operations at {:.2}% growth",
            result.len(),
            config.initial_operations,
            config.growth_rate * 100.0
        );
        result
    }
}

/// Project a config without keeping an engine around
pub fn project(config: &SimulationConfig) -> SimulationResult {
    ProjectionEngine::new(*config).project()
}
