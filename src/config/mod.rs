//! Simulation parameters, their documented ranges, and config loading

pub mod bounds;
mod params;
pub mod loader;

pub use params::SimulationConfig;
pub use loader::{load_config, load_config_from_reader};

use thiserror::Error;

/// Errors raised while gathering or checking simulation parameters
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
