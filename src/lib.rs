//! Impact Simulator - year-by-year projection of industrial growth impacts
//!
//! This library provides:
//! - Simulation parameters with documented defaults and input ranges
//! - The projection engine (compound growth of operations, per-operation metrics)
//! - Reporting: final-year summary, CSV export, JSON run reports, export caching

pub mod config;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigError, SimulationConfig};
pub use projection::{project, ProjectionEngine, SimulationResult, YearRecord};
pub use report::{ExportCache, ExportError, RunReport, Summary};
