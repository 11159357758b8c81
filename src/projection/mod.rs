//! Projection engine for year-by-year impact projections

mod state;
mod engine;
mod records;

pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine};
pub use records::{YearRecord, SimulationResult};

// ============================================================================
// Health Index Scale
// ============================================================================
// The health index starts from a perfect score and loses `health_impact`
// points per unit of emissions. It is floored at zero and never exceeds the
// baseline for non-negative emissions.

/// Health index with zero emissions
pub const HEALTH_INDEX_BASELINE: f64 = 100.0;

/// Lowest value the health index can take
pub const HEALTH_INDEX_FLOOR: f64 = 0.0;
