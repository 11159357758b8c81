//! Working state carried from one projected year to the next

/// Accumulator owned by a single projection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    /// Year about to be recorded (1-based)
    pub year: u32,
    /// Operation count for `year`, before this year's growth
    pub operations: f64,
}

impl ProjectionState {
    /// Start of a projection: year 1 at the initial operation count
    pub fn initial(initial_operations: f64) -> Self {
        Self {
            year: 1,
            operations: initial_operations,
        }
    }

    /// Move to the next year, compounding operations by `growth_rate`
    pub fn advance(&mut self, growth_rate: f64) {
        self.operations *= 1.0 + growth_rate;
        self.year = self.year.saturating_add(1);
    }
}
