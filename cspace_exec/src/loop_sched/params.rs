//! Parameters for the loop scheduler

use serde::Deserialize;

/// Longest accepted cycle period.
///
/// Units: seconds
pub const MAX_CYCLE_PERIOD_S: f64 = 1.0;

/// Parameters for the loop scheduler.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    /// Target period of one cycle.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            cycle_period_s: 0.02,
        }
    }
}

impl Params {
    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.cycle_period_s > 0.0 && self.cycle_period_s <= MAX_CYCLE_PERIOD_S) {
            return Err(format!(
                "cycle_period_s must be in (0, {}], found {}",
                MAX_CYCLE_PERIOD_S, self.cycle_period_s
            ));
        }

        Ok(())
    }
}
