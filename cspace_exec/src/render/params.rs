//! Parameters for the rendering surface

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Most grid lines drawn on each side of an axis' origin.
pub const MAX_GRID_LINES_PER_SIDE: f64 = 64.0;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters for the rendering surface.
///
/// Colours are given as `#RRGGBB` strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {

    // ---- THEME ----

    /// Plot background colour.
    pub background: String,

    /// Colour of the plot frame, labels and text.
    pub axes: String,

    /// Colour of the grid lines.
    pub grid: String,

    /// Colour of the obstacle boundaries.
    pub obstacle: String,

    /// Colour of the start marker.
    pub start: String,

    /// Colour of the goal marker.
    pub goal: String,

    /// Colour of the operator's marker.
    pub marker: String,

    // ---- VIEW ----

    /// The plot shows both angles from `-axis_limit_rad` to `axis_limit_rad`.
    ///
    /// Units: radians
    pub axis_limit_rad: f64,

    /// Spacing between grid lines.
    ///
    /// Units: radians
    pub grid_spacing_rad: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            background: String::from("#FFFFFF"),
            axes: String::from("#335095"),
            grid: String::from("#D6D6D6"),
            obstacle: String::from("#FF0000"),
            start: String::from("#000000"),
            goal: String::from("#FF0000"),
            marker: String::from("#FF0000"),
            axis_limit_rad: std::f64::consts::TAU,
            grid_spacing_rad: std::f64::consts::PI,
        }
    }
}

impl Params {
    /// Check the view parameters are usable, returning a description of the problem if not.
    ///
    /// Colours are checked when the surface parses its theme.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.axis_limit_rad.is_finite() && self.axis_limit_rad > 0.0) {
            return Err(format!(
                "axis_limit_rad must be finite and positive, found {}",
                self.axis_limit_rad
            ));
        }

        if !(self.grid_spacing_rad.is_finite() && self.grid_spacing_rad > 0.0) {
            return Err(format!(
                "grid_spacing_rad must be finite and positive, found {}",
                self.grid_spacing_rad
            ));
        }

        if self.axis_limit_rad / self.grid_spacing_rad > MAX_GRID_LINES_PER_SIDE {
            return Err(format!(
                "grid_spacing_rad {} gives more than {} grid lines each side of the origin",
                self.grid_spacing_rad, MAX_GRID_LINES_PER_SIDE
            ));
        }

        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Params::default().validate().is_ok());

        let bad = [
            Params { axis_limit_rad: 0.0, ..Params::default() },
            Params { axis_limit_rad: -1.0, ..Params::default() },
            Params { axis_limit_rad: f64::INFINITY, ..Params::default() },
            Params { grid_spacing_rad: 0.0, ..Params::default() },
            Params { grid_spacing_rad: f64::NAN, ..Params::default() },
            Params { grid_spacing_rad: 1e-300, ..Params::default() },
        ];

        for params in bad.iter() {
            assert!(params.validate().is_err(), "{:?} accepted", params);
        }
    }
}
