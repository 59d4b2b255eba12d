//! Parameters structure for JointCtrl

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Smallest accepted magnitude of an axis scale.
///
/// Bounds a single cycle's step to one full stick deflection in radians.
pub const MIN_AXIS_SCALE: f64 = 1.0;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters for joint control.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {

    // ---- FILTERING ----

    /// Stick deflections with a magnitude below this are treated as zero.
    ///
    /// Units: device native
    pub deadzone: u16,

    /// Stick deflections with a magnitude above this mark the joint as actively driven.
    ///
    /// Units: device native
    pub emphasis_threshold: u16,

    // ---- INTEGRATION ----

    /// Divisor applied to the stick X deflection before adding it to the first joint angle.
    ///
    /// Units: device native per radian
    pub axis1_scale: f64,

    /// Divisor applied to the stick Y deflection before subtracting it from the second joint
    /// angle.
    ///
    /// Units: device native per radian
    pub axis2_scale: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            deadzone: 4,
            emphasis_threshold: 30,
            axis1_scale: 200.0,
            axis2_scale: 200.0,
        }
    }
}

impl Params {
    /// Check the parameters are usable, returning a description of the problem if not.
    pub fn validate(&self) -> Result<(), String> {
        for (name, scale) in [("axis1_scale", self.axis1_scale), ("axis2_scale", self.axis2_scale)] {
            if !scale.is_finite() || scale.abs() < MIN_AXIS_SCALE {
                return Err(format!(
                    "{} must be finite with a magnitude of at least {}, found {}",
                    name, MIN_AXIS_SCALE, scale
                ));
            }
        }

        if self.emphasis_threshold < self.deadzone {
            return Err(format!(
                "emphasis_threshold ({}) must not be below the deadzone ({})",
                self.emphasis_threshold, self.deadzone
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
    fn test_validate_scales() {
        assert!(Params::default().validate().is_ok());
        assert!(Params { axis1_scale: -200.0, ..Params::default() }.validate().is_ok());
        assert!(Params { axis2_scale: 1.0, ..Params::default() }.validate().is_ok());

        for bad in [0.0, 1e-308, -0.5, f64::INFINITY, f64::NAN] {
            assert!(
                Params { axis1_scale: bad, ..Params::default() }.validate().is_err(),
                "axis1_scale {} accepted",
                bad
            );
            assert!(
                Params { axis2_scale: bad, ..Params::default() }.validate().is_err(),
                "axis2_scale {} accepted",
                bad
            );
        }
    }
}
