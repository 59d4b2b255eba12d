//! # Joint control module
//!
//! Converts the operator's analog stick deflection into the two joint angles of the arm:
//!
//! - [`filter`] suppresses stick noise below the deadzone,
//! - [`integrate`] accumulates the filtered deflection into the wrapped [`JointState`],
//! - [`classify`] decides which joints the operator is actively driving.
//!
//! The three are sequenced each cycle by [`JointCtrl`].

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod activity;
mod deadzone;
mod integrate;
mod params;
mod state;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Serialize;

pub use activity::*;
pub use deadzone::*;
pub use integrate::*;
pub use params::*;
pub use state::*;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Lower (inclusive) bound of a wrapped joint angle.
///
/// Units: radians
pub const MIN_JOINT_ANGLE_RAD: f64 = -std::f64::consts::TAU;

/// Upper (exclusive) bound of a wrapped joint angle.
///
/// Units: radians
pub const MAX_JOINT_ANGLE_RAD: f64 = std::f64::consts::TAU;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The two joint angles of the arm, the coordinates of a point in configuration space.
///
/// Both angles always lie within `[MIN_JOINT_ANGLE_RAD, MAX_JOINT_ANGLE_RAD)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct JointState {
    /// Angle of the first (shoulder) joint.
    ///
    /// Units: radians
    pub theta1_rad: f64,

    /// Angle of the second (elbow) joint.
    ///
    /// Units: radians
    pub theta2_rad: f64,
}

/// Which joints the operator is actively driving.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityLabel {
    pub axis1_active: bool,
    pub axis2_active: bool,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Possible errors that can occur during JointCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum JointCtrlError {
    #[error("JointCtrl has not been initialised")]
    NotInitialised,

    #[error("Invalid JointCtrl parameters: {0}")]
    InvalidParams(String),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl JointState {
    /// Create a new state, wrapping both angles into range.
    pub fn new(theta1_rad: f64, theta2_rad: f64) -> Self {
        Self {
            theta1_rad: wrap_angle(theta1_rad),
            theta2_rad: wrap_angle(theta2_rad),
        }
    }

    /// Check both angles are within the wrapped range.
    pub fn is_in_range(&self) -> bool {
        let in_range = |a: f64| a >= MIN_JOINT_ANGLE_RAD && a < MAX_JOINT_ANGLE_RAD;

        in_range(self.theta1_rad) && in_range(self.theta2_rad)
    }

    /// The state as an `(x, y)` point in configuration space.
    pub fn as_point(&self) -> (f64, f64) {
        (self.theta1_rad, self.theta2_rad)
    }
}
