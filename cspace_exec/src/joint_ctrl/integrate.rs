//! Joint angle integration

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use util::maths::wrap_half_open;

use super::{JointState, Params, MAX_JOINT_ANGLE_RAD, MIN_JOINT_ANGLE_RAD};
use crate::device::AxisSample;

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Wrap an angle into `[-2pi, 2pi)`.
///
/// Equivalent to `((theta + 2pi) mod 4pi) - 2pi` with a non-negative modulo. Idempotent, and
/// `2pi` maps onto `-2pi`.
pub fn wrap_angle(theta_rad: f64) -> f64 {
    wrap_half_open(theta_rad, MIN_JOINT_ANGLE_RAD, MAX_JOINT_ANGLE_RAD)
}

/// Advance the joint state by one cycle of filtered stick deflection.
///
/// The stick Y axis is inverted so that pushing up increases the second joint angle. Both angles
/// are wrapped after the update. An angle whose update is not finite keeps its previous value.
pub fn integrate(prev: JointState, filtered: AxisSample, params: &Params) -> JointState {
    JointState {
        theta1_rad: step_angle(prev.theta1_rad, filtered.lx as f64 / params.axis1_scale),
        theta2_rad: step_angle(prev.theta2_rad, -(filtered.ly as f64) / params.axis2_scale),
    }
}

fn step_angle(prev_rad: f64, delta_rad: f64) -> f64 {
    let next = wrap_angle(prev_rad + delta_rad);

    if next.is_finite() {
        next
    }
    else {
        prev_rad
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
