//! # C-Space Executable Parameters
//!
//! This module provides the parameters for the c-space executable, one table per module.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use crate::{device, joint_ctrl, loop_sched, render, scene};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CspaceExecParams {
    /// Cycle pacing of the main loop
    #[serde(rename = "loop")]
    pub loop_sched: loop_sched::Params,

    /// Input device identification and report layout
    pub device: device::Params,

    /// Deadzone, emphasis threshold and joint scales
    pub joint_ctrl: joint_ctrl::Params,

    /// Obstacles, start and goal
    pub scene: scene::Params,

    /// Terminal theme and view
    pub render: render::Params,
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_exec_params_file() {
        let params: CspaceExecParams = util::params::load_path(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../params/cspace_exec.toml"
        ))
        .unwrap();

        assert_eq!(params.loop_sched.cycle_period_s, 0.02);
        assert_eq!(params.device.vendor_id, 0x054C);
        assert_eq!(params.device.product_id, 0x0CE6);
        assert_eq!(params.joint_ctrl.deadzone, 4);
        assert_eq!(params.joint_ctrl.emphasis_threshold, 30);
        assert_eq!(params.scene.obstacles.len(), 4);
        assert_eq!(params.scene.goal, [5.0, 5.0]);
        assert_eq!(params.render.axes, "#335095");

        assert!(scene::StaticScene::build(&params.scene).is_ok());
    }
}
