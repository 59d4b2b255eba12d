//! # C-Space library.
//!
//! This library allows other crates in the workspace (and the benchmarks) to access items defined
//! inside the c-space executable crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Input device - connects to the controller and samples the analog sticks
pub mod device;

/// Joint control module - deadzone filtering, angle integration and activity classification
pub mod joint_ctrl;

/// Loop scheduler - the cyclic executive sequencing sampling, control and publishing
pub mod loop_sched;

/// Executable parameters
pub mod params;

/// Rendering surface abstraction, the frame publisher and the terminal surface
pub mod render;

/// Static scene - obstacles, start and goal drawn in configuration space
pub mod scene;
