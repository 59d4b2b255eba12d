//! # Loop scheduler
//!
//! The top level cooperative loop of the visualiser. Each cycle the scheduler samples the input
//! device, runs joint control on the sample and publishes the new joint state:
//!
//! ```text
//! Initializing -> Running -> Terminated(StopRequested | DeviceDisconnected)
//! ```
//!
//! The scheduler owns the joint state and the device handle. The device is released on every
//! path out of `Running`, and again (harmlessly) when the scheduler is dropped.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod params;
mod state;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

pub use params::*;
pub use state::*;

use crate::{joint_ctrl::JointCtrlError, render::RenderError};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Warning shown to the operator when the controller could not be connected at startup.
pub const CONNECT_FAILED_WARNING: &str = "Error occurred while connecting to the controller. \
    Make sure the controller is wired up and the vendor and product IDs are correctly set in \
    the device parameters.";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A cloneable flag used to ask the loop to stop, from any thread.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Lifecycle of the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    Initializing,
    Running,
    Terminated(TerminationCause),
}

/// Why the loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationCause {
    /// The stop token was set, or the operator quit through the surface.
    StopRequested,

    /// The device was lost while running.
    DeviceDisconnected(String),
}

/// Result of a single cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new frame was published.
    Published,

    /// The joint state was updated but the frame could not be drawn.
    FrameSkipped,

    /// The device produced no usable sample this cycle.
    NoSample,

    /// No device is connected, nothing was done.
    Idle,

    /// The loop has terminated.
    Terminated(TerminationCause),
}

/// Errors which stop the scheduler from being built or run.
#[derive(Debug, thiserror::Error)]
pub enum LoopError {
    #[error("Invalid loop parameters: {0}")]
    InvalidParams(String),

    #[error("Could not initialise JointCtrl: {0}")]
    JointCtrlInitError(JointCtrlError),

    #[error("JointCtrl processing failed: {0}")]
    JointCtrlProcError(JointCtrlError),

    #[error("Could not submit the scene to the surface: {0}")]
    SceneSubmitError(RenderError),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop at the start of its next cycle.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl LoopState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, LoopState::Terminated(_))
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stop_token_shared_between_clones() {
        let token = StopToken::new();
        let other = token.clone();

        assert!(!token.is_stop_requested());

        std::thread::spawn(move || other.request_stop())
            .join()
            .unwrap();

        assert!(token.is_stop_requested());
    }

    #[test]
    fn test_params_validate() {
        assert!(Params::default().validate().is_ok());
        assert!(Params { cycle_period_s: 0.0 }.validate().is_err());
        assert!(Params { cycle_period_s: f64::NAN }.validate().is_err());
        assert!(Params { cycle_period_s: 1e30 }.validate().is_err());
        assert!(Params { cycle_period_s: -0.02 }.validate().is_err());
        assert!(Params { cycle_period_s: MAX_CYCLE_PERIOD_S }.validate().is_ok());
    }
}
