//! Implementations for the JointCtrl state structure

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;

// Internal
use super::{classify, filter, integrate, ActivityLabel, JointCtrlError, JointState, Params};
use crate::device::AxisSample;
use util::{module::State, session::Session};

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// Joint control module state
///
/// The joint state itself is not held here, it is owned by the caller and passed in on each
/// cycle.
#[derive(Default)]
pub struct JointCtrl {
    params: Option<Params>,
}

/// Input data to Joint Control.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputData {
    /// The joint state at the end of the previous cycle.
    pub joints: JointState,

    /// The raw stick sample read this cycle.
    pub sample: AxisSample,
}

/// Status report for JointCtrl processing.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct StatusReport {
    /// Which joints the operator is driving this cycle.
    pub activity: ActivityLabel,

    /// True if the deadzone suppressed the stick X axis.
    pub lx_suppressed: bool,

    /// True if the deadzone suppressed the stick Y axis.
    pub ly_suppressed: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl State for JointCtrl {
    type InitData = Params;
    type InitError = JointCtrlError;

    type InputData = InputData;
    type OutputData = JointState;
    type StatusReport = StatusReport;
    type ProcError = JointCtrlError;

    /// Initialise the JointCtrl module.
    ///
    /// Expected init data is the module's parameters, which are validated here.
    fn init(
        &mut self,
        init_data: Self::InitData,
        _session: Option<&Session>,
    ) -> Result<(), Self::InitError> {
        init_data.validate().map_err(JointCtrlError::InvalidParams)?;

        self.params = Some(init_data);

        Ok(())
    }

    /// Perform cyclic processing of Joint Control.
    ///
    /// Filters the sample, integrates it into the joint state and classifies the raw sample.
    fn proc(
        &mut self,
        input_data: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        let params = self.params.as_ref().ok_or(JointCtrlError::NotInitialised)?;

        let raw = input_data.sample;
        let filtered = filter(raw, params.deadzone);
        let joints = integrate(input_data.joints, filtered, params);
        let activity = classify(raw, params.emphasis_threshold);

        let report = StatusReport {
            activity,
            lx_suppressed: filtered.lx != raw.lx,
            ly_suppressed: filtered.ly != raw.ly,
        };

        trace!(
            "JointCtrl: raw {:?}, filtered {:?}, joints {:?}, {:?}",
            raw,
            filtered,
            joints,
            report
        );

        Ok((joints, report))
    }
}

impl JointCtrl {
    /// Get the module's parameters, if initialised.
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn init_joint_ctrl() -> JointCtrl {
        let mut jc = JointCtrl::default();
        jc.init(Params::default(), None).unwrap();
        jc
    }

    #[test]
    fn test_proc_before_init() {
        let mut jc = JointCtrl::default();

        match jc.proc(&InputData::default()) {
            Err(JointCtrlError::NotInitialised) => (),
            r => panic!("Expected NotInitialised, got {:?}", r),
        }
    }

    #[test]
    fn test_init_rejects_bad_params() {
        let mut jc = JointCtrl::default();

        let params = Params { axis2_scale: 0.0, ..Params::default() };
        assert!(matches!(
            jc.init(params, None),
            Err(JointCtrlError::InvalidParams(_))
        ));

        let params = Params { emphasis_threshold: 2, ..Params::default() };
        assert!(matches!(
            jc.init(params, None),
            Err(JointCtrlError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_proc_single_cycle() {
        let mut jc = init_joint_ctrl();

        let (joints, report) = jc
            .proc(&InputData {
                joints: JointState::default(),
                sample: AxisSample { lx: 100, ly: -50 },
            })
            .unwrap();

        assert_eq!(joints, JointState { theta1_rad: 0.5, theta2_rad: 0.25 });
        assert_eq!(
            report.activity,
            ActivityLabel { axis1_active: true, axis2_active: true }
        );
        assert!(!report.lx_suppressed);
        assert!(!report.ly_suppressed);
    }

    #[test]
    fn test_proc_deadzone_holds_state() {
        let mut jc = init_joint_ctrl();
        let start = JointState { theta1_rad: 1.0, theta2_rad: -2.0 };

        let (joints, report) = jc
            .proc(&InputData {
                joints: start,
                sample: AxisSample { lx: 3, ly: -2 },
            })
            .unwrap();

        assert_eq!(joints, start);
        assert_eq!(report.activity, ActivityLabel::default());
        assert!(report.lx_suppressed);
        assert!(report.ly_suppressed);
    }
}
