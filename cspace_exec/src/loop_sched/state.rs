//! Implementations for the LoopScheduler

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// Standard
use std::{
    thread,
    time::{Duration, Instant},
};

// External
use log::{debug, error, info, warn};

// Internal
use super::{
    LoopError, LoopState, Params, StepOutcome, StopToken, TerminationCause,
    CONNECT_FAILED_WARNING,
};
use crate::{
    device::{InputDevice, SampleError},
    joint_ctrl::{self, InputData, JointCtrl, JointState},
    render::{FramePublisher, Surface},
    scene::StaticScene,
};
use util::{module::State, session::Session};

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// Sequences sampling, joint control and publishing.
pub struct LoopScheduler<D: InputDevice, S: Surface> {
    params: Params,

    state: LoopState,

    joint_ctrl: JointCtrl,

    /// Current joint state, starts at the origin.
    joints: JointState,

    publisher: FramePublisher<S>,

    /// The connected device, `None` if connection failed or the device has been released.
    device: Option<D>,

    stop: StopToken,

    counters: LoopCounters,
}

/// Monitoring counters, logged at the end of the run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopCounters {
    /// Number of cycles already executed.
    pub num_cycles: u64,

    /// Number of frames which could not be drawn.
    pub num_skipped_frames: u64,

    /// Number of cycles in which the device gave no usable sample.
    pub num_missed_samples: u64,

    /// Number of consecutive cycle overruns.
    pub num_consec_cycle_overruns: u64,

    /// Total number of cycle overruns.
    pub num_cycle_overruns: u64,
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl<D: InputDevice, S: Surface> LoopScheduler<D, S> {
    /// Initialise the scheduler.
    ///
    /// Submits the scene to the surface, attempts to connect the device and publishes the
    /// initial frame with the marker at the origin. Failing to connect the device is not an
    /// error: the operator is warned and the scheduler idles until stopped.
    pub fn init(
        params: Params,
        joint_ctrl_params: joint_ctrl::Params,
        scene: StaticScene,
        mut device: D,
        surface: S,
        stop: StopToken,
        session: Option<&Session>,
    ) -> Result<Self, LoopError> {
        params.validate().map_err(LoopError::InvalidParams)?;

        let mut joint_ctrl = JointCtrl::default();
        joint_ctrl
            .init(joint_ctrl_params, session)
            .map_err(LoopError::JointCtrlInitError)?;
        info!("JointCtrl init complete");

        let publisher = FramePublisher::new(surface, scene).map_err(LoopError::SceneSubmitError)?;
        info!("FramePublisher init complete");

        let connect_error = match device.connect() {
            Ok(()) => {
                info!("Input device connected");
                None
            }
            Err(e) => {
                warn!("Could not connect to the input device: {}", e);
                device.release();
                Some(e)
            }
        };

        let mut sched = Self {
            params,
            state: LoopState::Initializing,
            joint_ctrl,
            joints: JointState::default(),
            publisher,
            device: match connect_error {
                None => Some(device),
                Some(_) => None,
            },
            stop,
            counters: LoopCounters::default(),
        };

        // Initial frame
        sched.publish(sched.joints);

        if connect_error.is_some() {
            if let Err(e) = sched.publisher.show_warning(CONNECT_FAILED_WARNING) {
                warn!("Could not show the connection warning: {}", e);
            }
            info!("No input device, the loop will idle until stopped");
        }

        sched.state = LoopState::Running;

        Ok(sched)
    }

    /// Execute a single cycle.
    pub fn step(&mut self) -> Result<StepOutcome, LoopError> {
        if let LoopState::Terminated(cause) = &self.state {
            return Ok(StepOutcome::Terminated(cause.clone()));
        }

        // ---- STOP CHECK ----

        if self.publisher.quit_requested() {
            info!("Operator quit through the surface");
            self.stop.request_stop();
        }

        if self.stop.is_stop_requested() {
            return Ok(self.terminate(TerminationCause::StopRequested));
        }

        // ---- SAMPLE ----

        let device = match self.device.as_mut() {
            Some(d) => d,
            None => return Ok(StepOutcome::Idle),
        };

        let sample = match device.poll() {
            Ok(s) => s,
            Err(SampleError::Disconnected(reason)) => {
                error!("Input device disconnected: {}", reason);

                let warning = format!("Controller disconnected ({}), press q to quit.", reason);
                if let Err(e) = self.publisher.show_warning(&warning) {
                    warn!("Could not show the disconnection warning: {}", e);
                }

                return Ok(self.terminate(TerminationCause::DeviceDisconnected(reason)));
            }
            Err(SampleError::Timeout) => {
                self.counters.num_missed_samples += 1;
                return Ok(StepOutcome::NoSample);
            }
            Err(e @ SampleError::MalformedReport(_)) => {
                warn!("{}", e);
                self.counters.num_missed_samples += 1;
                return Ok(StepOutcome::NoSample);
            }
        };

        // ---- JOINT CONTROL ----

        let (joints, report) = self
            .joint_ctrl
            .proc(&InputData {
                joints: self.joints,
                sample,
            })
            .map_err(LoopError::JointCtrlProcError)?;

        self.joints = joints;

        // ---- PUBLISH ----

        self.publisher.show_activity(report.activity);

        Ok(self.publish(joints))
    }

    /// Run cycles until the loop terminates, pacing each to the cycle period.
    pub fn run(&mut self) -> Result<TerminationCause, LoopError> {
        let cycle_period = Duration::from_secs_f64(self.params.cycle_period_s);

        info!("Begining main loop\n");

        let cause = loop {
            // Get cycle start time
            let cycle_start_instant = Instant::now();

            if let StepOutcome::Terminated(cause) = self.step()? {
                break cause;
            }

            // ---- CYCLE MANAGEMENT ----

            let cycle_dur = Instant::now() - cycle_start_instant;

            // Get sleep duration
            match cycle_period.checked_sub(cycle_dur) {
                Some(d) => {
                    self.counters.num_consec_cycle_overruns = 0;
                    thread::sleep(d);
                }
                None => {
                    warn!(
                        "Cycle overran by {:.06} s",
                        cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
                    );
                    self.counters.num_consec_cycle_overruns += 1;
                    self.counters.num_cycle_overruns += 1;
                }
            }

            self.counters.num_cycles += 1;
        };

        info!("Main loop terminated: {:?}", cause);
        info!(
            "{} cycles, {} frames published, {} frames skipped, {} samples missed, {} overruns",
            self.counters.num_cycles,
            self.publisher.num_frames(),
            self.counters.num_skipped_frames,
            self.counters.num_missed_samples,
            self.counters.num_cycle_overruns
        );

        Ok(cause)
    }

    /// Keep the last frame on the surface until a stop is requested or the operator quits.
    pub fn wait_for_stop(&mut self) {
        let period = Duration::from_secs_f64(self.params.cycle_period_s);

        while !self.stop.is_stop_requested() {
            if self.publisher.quit_requested() {
                self.stop.request_stop();
                break;
            }

            thread::sleep(period);
        }
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    pub fn joints(&self) -> JointState {
        self.joints
    }

    pub fn counters(&self) -> &LoopCounters {
        &self.counters
    }

    pub fn publisher(&self) -> &FramePublisher<S> {
        &self.publisher
    }

    /// Publish a frame, skipping it if the surface fails.
    fn publish(&mut self, joints: JointState) -> StepOutcome {
        match self.publisher.publish(joints) {
            Ok(()) => StepOutcome::Published,
            Err(e) => {
                warn!("Frame skipped: {}", e);
                self.counters.num_skipped_frames += 1;
                StepOutcome::FrameSkipped
            }
        }
    }

    /// Release the device and enter the terminated state.
    fn terminate(&mut self, cause: TerminationCause) -> StepOutcome {
        self.release_device();
        self.state = LoopState::Terminated(cause.clone());

        StepOutcome::Terminated(cause)
    }

    fn release_device(&mut self) {
        if let Some(mut device) = self.device.take() {
            device.release();
            debug!("Input device released");
        }
    }
}

impl<D: InputDevice, S: Surface> Drop for LoopScheduler<D, S> {
    fn drop(&mut self) {
        self.release_device();
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
