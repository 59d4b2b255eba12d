//! Main c-space executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logger and parameters
//!     - Build the static scene and the terminal surface
//!     - Initialise the loop scheduler, connecting the controller
//!     - Main loop, until the operator quits or the controller is lost:
//!         - Controller sampling
//!         - Joint control processing
//!         - Frame publishing
//!     - If the controller was lost keep the last frame up until the operator quits
//!
//! Logs are written to the session directory only, the terminal is owned by the plot.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Result};
use log::{debug, info, warn};
use structopt::StructOpt;

// Internal
use cspace_lib::{
    device::UsbHidDevice,
    loop_sched::{LoopScheduler, StopToken, TerminationCause},
    params::CspaceExecParams,
    render::TermSurface,
    scene::StaticScene,
};
use util::{
    logger::{logger_init, LevelFilter, LogSinks},
    session::Session,
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Visualise the configuration space of a 2R robot, driving the joints with a game controller.
#[derive(Debug, StructOpt)]
#[structopt(name = "cspace_exec")]
struct Opts {
    /// Parameter file, relative to the params directory of the software root.
    #[structopt(long, default_value = "cspace_exec.toml")]
    params: String,

    /// Log at trace level rather than debug.
    #[structopt(short, long)]
    verbose: bool,
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("cspace_exec", "sessions")
        .wrap_err("Failed to create the session")?;

    // Initialise logger
    let min_level = match opts.verbose {
        true => LevelFilter::Trace,
        false => LevelFilter::Debug,
    };
    logger_init(min_level, LogSinks::FileOnly, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("C-Space Teleoperation Visualiser\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI options: {:?}", opts);

    // ---- LOAD PARAMETERS ----

    let params: CspaceExecParams = util::params::load(&opts.params)
        .wrap_err_with(|| format!("Could not load exec params from {:?}", opts.params))?;

    info!("Exec parameters loaded");

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let scene = StaticScene::build(&params.scene).wrap_err("Failed to build the static scene")?;
    info!(
        "Static scene built: {} obstacles, {} boundary points",
        params.scene.obstacles.len(),
        scene.obstacles.len()
    );

    let surface =
        TermSurface::stdout(&params.render).wrap_err("Failed to initialise the terminal")?;
    info!("TermSurface initialised");

    let device =
        UsbHidDevice::new(params.device.clone()).wrap_err("Invalid input device parameters")?;

    let stop = StopToken::new();

    let mut sched = LoopScheduler::init(
        params.loop_sched.clone(),
        params.joint_ctrl.clone(),
        scene,
        device,
        surface,
        stop,
        Some(&session),
    )
    .wrap_err("Failed to initialise the loop scheduler")?;

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    let cause = sched.run().wrap_err("Main loop failed")?;

    if let TerminationCause::DeviceDisconnected(reason) = &cause {
        warn!("Controller lost ({}), waiting for the operator to quit", reason);
        sched.wait_for_stop();
    }

    // ---- SHUTDOWN ----

    // Restores the terminal and releases the device
    drop(sched);

    info!("End of execution");

    Ok(())
}
