//! Logger setup for the executables
//!
//! Records are prefixed by the seconds elapsed since the session epoch and a three letter level
//! tag. Debug and trace records also carry their target module.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use colored::{ColoredString, Colorize};
use log::{self, info, Level, Record};
use thiserror::Error;

// Internal imports
use crate::session;

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Expected a log level of at least `INFO`, found `{0}`")]
    InvalidMinLogLevel(log::LevelFilter),

    #[error("Error initialising the log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("An error occured while setting up the logger: {0}")]
    FernInitError(log::SetLoggerError),
}

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSinks {
    /// Session log file and stdout.
    FileAndStdout,

    /// Session log file only, for executables which draw on the terminal.
    ///
    /// Level tags are written without colour codes.
    FileOnly,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for this execution.
///
/// # Notes
///
/// - `min_level` must be `Info` or more verbose.
/// - Only the first call in a process succeeds, later calls return `FernInitError`.
pub fn logger_init(
    min_level: LevelFilter,
    sinks: LogSinks,
    session: &session::Session,
) -> Result<(), LoggerInitError> {
    if min_level < Level::Info {
        return Err(LoggerInitError::InvalidMinLogLevel(min_level));
    }

    let log_file = fern::log_file(&session.log_file_path)
        .map_err(LoggerInitError::LogFileInitError)?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:10.6} {}] {}{}",
                session::get_elapsed_seconds(),
                level_tag(record.level()),
                target_prefix(record),
                message
            ))
        })
        .level(min_level)
        // libusb hotplug and transfer chatter
        .level_for("rusb", LevelFilter::Info)
        .chain(log_file);

    match sinks {
        LogSinks::FileAndStdout => dispatch = dispatch.chain(std::io::stdout()),
        LogSinks::FileOnly => colored::control::set_override(false),
    }

    dispatch.apply().map_err(LoggerInitError::FernInitError)?;

    info!("Logging initialised");
    info!("    Session epoch: {}", session::get_epoch());
    info!("    Log level: {:?}", min_level);
    info!("    Sinks: {:?}", sinks);
    info!("    Log file path: {:?}", session.log_file_path);

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Three letter tag for a log level
fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Trace => "TRC".dimmed().italic(),
        Level::Debug => "DBG".dimmed(),
        Level::Info => "INF".normal(),
        Level::Warn => "WRN".yellow(),
        Level::Error => "ERR".red().bold(),
    }
}

/// `"target: "` for debug and trace records, empty otherwise.
fn target_prefix(record: &Record) -> String {
    if record.level() > Level::Info {
        format!("{}: ", record.target())
    }
    else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert!(level_tag(Level::Trace).to_string().contains("TRC"));
        assert!(level_tag(Level::Error).to_string().contains("ERR"));
    }

    #[test]
    fn test_target_prefix() {
        let debug = Record::builder()
            .level(Level::Debug)
            .target("cspace_lib::loop_sched")
            .build();
        let info = Record::builder()
            .level(Level::Info)
            .target("cspace_lib::loop_sched")
            .build();

        assert_eq!(target_prefix(&debug), "cspace_lib::loop_sched: ");
        assert_eq!(target_prefix(&info), "");
    }
}
