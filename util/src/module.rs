//! Cyclic module interface
//!
//! A cyclic module is initialised once with its parameters, then run once per cycle of the
//! executable's main loop. Everything the module needs each cycle arrives in its `InputData`;
//! anything the module keeps between cycles lives in the implementing struct.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use crate::session::Session;

// ---------------------------------------------------------------------------
// MODULE STATE
// ---------------------------------------------------------------------------

/// A cyclic processing module.
pub trait State {
    /// Data consumed by `init`, usually the module's parameters.
    type InitData;
    /// Error returned by `init`.
    type InitError;

    /// Data consumed by each call to `proc`.
    type InputData;
    /// Data produced by each call to `proc`.
    type OutputData;
    /// Diagnostics produced alongside the output of each call to `proc`.
    type StatusReport;
    /// Error returned by `proc`.
    type ProcError;

    /// Initialise the module.
    ///
    /// `session` is `None` when running outside an executable, for instance in tests and
    /// benchmarks.
    fn init(
        &mut self,
        init_data: Self::InitData,
        session: Option<&Session>,
    ) -> Result<(), Self::InitError>;

    /// Run one cycle of the module.
    ///
    /// Calling `proc` before a successful `init` is an error, not a panic.
    fn proc(
        &mut self,
        input_data: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>;
}
