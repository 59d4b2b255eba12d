//! Scripted input device used by the tests

use std::{cell::Cell, collections::VecDeque, rc::Rc};

use super::{AxisSample, ConnectionError, InputDevice, SampleError};

/// A device which replays a script of poll results.
///
/// Once the script is exhausted every poll times out.
#[derive(Debug, Default)]
pub struct MockDevice {
    pub script: VecDeque<Result<AxisSample, SampleError>>,

    /// Make `connect` fail with `NotFound`.
    pub fail_connect: bool,

    pub connected: bool,

    pub num_polls: usize,

    /// Number of calls to `release`, shared so it can be read after the device is dropped.
    pub releases: Rc<Cell<usize>>,
}

impl MockDevice {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Result<AxisSample, SampleError>>,
    {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A device which cannot be found.
    pub fn missing() -> Self {
        Self {
            fail_connect: true,
            ..Self::default()
        }
    }
}

impl InputDevice for MockDevice {
    fn connect(&mut self) -> Result<(), ConnectionError> {
        if self.fail_connect {
            return Err(ConnectionError::NotFound {
                vendor_id: 0x054C,
                product_id: 0x0CE6,
            });
        }

        self.connected = true;
        Ok(())
    }

    fn poll(&mut self) -> Result<AxisSample, SampleError> {
        if !self.connected {
            return Err(SampleError::Disconnected(String::from("not connected")));
        }

        self.num_polls += 1;
        self.script.pop_front().unwrap_or(Err(SampleError::Timeout))
    }

    fn release(&mut self) {
        self.connected = false;
        self.releases.set(self.releases.get() + 1);
    }
}
