//! # Input device module
//!
//! Provides the [`InputDevice`] interface used by the loop scheduler to sample the operator's
//! analog stick, and an implementation for a USB HID game controller.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod params;
mod usb_hid;

#[cfg(test)]
pub(crate) mod mock;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

pub use params::*;
pub use usb_hid::*;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A single reading of the left analog stick.
///
/// Units: device native, centred on zero, roughly [-128, 127].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AxisSample {
    /// Horizontal deflection, positive to the right.
    pub lx: i16,

    /// Vertical deflection, positive downwards (device convention).
    pub ly: i16,
}

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Trait providing a unified API over input devices.
pub trait InputDevice {
    /// Connect to the device.
    ///
    /// Called once before the loop starts.
    fn connect(&mut self) -> Result<(), ConnectionError>;

    /// Read one report from the device and decode the stick axes from it.
    ///
    /// Must not block for longer than the device's read timeout. A lost connection is reported
    /// as [`SampleError::Disconnected`], never as a stale sample.
    fn poll(&mut self) -> Result<AxisSample, SampleError>;

    /// Release the device.
    ///
    /// Must be safe to call more than once, and on a device which never connected.
    fn release(&mut self);
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Errors which can occur when connecting to a device.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Invalid device parameters: {0}")]
    InvalidParams(String),

    #[error("Could not create the USB context: {0}")]
    ContextError(rusb::Error),

    #[error("No device with vendor ID {vendor_id:#06x} and product ID {product_id:#06x} found")]
    NotFound { vendor_id: u16, product_id: u16 },

    #[error("The device has no HID interface with an interrupt IN endpoint")]
    NoHidInterface,

    #[error("Permission denied when opening the device, check the udev rules for the device")]
    AccessDenied,

    #[error("USB error while connecting: {0}")]
    UsbError(rusb::Error),
}

/// Errors which can occur when sampling a device.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("The device has been disconnected: {0}")]
    Disconnected(String),

    #[error("No report was recieved from the device before the timeout")]
    Timeout,

    #[error("Recieved a malformed report: {0}")]
    MalformedReport(String),
}
