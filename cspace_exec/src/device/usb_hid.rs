//! # USB HID controller
//!
//! [`InputDevice`] implementation reading input reports directly from a game controller's HID
//! interrupt endpoint over USB.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::time::Duration;

use log::{debug, info, warn};
use rusb::{Context, Device, DeviceHandle, Direction, TransferType, UsbContext};

use super::{AxisSample, ConnectionError, InputDevice, Params, SampleError};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// USB interface class code for Human Interface Devices.
const HID_CLASS_CODE: u8 = 0x03;

/// Size of the buffer an input report is read into.
const REPORT_BUFFER_LEN: usize = 64;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A game controller connected over USB.
pub struct UsbHidDevice {
    params: Params,

    conn: Option<Connection>,
}

/// An open and claimed HID interface.
struct Connection {
    handle: DeviceHandle<Context>,

    interface: u8,

    endpoint: u8,

    /// Set if the kernel driver was detached on connecting and must be given back on release.
    reattach_kernel_driver: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl UsbHidDevice {
    /// Create a new, unconnected device.
    ///
    /// Fails with `InvalidParams` if the parameters don't validate.
    pub fn new(params: Params) -> Result<Self, ConnectionError> {
        params.validate().map_err(ConnectionError::InvalidParams)?;

        Ok(Self { params, conn: None })
    }

    /// Check if the device is currently connected.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Find the HID interface number and its interrupt IN endpoint address.
    fn find_hid_endpoint(device: &Device<Context>) -> Result<(u8, u8), ConnectionError> {
        let config = device
            .active_config_descriptor()
            .map_err(ConnectionError::UsbError)?;

        for interface in config.interfaces() {
            for desc in interface.descriptors() {
                if desc.class_code() != HID_CLASS_CODE {
                    continue;
                }

                for ep in desc.endpoint_descriptors() {
                    if ep.direction() == Direction::In
                        && ep.transfer_type() == TransferType::Interrupt
                    {
                        return Ok((desc.interface_number(), ep.address()));
                    }
                }
            }
        }

        Err(ConnectionError::NoHidInterface)
    }
}

impl InputDevice for UsbHidDevice {
    fn connect(&mut self) -> Result<(), ConnectionError> {
        // Drop any previous connection first
        self.release();

        let context = Context::new().map_err(ConnectionError::ContextError)?;
        let devices = context.devices().map_err(ConnectionError::UsbError)?;

        let device = devices
            .iter()
            .find(|d| match d.device_descriptor() {
                Ok(desc) => {
                    desc.vendor_id() == self.params.vendor_id
                        && desc.product_id() == self.params.product_id
                }
                Err(_) => false,
            })
            .ok_or(ConnectionError::NotFound {
                vendor_id: self.params.vendor_id,
                product_id: self.params.product_id,
            })?;

        let (interface, endpoint) = Self::find_hid_endpoint(&device)?;

        let mut handle = device.open().map_err(|e| match e {
            rusb::Error::Access => ConnectionError::AccessDenied,
            e => ConnectionError::UsbError(e),
        })?;

        // Kernel driver support is not available on every platform, in which case there's nothing
        // to detach.
        let reattach_kernel_driver = match handle.kernel_driver_active(interface) {
            Ok(true) => {
                handle
                    .detach_kernel_driver(interface)
                    .map_err(ConnectionError::UsbError)?;
                true
            }
            _ => false,
        };

        if let Err(e) = handle.claim_interface(interface) {
            if reattach_kernel_driver {
                handle.attach_kernel_driver(interface).ok();
            }
            return Err(match e {
                rusb::Error::Access => ConnectionError::AccessDenied,
                e => ConnectionError::UsbError(e),
            });
        }

        info!(
            "Connected to {:#06x}:{:#06x}, HID interface {} endpoint {:#04x}",
            self.params.vendor_id, self.params.product_id, interface, endpoint
        );

        self.conn = Some(Connection {
            handle,
            interface,
            endpoint,
            reattach_kernel_driver,
        });

        Ok(())
    }

    fn poll(&mut self) -> Result<AxisSample, SampleError> {
        let conn = match self.conn {
            Some(ref c) => c,
            None => {
                return Err(SampleError::Disconnected(String::from(
                    "the device is not connected",
                )))
            }
        };

        let mut buf = [0u8; REPORT_BUFFER_LEN];

        let len = conn
            .handle
            .read_interrupt(
                conn.endpoint,
                &mut buf,
                Duration::from_millis(self.params.read_timeout_ms),
            )
            .map_err(|e| match e {
                rusb::Error::Timeout | rusb::Error::Interrupted => SampleError::Timeout,
                rusb::Error::Overflow => SampleError::MalformedReport(e.to_string()),
                e => SampleError::Disconnected(e.to_string()),
            })?;

        decode_report(&buf[..len], &self.params)
    }

    fn release(&mut self) {
        if let Some(mut conn) = self.conn.take() {
            if let Err(e) = conn.handle.release_interface(conn.interface) {
                debug!("Could not release interface {}: {}", conn.interface, e);
            }

            if conn.reattach_kernel_driver {
                if let Err(e) = conn.handle.attach_kernel_driver(conn.interface) {
                    warn!("Could not reattach the kernel driver: {}", e);
                }
            }

            info!("Input device released");
        }
    }
}

impl Drop for UsbHidDevice {
    fn drop(&mut self) {
        self.release();
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Decode the left stick axes from a raw input report.
///
/// The raw unsigned axis bytes are centred on `params.stick_centre`.
pub fn decode_report(report: &[u8], params: &Params) -> Result<AxisSample, SampleError> {
    let min_len = params.lx_byte.max(params.ly_byte) + 1;

    if report.len() < min_len {
        return Err(SampleError::MalformedReport(format!(
            "expected at least {} bytes, got {}",
            min_len,
            report.len()
        )));
    }

    if report[0] != params.report_id {
        return Err(SampleError::MalformedReport(format!(
            "expected report ID {:#04x}, got {:#04x}",
            params.report_id, report[0]
        )));
    }

    let centre = params.stick_centre as i16;

    Ok(AxisSample {
        lx: report[params.lx_byte] as i16 - centre,
        ly: report[params.ly_byte] as i16 - centre,
    })
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_report() {
        let params = Params::default();

        let mut report = [0u8; REPORT_BUFFER_LEN];
        report[0] = 0x01;
        report[1] = 228;
        report[2] = 78;

        assert_eq!(
            decode_report(&report, &params).unwrap(),
            AxisSample { lx: 100, ly: -50 }
        );

        // Full range
        report[1] = 0;
        report[2] = 255;
        assert_eq!(
            decode_report(&report, &params).unwrap(),
            AxisSample { lx: -128, ly: 127 }
        );

        // At rest
        report[1] = 128;
        report[2] = 128;
        assert_eq!(decode_report(&report, &params).unwrap(), AxisSample::default());
    }

    #[test]
    fn test_decode_malformed_report() {
        let params = Params::default();

        match decode_report(&[0x01, 128], &params) {
            Err(SampleError::MalformedReport(_)) => (),
            r => panic!("Expected a malformed report error, got {:?}", r),
        }

        match decode_report(&[0x31, 128, 128, 128], &params) {
            Err(SampleError::MalformedReport(_)) => (),
            r => panic!("Expected a malformed report error, got {:?}", r),
        }
    }

    #[test]
    fn test_poll_unconnected() {
        let mut dev = UsbHidDevice::new(Params::default()).unwrap();

        assert!(!dev.is_connected());
        match dev.poll() {
            Err(SampleError::Disconnected(_)) => (),
            r => panic!("Expected a disconnected error, got {:?}", r),
        }

        // Releasing an unconnected device is a no-op
        dev.release();
        dev.release();
    }

    #[test]
    fn test_new_rejects_zero_timeout() {
        let params = Params {
            read_timeout_ms: 0,
            ..Params::default()
        };

        assert!(matches!(
            UsbHidDevice::new(params),
            Err(ConnectionError::InvalidParams(_))
        ));
    }
}
