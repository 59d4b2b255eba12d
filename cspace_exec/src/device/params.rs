//! Parameters structure for the input device

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters for the USB HID input device.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {

    // ---- IDENTIFICATION ----

    /// USB vendor ID of the controller.
    pub vendor_id: u16,

    /// USB product ID of the controller.
    pub product_id: u16,

    // ---- TIMING ----

    /// Maximum time to wait for a single input report.
    ///
    /// Units: milliseconds
    pub read_timeout_ms: u64,

    // ---- REPORT LAYOUT ----

    /// The report ID expected in the first byte of every input report.
    pub report_id: u8,

    /// Byte offset of the left stick X axis in the report.
    pub lx_byte: usize,

    /// Byte offset of the left stick Y axis in the report.
    pub ly_byte: usize,

    /// Raw value of a stick axis at rest.
    pub stick_centre: u8,
}

impl Default for Params {
    /// DualSense controller over USB.
    fn default() -> Self {
        Self {
            vendor_id: 0x054C,
            product_id: 0x0CE6,
            read_timeout_ms: 50,
            report_id: 0x01,
            lx_byte: 1,
            ly_byte: 2,
            stick_centre: 128,
        }
    }
}

impl Params {
    /// Check the parameters are usable, returning a description of the problem if not.
    pub fn validate(&self) -> Result<(), String> {
        // libusb treats a zero timeout as no timeout at all
        if self.read_timeout_ms == 0 {
            return Err(String::from("read_timeout_ms must be greater than zero"));
        }

        // Byte 0 holds the report ID
        if self.lx_byte == 0 || self.ly_byte == 0 {
            return Err(format!(
                "lx_byte ({}) and ly_byte ({}) must not overlap the report ID byte",
                self.lx_byte, self.ly_byte
            ));
        }

        if self.lx_byte == self.ly_byte {
            return Err(format!("lx_byte and ly_byte are both {}", self.lx_byte));
        }

        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Params::default().validate().is_ok());

        let params: Params = util::params::from_str(
            "vendor_id = 0x054C\n\
             product_id = 0x0CE6\n\
             read_timeout_ms = 0\n\
             report_id = 0x01\n\
             lx_byte = 1\n\
             ly_byte = 2\n\
             stick_centre = 128",
        )
        .unwrap();
        assert!(params.validate().is_err());

        assert!(Params { lx_byte: 0, ..Params::default() }.validate().is_err());
        assert!(Params { ly_byte: 1, ..Params::default() }.validate().is_err());
    }
}
