//! Stick deadzone filter

use crate::device::AxisSample;

/// Zero any axis whose magnitude is below `threshold`.
///
/// Values at or above the threshold pass through untouched.
pub fn filter(sample: AxisSample, threshold: u16) -> AxisSample {
    let apply = |v: i16| if v.unsigned_abs() < threshold { 0 } else { v };

    AxisSample {
        lx: apply(sample.lx),
        ly: apply(sample.ly),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_filter() {
        let f = |lx, ly| filter(AxisSample { lx, ly }, 4);

        // Below the threshold
        assert_eq!(f(3, -3), AxisSample { lx: 0, ly: 0 });
        assert_eq!(f(0, 1), AxisSample { lx: 0, ly: 0 });

        // At and above the threshold
        assert_eq!(f(4, -4), AxisSample { lx: 4, ly: -4 });
        assert_eq!(f(-128, 127), AxisSample { lx: -128, ly: 127 });

        // Axes are independent
        assert_eq!(f(-2, 50), AxisSample { lx: 0, ly: 50 });
    }

    #[test]
    fn test_filter_full_range() {
        for v in -128i16..=127 {
            let out = filter(AxisSample { lx: v, ly: -v }, 4);

            if v.abs() >= 4 {
                assert_eq!(out, AxisSample { lx: v, ly: -v });
            }
            else {
                assert_eq!(out, AxisSample { lx: 0, ly: 0 });
            }
        }
    }
}
