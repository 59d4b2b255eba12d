//! Joint activity classification

use super::ActivityLabel;
use crate::device::AxisSample;

/// Mark each joint active if the raw (unfiltered) stick deflection on its axis exceeds
/// `threshold`.
pub fn classify(raw: AxisSample, threshold: u16) -> ActivityLabel {
    ActivityLabel {
        axis1_active: raw.lx.unsigned_abs() > threshold,
        axis2_active: raw.ly.unsigned_abs() > threshold,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::joint_ctrl::filter;

    #[test]
    fn test_classify() {
        let c = |lx, ly| classify(AxisSample { lx, ly }, 30);

        assert_eq!(c(31, 0), ActivityLabel { axis1_active: true, axis2_active: false });
        assert_eq!(c(5, -31), ActivityLabel { axis1_active: false, axis2_active: true });
        assert_eq!(c(30, -30), ActivityLabel::default());
        assert_eq!(
            c(-128, 127),
            ActivityLabel { axis1_active: true, axis2_active: true }
        );
    }

    #[test]
    fn test_classify_ignores_deadzone() {
        // 31 passes the deadzone and 5 passes it too, neither is zeroed, but only 31 is active.
        let raw = AxisSample { lx: 31, ly: 5 };
        assert_eq!(filter(raw, 4), raw);
        assert_eq!(
            classify(raw, 30),
            ActivityLabel { axis1_active: true, axis2_active: false }
        );
    }
}
