//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()`, violating the mathematical definition, if
/// `self` is much smaller than `rhs.abs()` in magnitude and `self < 0.0`.
/// This result is not an element of the function's codomain, but it is the
/// closest floating point number in the real numbers and thus fulfills the
/// property `self == self.div_euclid(rhs) * rhs + self.rem_euclid(rhs)`
/// approximatively.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float
{
    let r = lhs % rhs;
    if r < T::zero() { r + rhs.abs() } else { r }
}

/// Wrap a value into the half open range `[min, max)`.
///
/// The value is computed as `rem_euclid(value - min, max - min) + min`, and
/// then checked against the range again, since the round-off case of
/// `rem_euclid` described above (or the addition of `min`) can land exactly
/// on `max`. Any value already inside the range is returned untouched, which
/// makes the wrap idempotent.
///
/// Non-finite values cannot be wrapped and are returned as they are.
pub fn wrap_half_open<T>(value: T, min: T, max: T) -> T
where
    T: Float
{
    if (value >= min && value < max) || !value.is_finite() {
        return value;
    }

    let wrapped = rem_euclid(value - min, max - min) + min;

    // `max` is equivalent to `min` in a half open range
    if wrapped >= max || wrapped < min {
        min
    }
    else {
        wrapped
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TAU: f64 = std::f64::consts::TAU;

    #[test]
    fn test_rem_euclid() {
        assert_eq!(rem_euclid(5f64, 3f64), 2f64);
        assert_eq!(rem_euclid(-1f64, 3f64), 2f64);
        assert_eq!(rem_euclid(-3f64, 3f64), 0f64);
        assert_eq!(rem_euclid(0f64, 3f64), 0f64);
    }

    #[test]
    fn test_wrap_half_open() {
        assert_eq!(wrap_half_open(TAU, -TAU, TAU), -TAU);
        assert_eq!(wrap_half_open(-TAU, -TAU, TAU), -TAU);
        assert_eq!(wrap_half_open(0.5, -TAU, TAU), 0.5);
        assert_eq!(wrap_half_open(3.0 * TAU, -TAU, TAU), -TAU);

        let w = wrap_half_open(TAU + 0.25, -TAU, TAU);
        assert!((w - (-TAU + 0.25)).abs() < 1e-12);

        let w = wrap_half_open(-TAU - 0.25, -TAU, TAU);
        assert!((w - (TAU - 0.25)).abs() < 1e-12);

        // Round-off: a tiny negative offset from min must not produce max
        let w = wrap_half_open(-TAU - 1e-17, -TAU, TAU);
        assert!(w >= -TAU && w < TAU);

        assert!(wrap_half_open(f64::NAN, -TAU, TAU).is_nan());
    }
}
