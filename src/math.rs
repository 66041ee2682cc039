//! Math utility functions.

use num_traits::Float;

/// Linear interpolation between `a` and `b` with `t` in [0, 1].
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Returns true if `value` is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon() * (T::one() + T::one()).powi(4)
}

/// Clamp `value` into [0, 1]. NaN maps to zero.
pub fn clamp_unit<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(T::zero()).min(T::one())
    }
}

/// Wrap a hue in degrees into [0, 360). NaN maps to zero.
pub fn wrap_hue<T: Float>(hue: T) -> T {
    if !hue.is_finite() {
        return T::zero();
    }

    let full = T::from(360.0).unwrap_or_else(T::zero);
    let wrapped = hue % full;
    let wrapped = if wrapped < T::zero() {
        wrapped + full
    } else {
        wrapped
    };

    // -1e-9 % 360 + 360 rounds to exactly 360, and -360 % 360 is -0.
    if wrapped >= full || wrapped == T::zero() {
        T::zero()
    } else {
        wrapped
    }
}
