use crate::core::types::Number;
use num_traits::{Float, FloatConst};

/// Square root of two, as a [Number]
pub const SQRT_2: Number = std::f32::consts::SQRT_2;
/// Your favourite constant, as a [Number]
pub const PI: Number = std::f32::consts::PI;

/// Clamps a value into the range `min..=max`.
///
/// Values below the range return `min`, values above return `max`
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T { T::max(min, T::min(value, max)) }

/// Converts an angle in degrees into radians
pub fn to_radians<T: Float>(degrees: T) -> T { degrees.to_radians() }

/// Normalises an angle in radians into the range `0..2π`
///
/// Non-finite angles are returned as-is, since they can't be wrapped
pub fn normalize_angle<T: Float + FloatConst>(angle: T) -> T {
    if !angle.is_finite() {
        return angle;
    }

    let tau = T::TAU();
    let wrapped = angle % tau;
    // `%` keeps the sign of the dividend
    let wrapped = if wrapped < T::zero() { wrapped + tau } else { wrapped };
    // Tiny negatives can round back up to exactly `tau`
    if wrapped >= tau {
        T::zero()
    } else {
        wrapped
    }
}

/// Square root that reports negative input as NaN, rather than as a real value
///
/// This is the same as [Float::sqrt], but spelled out since the sphere solver relies on it
pub fn sqrt<T: Float>(x: T) -> T {
    if x < T::zero() {
        T::nan()
    } else {
        x.sqrt()
    }
}

/// The real roots of `a·t² + b·t + c = 0`, in ascending order.
///
/// Returns [None] when the discriminant is negative (no real roots). A zero discriminant is a
/// tangent, and gives the same root twice.
///
/// # Requirements
/// `a` must be positive, so that the roots come out ordered
pub fn quadratic_roots(a: Number, b: Number, c: Number) -> Option<(Number, Number)> {
    // Works with `b/2`, so `b²` and `4ac` are never formed on their own
    let half_b = b * 0.5;
    let discriminant = (half_b * half_b) - (a * c);
    let sqrt_d = sqrt(discriminant);

    // Negative (or NaN) discriminant, so no real solutions
    if sqrt_d.is_nan() {
        return None;
    }

    let t1 = (-half_b - sqrt_d) / a;
    let t2 = (-half_b + sqrt_d) / a;
    Some((t1, t2))
}
