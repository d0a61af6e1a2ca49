//! Degree-based trigonometry and angle helpers for the low-precision solar model.
//!
//! Degree/radian conversions are rounded to 5 decimal places, and so is angle
//! normalization. The published reference values of the model were produced
//! with this rounding, so results depend on it bit for bit.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Decimal places kept by conversions and normalization.
const ROUNDING_SCALE: f64 = 1e5;

/// Rounds a value to 5 decimal places (half away from zero).
#[inline]
pub fn round_5(x: f64) -> f64 {
    round(x * ROUNDING_SCALE) / ROUNDING_SCALE
}

/// Converts degrees to radians, rounded to 5 decimals.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    round_5(degrees * PI / 180.0)
}

/// Converts radians to degrees, rounded to 5 decimals.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    round_5(radians * 180.0 / PI)
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arccotangent in degrees, `atan(1/x)`.
#[inline]
pub fn acot_deg(x: f64) -> f64 {
    radians_to_degrees(atan(1.0 / x))
}

/// Four-quadrant arctangent of `y/x` in degrees.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    radians_to_degrees(atan2(y, x))
}

/// Normalizes an angle into `[lower, upper)`, rounded to 5 decimals.
///
/// Uses a double remainder so negative inputs wrap the same way as positive ones.
pub fn normalize_in(theta: f64, lower: f64, upper: f64) -> f64 {
    let range = upper - lower;
    round_5(((theta - lower) % range + range) % range + lower)
}

/// Normalizes an angle in degrees to the range [0, 360).
#[inline]
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    normalize_in(degrees, 0.0, 360.0)
}

/// Converts degrees to an hour angle (15° per hour).
#[inline]
pub fn degrees_to_hours(degrees: f64) -> f64 {
    degrees / 15.0
}

/// Computes |x| using the appropriate function for the compilation target.
#[inline]
pub fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes ceil(x) using the appropriate function for the compilation target.
#[inline]
pub fn ceil(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ceil();

    #[cfg(not(feature = "std"))]
    return libm::ceil(x);
}

/// Rounds half away from zero using the appropriate function for the compilation target.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}
