//! Wrapping of cyclic angles.
//!
//! Right ascension is cyclic, so any finite value maps onto one direction on
//! the sky. HEALPix expects the longitude `phi` in [0, 2π); RA values from a
//! sky viewer can arrive negative (west of the origin) or past 360°.
//!
//! `libm::fmod` (via [`crate::math::fmod`]) keeps the sign of the dividend, so
//! a negative remainder is shifted up by one full turn afterwards.

use crate::constants::TWOPI;
use crate::math::fmod;

/// Wraps an angle to [0, 2π) radians.
///
/// ```
/// use jasmine_core::coords::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    wrap_positive(x, TWOPI)
}

/// Wraps an angle to [0, 360) degrees.
#[inline]
pub fn wrap_0_360(x: f64) -> f64 {
    wrap_positive(x, 360.0)
}

#[inline]
fn wrap_positive(x: f64, period: f64) -> f64 {
    let w = fmod(x, period);
    let w = if w < 0.0 { w + period } else { w };
    // -tiny + period rounds up to period itself
    if w >= period {
        0.0
    } else {
        w
    }
}
