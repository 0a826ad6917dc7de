//! Sky positions in the equatorial frame.
//!
//! A [`SkyCoordinate`] can only be built through validation, so any value in
//! hand has a finite right ascension and a declination inside [-90°, +90°].
//! Conversion to HEALPix spherical angles (co-latitude `theta`, longitude
//! `phi`) happens here so every caller uses the same convention.

mod normalize;
mod parse;
mod validate;

pub use normalize::{wrap_0_2pi, wrap_0_360};
pub use parse::{parse_dec, parse_ra};
pub use validate::{validate_declination, validate_right_ascension};

use crate::constants::{DEG_TO_RAD, HALF_PI, PI};
use crate::errors::{JasmineError, JasmineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Right ascension and declination in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct SkyCoordinate {
    ra_deg: f64,
    dec_deg: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    ra_deg: f64,
    dec_deg: f64,
}

impl TryFrom<RawCoordinate> for SkyCoordinate {
    type Error = JasmineError;

    fn try_from(raw: RawCoordinate) -> JasmineResult<Self> {
        Self::new(raw.ra_deg, raw.dec_deg)
    }
}

impl SkyCoordinate {
    /// Validates and builds a coordinate.
    ///
    /// # Errors
    /// [`JasmineError::InvalidCoordinate`] if either value is non-finite or
    /// the declination lies outside [-90°, +90°]. The poles themselves are
    /// accepted.
    pub fn new(ra_deg: f64, dec_deg: f64) -> JasmineResult<Self> {
        validate_right_ascension(ra_deg, dec_deg)?;
        validate_declination(ra_deg, dec_deg)?;
        Ok(Self { ra_deg, dec_deg })
    }

    /// Right ascension as supplied, in degrees.
    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    /// Right ascension wrapped to [0°, 360°).
    pub fn ra_normalized_deg(&self) -> f64 {
        wrap_0_360(self.ra_deg)
    }

    /// HEALPix spherical angles `(theta, phi)` in radians.
    ///
    /// `theta = π/2 - dec` lies in [0, π]; `phi = ra` is wrapped to [0, 2π).
    pub fn to_colatitude_longitude(&self) -> (f64, f64) {
        let theta = (HALF_PI - self.dec_deg * DEG_TO_RAD).clamp(0.0, PI);
        let phi = wrap_0_2pi(self.ra_deg * DEG_TO_RAD);
        (theta, phi)
    }
}

impl fmt::Display for SkyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA={:.6}° Dec={:+.6}°", self.ra_deg, self.dec_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TWOPI;

    #[test]
    fn test_equator_origin_angles() {
        let coord = SkyCoordinate::new(0.0, 0.0).unwrap();
        let (theta, phi) = coord.to_colatitude_longitude();
        assert!((theta - HALF_PI).abs() < 1e-15);
        assert_eq!(phi, 0.0);
    }

    #[test]
    fn test_poles_are_valid() {
        let north = SkyCoordinate::new(0.0, 90.0).unwrap();
        let south = SkyCoordinate::new(0.0, -90.0).unwrap();
        assert!(north.to_colatitude_longitude().0.abs() < 1e-15);
        assert!((south.to_colatitude_longitude().0 - PI).abs() < 1e-15);
    }

    #[test]
    fn test_beyond_pole_rejected() {
        let result = SkyCoordinate::new(0.0, 90.0001);
        assert!(matches!(
            result,
            Err(JasmineError::InvalidCoordinate { .. })
        ));
        assert!(SkyCoordinate::new(0.0, -90.0001).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(SkyCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(SkyCoordinate::new(0.0, f64::NAN).is_err());
        assert!(SkyCoordinate::new(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_negative_ra_wraps() {
        let coord = SkyCoordinate::new(-90.0, 10.0).unwrap();
        assert!((coord.ra_normalized_deg() - 270.0).abs() < 1e-12);
        let (_, phi) = coord.to_colatitude_longitude();
        assert!((0.0..TWOPI).contains(&phi));
        assert!((phi - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_ra_above_full_circle_wraps() {
        let coord = SkyCoordinate::new(450.0, 0.0).unwrap();
        assert!((coord.ra_normalized_deg() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: SkyCoordinate =
            serde_json::from_str(r#"{"ra_deg": 12.5, "dec_deg": -30.0}"#).unwrap();
        assert_eq!(ok.ra_deg(), 12.5);

        let bad = serde_json::from_str::<SkyCoordinate>(r#"{"ra_deg": 0.0, "dec_deg": 100.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        let coord = SkyCoordinate::new(83.633, -5.375).unwrap();
        assert_eq!(coord.to_string(), "RA=83.633000° Dec=-5.375000°");
    }
}
