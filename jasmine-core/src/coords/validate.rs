use crate::errors::{JasmineError, JasmineResult};

/// Checks that right ascension is finite. Any finite value is accepted and
/// wrapped later.
pub fn validate_right_ascension(ra_deg: f64, dec_deg: f64) -> JasmineResult<f64> {
    if ra_deg.is_finite() {
        return Ok(ra_deg);
    }

    Err(JasmineError::invalid_coordinate(
        ra_deg,
        dec_deg,
        "RA not finite",
    ))
}

/// Checks that declination is finite and inside [-90°, +90°], poles included.
pub fn validate_declination(ra_deg: f64, dec_deg: f64) -> JasmineResult<f64> {
    if !dec_deg.is_finite() {
        return Err(JasmineError::invalid_coordinate(
            ra_deg,
            dec_deg,
            "Dec not finite",
        ));
    }

    if (-90.0..=90.0).contains(&dec_deg) {
        return Ok(dec_deg);
    }

    Err(JasmineError::invalid_coordinate(
        ra_deg,
        dec_deg,
        &format!("Dec {:.4}° out of range [-90°, +90°]", dec_deg),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_right_ascension() {
        assert!(validate_right_ascension(45.0, 0.0).is_ok());
        assert!(validate_right_ascension(-720.0, 0.0).is_ok());
        assert!(validate_right_ascension(f64::NAN, 0.0).is_err());
        assert!(validate_right_ascension(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_validate_declination() {
        assert!(validate_declination(0.0, 45.0).is_ok());
        assert!(validate_declination(0.0, 90.0).is_ok());
        assert!(validate_declination(0.0, -90.0).is_ok());

        assert!(validate_declination(0.0, 90.0001).is_err());
        assert!(validate_declination(0.0, -95.0).is_err());
        assert!(validate_declination(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_out_of_range_reason() {
        match validate_declination(12.0, 95.0) {
            Err(JasmineError::InvalidCoordinate { ra, dec, reason }) => {
                assert_eq!(ra, 12.0);
                assert_eq!(dec, 95.0);
                assert!(reason.contains("out of range"));
            }
            other => panic!("Expected InvalidCoordinate, got {:?}", other),
        }
    }
}
