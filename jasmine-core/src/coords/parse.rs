//! Parsing of user-supplied right ascension and declination strings.
//!
//! Right ascension accepts sexagesimal hours or decimal degrees:
//!
//! ```text
//! Colon-separated:  18:36:56.3
//! Letter markers:   18h36m56.3s
//! Decimal degrees:  279.2347
//! ```
//!
//! Declination accepts sexagesimal degrees or decimal degrees:
//!
//! ```text
//! Colon-separated:  +38:47:01
//! Letter markers:   -5d22m30s   or   +38d 47' 01"
//! Decimal degrees:  38.7837
//! ```
//!
//! Signs are only valid at the beginning.
//!
//! ```
//! use jasmine_core::coords::{parse_dec, parse_ra};
//!
//! assert!((parse_ra("12h00m00s").unwrap() - 180.0).abs() < 1e-12);
//! assert!((parse_dec("-5:30:00").unwrap() + 5.5).abs() < 1e-12);
//! assert_eq!(parse_ra("83.633").unwrap(), 83.633);
//! ```

use crate::errors::{JasmineError, JasmineResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COLON_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*([+-])?(\d{1,3}):(\d{1,2}):(\d{1,2}(?:\.\d+)?)\s*$"#)
        .expect("colon regex is valid")
});

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        ([+-])?                 # optional sign
        (\d{1,3})\s*h\s*        # hours
        (\d{1,2})\s*m\s*        # minutes
        (\d{1,2}(?:\.\d+)?)     # seconds
        \s*s?\s*$
        "#,
    )
    .expect("HMS regex is valid")
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        ([+-])?                 # optional sign
        (\d{1,3})\s*[d°]\s*     # degrees
        (\d{1,2})\s*['m]\s*     # arcminutes
        (\d{1,2}(?:\.\d+)?)     # arcseconds
        \s*(?:"|''|s)?\s*$
        "#,
    )
    .expect("DMS regex is valid")
});

/// Parses a right ascension into degrees. Sexagesimal input is read as hours.
pub fn parse_ra(s: &str) -> JasmineResult<f64> {
    if let Some(caps) = COLON_REGEX
        .captures(s)
        .or_else(|| HMS_REGEX.captures(s))
    {
        return sexagesimal(&caps, s).map(|hours| hours * 15.0);
    }
    parse_decimal(s, "parse_ra")
}

/// Parses a declination into degrees. Sexagesimal input is read as degrees.
pub fn parse_dec(s: &str) -> JasmineResult<f64> {
    if let Some(caps) = COLON_REGEX
        .captures(s)
        .or_else(|| DMS_REGEX.captures(s))
    {
        return sexagesimal(&caps, s);
    }
    parse_decimal(s, "parse_dec")
}

fn parse_decimal(s: &str, context: &str) -> JasmineResult<f64> {
    s.trim().parse::<f64>().map_err(|_| {
        JasmineError::parse_error(context, &format!("Cannot parse '{}' as an angle", s))
    })
}

fn sexagesimal(caps: &Captures, original: &str) -> JasmineResult<f64> {
    let sign = caps
        .get(1)
        .map_or(1.0, |m| if m.as_str() == "-" { -1.0 } else { 1.0 });

    let field = |i: usize| -> JasmineResult<f64> {
        caps[i].parse::<f64>().map_err(|_| {
            JasmineError::parse_error(
                "sexagesimal",
                &format!("Bad field '{}' in '{}'", &caps[i], original),
            )
        })
    };

    let (units, minutes, seconds) = (field(2)?, field(3)?, field(4)?);
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(JasmineError::parse_error(
            "sexagesimal",
            &format!("Minutes and seconds must be below 60 in '{}'", original),
        ));
    }

    Ok(sign * (units + minutes / 60.0 + seconds / 3600.0))
}
