//! Foundation types for the Jasmine HiPS viewer crates.
//!
//! Everything here is free of HEALPix specifics: validated sky coordinates,
//! angle normalization and parsing, shared constants, and the workspace-wide
//! error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`coords`] | [`SkyCoordinate`], validation, normalization, sexagesimal parsing |
//! | [`errors`] | [`JasmineError`] and [`JasmineResult`] |
//! | [`constants`] | Angular constants and HEALPix/HiPS limits |
//!
//! # Quick Start
//!
//! ```
//! use jasmine_core::SkyCoordinate;
//!
//! let coord = SkyCoordinate::new(83.633, -5.375).unwrap();
//! let (theta, phi) = coord.to_colatitude_longitude();
//! assert!(theta > 0.0 && phi > 0.0);
//!
//! assert!(SkyCoordinate::new(0.0, 90.0001).is_err());
//! ```

pub mod constants;
pub mod coords;
pub mod errors;
pub mod math;

pub use coords::SkyCoordinate;
pub use errors::{JasmineError, JasmineResult};
