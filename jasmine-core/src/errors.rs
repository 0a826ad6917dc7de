//! Error types for tile resolution and survey access.
//!
//! This module provides a unified error type [`JasmineError`] covering the
//! failure modes of the workspace: bad user coordinates, a broken indexing
//! capability, unsupported orders, malformed survey files, and data access.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`InvalidCoordinate`](JasmineError::InvalidCoordinate) | Declination out of range, non-finite input | No |
//! | [`IndexResolution`](JasmineError::IndexResolution) | Indexer broke the NESTED parent/child contract | No |
//! | [`InvalidOrder`](JasmineError::InvalidOrder) | Order (plus depth) beyond the supported range | No |
//! | [`Parse`](JasmineError::Parse) | Malformed properties, catalog tiles, angles | No |
//! | [`Data`](JasmineError::Data) | File or network access | Yes |
//! | [`RowNotFound`](JasmineError::RowNotFound) | Relative index past the end of a tile | No |
//! | [`ChannelClosed`](JasmineError::ChannelClosed) | Viewer went away before a selection was delivered | Yes |
//!
//! # Usage
//!
//! ```
//! use jasmine_core::{JasmineError, JasmineResult};
//!
//! fn checked_dec(dec: f64) -> JasmineResult<f64> {
//!     if !(-90.0..=90.0).contains(&dec) {
//!         return Err(JasmineError::invalid_coordinate(0.0, dec, "declination out of range"));
//!     }
//!     Ok(dec)
//! }
//!
//! assert!(checked_dec(91.0).is_err());
//! ```

use thiserror::Error;

/// Unified error type for the Jasmine crates.
#[derive(Error, Debug)]
pub enum JasmineError {
    /// Sky coordinate rejected before any index computation.
    #[error("Invalid coordinate (ra={ra}, dec={dec}): {reason}")]
    InvalidCoordinate { ra: f64, dec: f64, reason: String },

    /// Coarse and fine pixel indices disagree.
    ///
    /// A correct NESTED indexer never produces this; it signals a contract
    /// break in the supplied capability and is never clamped away.
    #[error(
        "Index resolution failed at order {order} depth {depth}: coarse pixel {coarse}, \
         fine pixel {fine}, relative index {relative} outside [0, 4^{depth})"
    )]
    IndexResolution {
        order: u8,
        depth: u8,
        coarse: u64,
        fine: u64,
        relative: i64,
    },

    /// HEALPix order outside the supported range.
    #[error("Invalid HEALPix order {order}: maximum is {max}")]
    InvalidOrder { order: u32, max: u8 },

    /// Malformed input text.
    #[error("Parse error in {context}: {message}")]
    Parse { context: String, message: String },

    /// File or network access failure.
    ///
    /// The only variant where a retry or fallback source may succeed.
    #[error("Data error ({source_name}): {message}")]
    Data {
        source_name: String,
        message: String,
    },

    /// Catalog tile has no row for the requested relative index.
    #[error("No row {index} in catalog tile {url}")]
    RowNotFound { url: String, index: u64 },

    /// The receiving end of a selection channel was dropped.
    #[error("Selection channel closed")]
    ChannelClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, JasmineError>`.
pub type JasmineResult<T> = Result<T, JasmineError>;

impl JasmineError {
    /// Creates an [`InvalidCoordinate`](Self::InvalidCoordinate) error.
    pub fn invalid_coordinate(ra: f64, dec: f64, reason: &str) -> Self {
        Self::InvalidCoordinate {
            ra,
            dec,
            reason: reason.to_string(),
        }
    }

    /// Creates a [`Parse`](Self::Parse) error.
    pub fn parse_error(context: &str, message: &str) -> Self {
        Self::Parse {
            context: context.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a [`Data`](Self::Data) error.
    pub fn data_error(source_name: &str, message: &str) -> Self {
        Self::Data {
            source_name: source_name.to_string(),
            message: message.to_string(),
        }
    }

    /// Returns `true` if retrying or using a fallback might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Data { .. } | Self::Io(_) | Self::ChannelClosed
        )
    }
}
