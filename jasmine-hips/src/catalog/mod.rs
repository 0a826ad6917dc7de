//! Catalog tiles and where to get them.
//!
//! A catalog tile (`Norder*/Dir0/Npix*.tsv`) is a tab-separated table with a
//! header row. Data row `k` describes child pixel `k` of the tile's coarse
//! pixel, so the relative index from the resolver is the row number.
//!
//! - [`tile`]: parsing tiles, [`CatalogRow`] access by column name
//! - [`source`]: [`TileSource`] implementations and [`lookup`]

pub mod source;
pub mod tile;

#[cfg(feature = "http")]
pub use source::HttpTileSource;
pub use source::{lookup, CatalogEntry, FsTileSource, TileSource};
pub use tile::{CatalogRow, CatalogTile, DEFAULT_ID_COLUMN};
