//! Sky-to-tile index resolution.
//!
//! - [`indexer`]: the NESTED indexing capability and its `cdshealpix` implementation
//! - [`resolver`]: coarse pixel plus relative sub-pixel index for a coordinate
//! - [`locator`]: HiPS file paths for catalog and image tiles
//! - [`tracker`]: change detection for pointer-driven pixel lookups

pub mod indexer;
pub mod locator;
pub mod resolver;
pub mod tracker;

pub use indexer::{npix, nside, CdsIndexer, NestedIndexer};
pub use locator::{allsky_path, catalog_tile_path, hips_dir, image_tile_path};
pub use resolver::{resolve, TileResolution, TileResolver};
pub use tracker::PixelTracker;
