//! HEALPix tile resolution for HiPS-backed simulation surveys.
//!
//! A click on a HiPS sky map lands on a sky coordinate. This crate turns that
//! coordinate into the address of the catalog tile that describes the region
//! and the row inside it, then into the URLs of the data products (point
//! clouds, cutouts) behind that row.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`tiling`] | [`NestedIndexer`](tiling::NestedIndexer) capability, [`TileResolver`](tiling::TileResolver), tile paths, pixel tracking |
//! | [`survey`] | [`SurveyLayout`](survey::SurveyLayout) URL context, HiPS [`HipsProperties`](survey::HipsProperties) |
//! | [`catalog`] | Tab-separated catalog tiles, [`TileSource`](catalog::TileSource) implementations, row lookup |
//! | [`selection`] | [`Selection`](selection::Selection) payload and the viewer dispatch channel |
//! | [`config`] | [`QueryConfig`](config::QueryConfig) defaults for the command line |
//!
//! # Quick Start
//!
//! ```
//! use jasmine_core::SkyCoordinate;
//! use jasmine_hips::tiling::{catalog_tile_path, TileResolver};
//!
//! let resolver = TileResolver::new();
//! let coord = SkyCoordinate::new(83.633, -5.375).unwrap();
//! let tile = resolver.resolve(&coord, 3, 1).unwrap();
//!
//! assert!(tile.relative_index < 4);
//! let path = catalog_tile_path("surveys/TNG100/interaction_catalog", tile.order, tile.coarse_pixel);
//! assert!(path.ends_with(&format!("Npix{}.tsv", tile.coarse_pixel)));
//! ```
//!
//! # Features
//!
//! - **`http`**: [`catalog::HttpTileSource`] for fetching tiles with `reqwest`.
//! - **`cli`**: The `jasmine-query` binary (implies `http`).

pub mod catalog;
pub mod config;
pub mod selection;
pub mod survey;
pub mod tiling;

pub use selection::Selection;
pub use tiling::{resolve, TileResolution, TileResolver};
