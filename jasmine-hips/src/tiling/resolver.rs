//! Coarse tile and relative sub-pixel for a sky coordinate.
//!
//! A catalog tile at order `o` stores one row per child pixel at order
//! `o + h`, in NESTED order. Resolving a coordinate therefore takes two
//! indexer calls: the coarse pixel names the tile, and the fine pixel minus
//! `4^h · coarse` is the row inside it.
//!
//! ```text
//!   order o      ┌───────────┐        coarse = 5
//!                │     5     │
//!   order o+1    ├─────┬─────┤        fine ∈ {20, 21, 22, 23}
//!                │ 20  │ 21  │        relative = fine - 4·5 ∈ [0, 4)
//!                │ 22  │ 23  │
//!                └─────┴─────┘
//! ```

use super::indexer::{check_order, CdsIndexer, NestedIndexer};
use jasmine_core::constants::BASE_PIXELS;
use jasmine_core::{JasmineError, JasmineResult, SkyCoordinate};
use serde::Serialize;

/// Outcome of resolving one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileResolution {
    pub order: u8,
    pub hierarchy_depth: u8,
    /// NESTED pixel at `order`; names the catalog tile.
    pub coarse_pixel: u64,
    /// Index of the fine pixel among the `4^hierarchy_depth` children of the
    /// coarse pixel. Zero when `hierarchy_depth == 0`.
    pub relative_index: u64,
}

impl TileResolution {
    /// Line of the catalog tile holding this pixel's row (line 0 is the header).
    pub fn tile_line(&self) -> u64 {
        self.relative_index + 1
    }
}

/// Resolves coordinates through an injected [`NestedIndexer`].
///
/// Stateless apart from the indexer; repeated calls with the same inputs
/// return the same result.
#[derive(Debug, Clone, Default)]
pub struct TileResolver<I = CdsIndexer> {
    indexer: I,
}

impl TileResolver<CdsIndexer> {
    pub fn new() -> Self {
        Self {
            indexer: CdsIndexer,
        }
    }
}

impl<I: NestedIndexer> TileResolver<I> {
    pub fn with_indexer(indexer: I) -> Self {
        Self { indexer }
    }

    pub fn indexer(&self) -> &I {
        &self.indexer
    }

    /// Resolves raw degrees, validating them first.
    ///
    /// # Errors
    /// [`JasmineError::InvalidCoordinate`] for non-finite input or a
    /// declination outside [-90°, +90°]; otherwise as [`Self::resolve`].
    pub fn resolve_radec(
        &self,
        ra_deg: f64,
        dec_deg: f64,
        order: u8,
        hierarchy_depth: u8,
    ) -> JasmineResult<TileResolution> {
        let coord = SkyCoordinate::new(ra_deg, dec_deg)?;
        self.resolve(&coord, order, hierarchy_depth)
    }

    /// Finds the coarse pixel at `order` containing `coord` and the relative
    /// index of the pixel at `order + hierarchy_depth` inside it.
    ///
    /// # Errors
    /// - [`JasmineError::InvalidOrder`] if `order + hierarchy_depth` exceeds
    ///   the deepest supported order.
    /// - [`JasmineError::IndexResolution`] if the indexer returns a coarse
    ///   pixel out of range or a fine pixel that is not a child of it.
    pub fn resolve(
        &self,
        coord: &SkyCoordinate,
        order: u8,
        hierarchy_depth: u8,
    ) -> JasmineResult<TileResolution> {
        check_order(order as u32 + hierarchy_depth as u32)?;

        let (theta, phi) = coord.to_colatitude_longitude();
        let coarse = self.indexer.ang2pix_nest(1u32 << order, theta, phi);

        let coarse_count = BASE_PIXELS << (2 * order as u32);
        if coarse >= coarse_count {
            return Err(JasmineError::IndexResolution {
                order,
                depth: hierarchy_depth,
                coarse,
                fine: coarse,
                relative: 0,
            });
        }

        if hierarchy_depth == 0 {
            log::debug!("{} -> order {} pixel {}", coord, order, coarse);
            return Ok(TileResolution {
                order,
                hierarchy_depth,
                coarse_pixel: coarse,
                relative_index: 0,
            });
        }

        let shift = 2 * hierarchy_depth as u32;
        let fine = self
            .indexer
            .ang2pix_nest(1u32 << (order + hierarchy_depth), theta, phi);

        // coarse < 12·4^order, so first_child < 12·4^29 and cannot overflow
        let first_child = coarse << shift;
        let relative = match fine
            .checked_sub(first_child)
            .filter(|r| *r < 1u64 << shift)
        {
            Some(relative) => relative,
            None => {
                let offset = fine as i128 - first_child as i128;
                return Err(JasmineError::IndexResolution {
                    order,
                    depth: hierarchy_depth,
                    coarse,
                    fine,
                    relative: i64::try_from(offset).unwrap_or(i64::MAX),
                });
            }
        };

        log::debug!(
            "{} -> order {} pixel {} child {} of {}",
            coord,
            order,
            coarse,
            relative,
            1u64 << shift
        );

        Ok(TileResolution {
            order,
            hierarchy_depth,
            coarse_pixel: coarse,
            relative_index: relative,
        })
    }
}

/// Resolves with the default `cdshealpix` indexer.
///
/// Returns `(coarse_pixel, relative_index)`.
pub fn resolve(
    coord: &SkyCoordinate,
    order: u8,
    hierarchy_depth: u8,
) -> JasmineResult<(u64, u64)> {
    TileResolver::new()
        .resolve(coord, order, hierarchy_depth)
        .map(|t| (t.coarse_pixel, t.relative_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jasmine_core::constants::MAX_ORDER;
    use std::cell::Cell;

    fn grid() -> Vec<SkyCoordinate> {
        let mut coords = Vec::new();
        for dec in [-90.0, -89.5, -60.0, -41.81, -10.0, 0.0, 10.0, 41.81, 60.0, 89.5, 90.0] {
            for ra in [0.0, 1.0, 44.9, 45.0, 90.0, 135.0, 200.0, 270.0, 359.999] {
                coords.push(SkyCoordinate::new(ra, dec).unwrap());
            }
        }
        coords
    }

    /// Returns a fixed answer per nside, ignoring the direction.
    struct FixedIndexer {
        coarse_nside: u32,
        coarse: u64,
        fine: u64,
    }

    impl NestedIndexer for FixedIndexer {
        fn ang2pix_nest(&self, nside: u32, _theta: f64, _phi: f64) -> u64 {
            if nside == self.coarse_nside {
                self.coarse
            } else {
                self.fine
            }
        }
    }

    struct CountingIndexer {
        calls: Cell<u32>,
    }

    impl NestedIndexer for CountingIndexer {
        fn ang2pix_nest(&self, nside: u32, theta: f64, phi: f64) -> u64 {
            self.calls.set(self.calls.get() + 1);
            CdsIndexer.ang2pix_nest(nside, theta, phi)
        }
    }

    #[test]
    fn test_depth_zero_matches_indexer() {
        let resolver = TileResolver::new();
        for coord in grid() {
            for order in [0u8, 1, 3, 7] {
                let (theta, phi) = coord.to_colatitude_longitude();
                let direct = CdsIndexer.ang2pix_nest(1 << order, theta, phi);
                let tile = resolver.resolve(&coord, order, 0).unwrap();
                assert_eq!(tile.coarse_pixel, direct);
                assert_eq!(tile.relative_index, 0);
            }
        }
    }

    #[test]
    fn test_relative_index_in_range() {
        let resolver = TileResolver::new();
        for coord in grid() {
            for depth in 1u8..=4 {
                let tile = resolver.resolve(&coord, 2, depth).unwrap();
                assert!(tile.relative_index < 1u64 << (2 * depth as u32));
            }
        }
    }

    #[test]
    fn test_consistent_with_finer_order() {
        let resolver = TileResolver::new();
        for coord in grid() {
            for (order, depth) in [(0u8, 1u8), (3, 1), (3, 2), (5, 3)] {
                let tile = resolver.resolve(&coord, order, depth).unwrap();
                let fine = resolver.resolve(&coord, order + depth, 0).unwrap();
                let divisor = 1u64 << (2 * depth as u32);
                assert_eq!(tile.coarse_pixel, fine.coarse_pixel / divisor);
                assert_eq!(tile.relative_index, fine.coarse_pixel % divisor);
            }
        }
    }

    #[test]
    fn test_origin_at_order_zero() {
        let (coarse, relative) = resolve(&SkyCoordinate::new(0.0, 0.0).unwrap(), 0, 1).unwrap();
        assert!(coarse < 12);
        assert!(relative < 4);
    }

    #[test]
    fn test_poles_resolve() {
        let resolver = TileResolver::new();
        assert!(resolver.resolve_radec(0.0, 90.0, 3, 1).is_ok());
        assert!(resolver.resolve_radec(123.0, -90.0, 3, 1).is_ok());
    }

    #[test]
    fn test_invalid_coordinate() {
        let resolver = TileResolver::new();
        assert!(matches!(
            resolver.resolve_radec(0.0, 90.0001, 3, 1),
            Err(JasmineError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            resolver.resolve_radec(f64::NAN, 0.0, 3, 1),
            Err(JasmineError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let resolver = TileResolver::new();
        let coord = SkyCoordinate::new(217.3, -33.2).unwrap();
        let a = resolver.resolve(&coord, 4, 2).unwrap();
        let b = resolver.resolve(&coord, 4, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_plus_depth_limit() {
        let resolver = TileResolver::new();
        let coord = SkyCoordinate::new(10.0, 10.0).unwrap();
        assert!(resolver.resolve(&coord, MAX_ORDER, 0).is_ok());
        assert!(resolver.resolve(&coord, 28, 1).is_ok());
        assert!(matches!(
            resolver.resolve(&coord, 28, 2),
            Err(JasmineError::InvalidOrder { order: 30, .. })
        ));
    }

    #[test]
    fn test_fine_pixel_outside_parent_is_error() {
        let resolver = TileResolver::with_indexer(FixedIndexer {
            coarse_nside: 2,
            coarse: 5,
            fine: 3,
        });
        match resolver.resolve(&SkyCoordinate::new(0.0, 0.0).unwrap(), 1, 1) {
            Err(JasmineError::IndexResolution {
                coarse,
                fine,
                relative,
                ..
            }) => {
                assert_eq!(coarse, 5);
                assert_eq!(fine, 3);
                assert_eq!(relative, -17);
            }
            other => panic!("Expected IndexResolution, got {:?}", other),
        }
    }

    #[test]
    fn test_fine_pixel_past_last_child_is_error() {
        let resolver = TileResolver::with_indexer(FixedIndexer {
            coarse_nside: 2,
            coarse: 5,
            fine: 24,
        });
        let result = resolver.resolve(&SkyCoordinate::new(0.0, 0.0).unwrap(), 1, 1);
        assert!(matches!(
            result,
            Err(JasmineError::IndexResolution { relative: 4, .. })
        ));
    }

    #[test]
    fn test_huge_fine_pixel_is_error() {
        let resolver = TileResolver::with_indexer(FixedIndexer {
            coarse_nside: 2,
            coarse: 5,
            fine: 1 << 63,
        });
        match resolver.resolve(&SkyCoordinate::new(0.0, 0.0).unwrap(), 1, 1) {
            Err(JasmineError::IndexResolution { fine, relative, .. }) => {
                assert_eq!(fine, 1 << 63);
                assert_eq!(relative, i64::MAX - 19);
            }
            other => panic!("Expected IndexResolution, got {:?}", other),
        }

        let resolver = TileResolver::with_indexer(FixedIndexer {
            coarse_nside: 2,
            coarse: 5,
            fine: u64::MAX,
        });
        let result = resolver.resolve(&SkyCoordinate::new(0.0, 0.0).unwrap(), 1, 1);
        assert!(matches!(
            result,
            Err(JasmineError::IndexResolution { relative: i64::MAX, .. })
        ));
    }

    #[test]
    fn test_coarse_pixel_out_of_range_is_error() {
        let resolver = TileResolver::with_indexer(FixedIndexer {
            coarse_nside: 1,
            coarse: 12,
            fine: 48,
        });
        let result = resolver.resolve(&SkyCoordinate::new(0.0, 0.0).unwrap(), 0, 1);
        assert!(matches!(result, Err(JasmineError::IndexResolution { .. })));
    }

    #[test]
    fn test_depth_zero_skips_fine_lookup() {
        let resolver = TileResolver::with_indexer(CountingIndexer {
            calls: Cell::new(0),
        });
        let coord = SkyCoordinate::new(45.0, 45.0).unwrap();
        resolver.resolve(&coord, 3, 0).unwrap();
        assert_eq!(resolver.indexer().calls.get(), 1);
        resolver.resolve(&coord, 3, 2).unwrap();
        assert_eq!(resolver.indexer().calls.get(), 3);
    }

    #[test]
    fn test_tile_line_skips_header() {
        let tile = TileResolution {
            order: 3,
            hierarchy_depth: 1,
            coarse_pixel: 17,
            relative_index: 2,
        };
        assert_eq!(tile.tile_line(), 3);
    }
}
