use super::indexer::{CdsIndexer, NestedIndexer};
use super::resolver::TileResolver;
use jasmine_core::{JasmineResult, SkyCoordinate};

/// Remembers the pixel under the pointer and reports only changes.
///
/// Pointer-motion handlers fire far more often than the pixel under the
/// pointer changes; downstream loads should only run on a change.
#[derive(Debug, Default)]
pub struct PixelTracker<I = CdsIndexer> {
    resolver: TileResolver<I>,
    current: Option<(u8, u64)>,
}

impl PixelTracker<CdsIndexer> {
    pub fn new() -> Self {
        Self {
            resolver: TileResolver::new(),
            current: None,
        }
    }
}

impl<I: NestedIndexer> PixelTracker<I> {
    pub fn with_resolver(resolver: TileResolver<I>) -> Self {
        Self {
            resolver,
            current: None,
        }
    }

    /// Resolves `coord` at `order`; returns the pixel if it differs from the
    /// last one seen, `None` otherwise.
    ///
    /// A change of order always counts as a change.
    pub fn update(&mut self, coord: &SkyCoordinate, order: u8) -> JasmineResult<Option<u64>> {
        let pixel = self.resolver.resolve(coord, order, 0)?.coarse_pixel;
        if self.current == Some((order, pixel)) {
            return Ok(None);
        }
        self.current = Some((order, pixel));
        Ok(Some(pixel))
    }

    /// Last `(order, pixel)` reported.
    pub fn current(&self) -> Option<(u8, u64)> {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
