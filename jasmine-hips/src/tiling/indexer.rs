//! NESTED HEALPix indexing capability.
//!
//! The resolver never computes HEALPix projections itself. It asks a
//! [`NestedIndexer`] for the pixel containing a direction, so the projection
//! math stays in a mature library and tests can substitute their own indexer.
//!
//! [`CdsIndexer`] is the production implementation, backed by `cdshealpix`.

use jasmine_core::constants::{BASE_PIXELS, HALF_PI, MAX_ORDER};
use jasmine_core::{JasmineError, JasmineResult};

/// Maps a direction on the sphere to a NESTED pixel index.
///
/// Implementations must be total over the domain
/// `nside ∈ {2^0 … 2^29}`, `theta ∈ [0, π]`, `phi ∈ [0, 2π)` and must honour
/// the NESTED parent/child relation: the pixel at `2·nside` divided by 4 is
/// the pixel at `nside`.
pub trait NestedIndexer {
    fn ang2pix_nest(&self, nside: u32, theta: f64, phi: f64) -> u64;
}

impl<T: NestedIndexer + ?Sized> NestedIndexer for &T {
    fn ang2pix_nest(&self, nside: u32, theta: f64, phi: f64) -> u64 {
        (**self).ang2pix_nest(nside, theta, phi)
    }
}

/// [`NestedIndexer`] backed by `cdshealpix::nested::hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdsIndexer;

impl NestedIndexer for CdsIndexer {
    fn ang2pix_nest(&self, nside: u32, theta: f64, phi: f64) -> u64 {
        let depth = nside.trailing_zeros() as u8;
        let lat = (HALF_PI - theta).clamp(-HALF_PI, HALF_PI);
        cdshealpix::nested::hash(depth, phi, lat)
    }
}

/// HEALPix nside for an order: `2^order`.
///
/// # Errors
/// [`JasmineError::InvalidOrder`] for orders above [`MAX_ORDER`].
pub fn nside(order: u8) -> JasmineResult<u32> {
    check_order(order as u32)?;
    Ok(1u32 << order)
}

/// Number of pixels at an order: `12 · 4^order`.
pub fn npix(order: u8) -> JasmineResult<u64> {
    check_order(order as u32)?;
    Ok(BASE_PIXELS << (2 * order as u32))
}

pub(crate) fn check_order(order: u32) -> JasmineResult<()> {
    if order > MAX_ORDER as u32 {
        return Err(JasmineError::InvalidOrder {
            order,
            max: MAX_ORDER,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jasmine_core::constants::{PI, TWOPI};

    #[test]
    fn test_nside_and_npix() {
        assert_eq!(nside(0).unwrap(), 1);
        assert_eq!(nside(3).unwrap(), 8);
        assert_eq!(npix(0).unwrap(), 12);
        assert_eq!(npix(3).unwrap(), 768);
        assert_eq!(npix(29).unwrap(), 12 * (1u64 << 58));
    }

    #[test]
    fn test_order_limit() {
        assert!(nside(29).is_ok());
        assert!(matches!(
            nside(30),
            Err(JasmineError::InvalidOrder { order: 30, max: 29 })
        ));
        assert!(npix(30).is_err());
    }

    #[test]
    fn test_cds_indexer_base_pixels() {
        let indexer = CdsIndexer;
        for &(theta, phi) in &[(0.0, 0.0), (HALF_PI, 0.0), (PI, 0.0), (1.0, 4.0)] {
            let pix = indexer.ang2pix_nest(1, theta, phi);
            assert!(pix < 12, "base pixel {} out of range", pix);
        }
    }

    #[test]
    fn test_cds_indexer_hemispheres() {
        let indexer = CdsIndexer;
        // Base pixels 0-3 cover the north cap, 8-11 the south cap.
        assert!(indexer.ang2pix_nest(1, 0.05, 1.0) <= 3);
        assert!(indexer.ang2pix_nest(1, PI - 0.05, 1.0) >= 8);
    }

    #[test]
    fn test_cds_indexer_nested_parent() {
        let indexer = CdsIndexer;
        for i in 0..50 {
            let theta = 0.01 + (PI - 0.02) * i as f64 / 49.0;
            let phi = TWOPI * ((i * 7) % 50) as f64 / 50.0;
            let coarse = indexer.ang2pix_nest(8, theta, phi);
            let fine = indexer.ang2pix_nest(32, theta, phi);
            assert_eq!(fine >> 4, coarse);
        }
    }

    #[test]
    fn test_indexer_by_reference() {
        fn via_generic<I: NestedIndexer>(indexer: I) -> u64 {
            indexer.ang2pix_nest(4, HALF_PI, 0.3)
        }
        let indexer = CdsIndexer;
        assert_eq!(via_generic(&indexer), indexer.ang2pix_nest(4, HALF_PI, 0.3));
    }
}
