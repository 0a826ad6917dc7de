//! On-disk directory tree of a new HiPS survey.

use crate::tiling::{hips_dir, npix};
use jasmine_core::constants::HIPS_DIR_SPAN;
use jasmine_core::JasmineResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates `Norder{o}/Dir{d}` for every order up to `max_order` and every
/// directory the HiPS rule assigns to that order's pixels.
///
/// Existing directories are kept. Returns the `Dir` paths in creation order.
///
/// # Errors
/// [`JasmineError::InvalidOrder`](jasmine_core::JasmineError::InvalidOrder)
/// for orders above the supported maximum, or the I/O failure.
pub fn create_hips_tree(root: impl AsRef<Path>, max_order: u8) -> JasmineResult<Vec<PathBuf>> {
    let root = root.as_ref();
    npix(max_order)?;
    let mut created = Vec::new();

    for order in 0..=max_order {
        let last_dir = hips_dir(npix(order)? - 1);
        let order_dir = root.join(format!("Norder{}", order));
        for dir in (0..=last_dir).step_by(HIPS_DIR_SPAN as usize) {
            let path = order_dir.join(format!("Dir{}", dir));
            fs::create_dir_all(&path)?;
            created.push(path);
        }
    }

    log::debug!(
        "created {} tile directories under {}",
        created.len(),
        root.display()
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jasmine_core::JasmineError;
    use tempfile::tempdir;

    #[test]
    fn test_low_orders_use_dir0() {
        let dir = tempdir().unwrap();
        let created = create_hips_tree(dir.path(), 1).unwrap();
        assert_eq!(
            created,
            vec![
                dir.path().join("Norder0/Dir0"),
                dir.path().join("Norder1/Dir0"),
            ]
        );
        assert!(dir.path().join("Norder1/Dir0").is_dir());
    }

    #[test]
    fn test_order_five_spans_two_dirs() {
        // 12·4^5 = 12288 pixels: Dir0 and Dir10000.
        let dir = tempdir().unwrap();
        let created = create_hips_tree(dir.path(), 5).unwrap();
        assert_eq!(created.len(), 7);
        assert!(dir.path().join("Norder5/Dir10000").is_dir());
        assert!(!dir.path().join("Norder5/Dir20000").exists());
    }

    #[test]
    fn test_rerun_keeps_tree() {
        let dir = tempdir().unwrap();
        create_hips_tree(dir.path(), 2).unwrap();
        fs::write(dir.path().join("Norder2/Dir0/Npix5.jpg"), b"tile").unwrap();
        create_hips_tree(dir.path(), 2).unwrap();
        assert!(dir.path().join("Norder2/Dir0/Npix5.jpg").exists());
    }

    #[test]
    fn test_order_limit() {
        let dir = tempdir().unwrap();
        let result = create_hips_tree(dir.path(), 30);
        assert!(matches!(result, Err(JasmineError::InvalidOrder { .. })));
    }
}
