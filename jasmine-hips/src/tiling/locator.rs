//! HiPS tile addresses.
//!
//! Tiles live under `Norder{order}/Dir{d}/Npix{pixel}.{ext}`. Image surveys
//! follow the HiPS rule `d = ⌊pixel / 10000⌋ · 10000`. Catalog tiles are
//! always published under `Dir0`, whatever the pixel number.
//!
//! All functions are plain string formatting; nothing checks that the
//! addressed resource exists.

use jasmine_core::constants::HIPS_DIR_SPAN;

/// Address of the tab-separated catalog tile for `coarse_pixel`.
///
/// ```
/// use jasmine_hips::tiling::catalog_tile_path;
///
/// assert_eq!(
///     catalog_tile_path("http://localhost:5173/surveys/TNG100/interaction_catalog", 3, 17),
///     "http://localhost:5173/surveys/TNG100/interaction_catalog/Norder3/Dir0/Npix17.tsv"
/// );
/// ```
pub fn catalog_tile_path(catalog_root: &str, order: u8, coarse_pixel: u64) -> String {
    format!(
        "{}/Norder{}/Dir0/Npix{}.tsv",
        trim_root(catalog_root),
        order,
        coarse_pixel
    )
}

/// HiPS directory number holding `pixel`.
pub fn hips_dir(pixel: u64) -> u64 {
    (pixel / HIPS_DIR_SPAN) * HIPS_DIR_SPAN
}

/// Address of an image tile of a survey.
pub fn image_tile_path(survey_root: &str, order: u8, pixel: u64, extension: &str) -> String {
    format!(
        "{}/Norder{}/Dir{}/Npix{}.{}",
        trim_root(survey_root),
        order,
        hips_dir(pixel),
        pixel,
        extension
    )
}

/// Address of the all-sky preview image for one order.
pub fn allsky_path(survey_root: &str, order: u8, extension: &str) -> String {
    format!("{}/Norder{}/Allsky.{}", trim_root(survey_root), order, extension)
}

fn trim_root(root: &str) -> &str {
    root.strip_suffix('/').unwrap_or(root)
}
