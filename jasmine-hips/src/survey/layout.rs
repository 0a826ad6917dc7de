//! URL layout of a published survey.
//!
//! A survey directory holds several HiPS layers side by side plus the data
//! cube with the per-object products:
//!
//! ```text
//! {base}/model/                 HiPS image layer (model reconstruction)
//! {base}/projection/            HiPS image layer (dataset projection)
//! {base}/interaction_catalog/   HiPS catalog tiles (.tsv)
//! {base}/cutouts/{id}.png       cutout images
//! {base}/data_cube/particle_clouds/{component}/{feature}/{id}.pcd
//! ```

use crate::selection::Selection;
use crate::tiling::{catalog_tile_path, NestedIndexer, TileResolver};
use jasmine_core::{JasmineResult, SkyCoordinate};
use serde::{Deserialize, Serialize};

const MODEL_LAYER: &str = "model";
const PROJECTION_LAYER: &str = "projection";
const CATALOG_LAYER: &str = "interaction_catalog";
const CUBE_DIR: &str = "data_cube";
const CUTOUT_DIR: &str = "cutouts";

/// Base URL of one survey, normalized to end with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SurveyLayout {
    base_url: String,
}

impl From<String> for SurveyLayout {
    fn from(base_url: String) -> Self {
        Self::new(base_url)
    }
}

impl From<SurveyLayout> for String {
    fn from(layout: SurveyLayout) -> Self {
        layout.base_url
    }
}

impl SurveyLayout {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model_url(&self) -> String {
        self.join(MODEL_LAYER)
    }

    pub fn projection_url(&self) -> String {
        self.join(PROJECTION_LAYER)
    }

    pub fn catalog_url(&self) -> String {
        self.join(CATALOG_LAYER)
    }

    pub fn cube_url(&self) -> String {
        self.join(CUBE_DIR)
    }

    /// Point cloud of one object for a particle component and feature.
    pub fn point_cloud_url(&self, component: &str, feature: &str, id: &str) -> String {
        format!(
            "{}/particle_clouds/{}/{}/{}.pcd",
            self.cube_url(),
            component,
            feature,
            id
        )
    }

    pub fn cutout_url(&self, id: &str) -> String {
        format!("{}{}/{}.png", self.base_url, CUTOUT_DIR, id)
    }

    /// Resolves a clicked coordinate into the catalog selection for this survey.
    pub fn select<I: NestedIndexer>(
        &self,
        resolver: &TileResolver<I>,
        coord: &SkyCoordinate,
        order: u8,
        hierarchy_depth: u8,
    ) -> JasmineResult<Selection> {
        let tile = resolver.resolve(coord, order, hierarchy_depth)?;
        Ok(Selection::new(
            catalog_tile_path(&self.catalog_url(), tile.order, tile.coarse_pixel),
            tile.relative_index,
        ))
    }

    fn join(&self, part: &str) -> String {
        format!("{}{}", self.base_url, part)
    }
}
