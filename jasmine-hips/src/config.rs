//! Query defaults loaded from a JSON file.
//!
//! ```json
//! {
//!   "order": 3,
//!   "hierarchy_depth": 1,
//!   "survey_url": "http://localhost:5173/surveys/TNG100-99/",
//!   "id_column": "id",
//!   "window_mode": "multi-modal"
//! }
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use crate::catalog::DEFAULT_ID_COLUMN;
use crate::selection::WindowMode;
use crate::survey::SurveyLayout;
use jasmine_core::{JasmineError, JasmineResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_ORDER: u8 = 3;
pub const DEFAULT_HIERARCHY_DEPTH: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Order of the catalog tiles.
    pub order: u8,
    /// Levels between the tile order and the row order.
    pub hierarchy_depth: u8,
    pub survey_url: Option<SurveyLayout>,
    pub id_column: String,
    pub window_mode: WindowMode,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            hierarchy_depth: DEFAULT_HIERARCHY_DEPTH,
            survey_url: None,
            id_column: DEFAULT_ID_COLUMN.to_string(),
            window_mode: WindowMode::default(),
        }
    }
}

impl QueryConfig {
    pub fn from_json(text: &str) -> JasmineResult<Self> {
        serde_json::from_str(text).map_err(|e| JasmineError::parse_error("config", &e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> JasmineResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| JasmineError::data_error(&path.display().to_string(), &e.to_string()))?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
