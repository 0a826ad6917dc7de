//! Fetching catalog tiles.
//!
//! The tile locator produces plain addresses; a [`TileSource`] turns an
//! address into tile text. [`FsTileSource`] serves a survey published on the
//! local disk, [`HttpTileSource`] (feature `http`) a survey behind a web
//! server.

use super::tile::CatalogTile;
use crate::selection::Selection;
use jasmine_core::{JasmineError, JasmineResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can return the text of a tile by address.
pub trait TileSource {
    fn fetch(&self, path: &str) -> JasmineResult<String>;
}

impl<T: TileSource + ?Sized> TileSource for &T {
    fn fetch(&self, path: &str) -> JasmineResult<String> {
        (**self).fetch(path)
    }
}

/// Tiles read from a local directory.
///
/// With [`FsTileSource::mirroring`], addresses that start with a URL prefix
/// are mapped onto the directory, so the same selection payload works
/// against a remote survey and its local copy.
#[derive(Debug, Clone)]
pub struct FsTileSource {
    root: PathBuf,
    prefix: Option<String>,
}

impl FsTileSource {
    /// Relative addresses are read below `root`; absolute paths as given.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefix: None,
        }
    }

    /// Maps addresses under `prefix` onto `root`.
    pub fn mirroring(prefix: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let mut prefix = prefix.into();
        while prefix.ends_with('/') {
            prefix.pop();
        }
        Self {
            root: root.into(),
            prefix: Some(prefix),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn local_path(&self, path: &str) -> PathBuf {
        let relative = match &self.prefix {
            // Only whole path segments match: `catalog2/...` is not under `catalog`.
            Some(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                    rest.trim_start_matches('/')
                }
                _ => path,
            },
            None => path,
        };
        let candidate = Path::new(relative);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        }
    }
}

impl TileSource for FsTileSource {
    fn fetch(&self, path: &str) -> JasmineResult<String> {
        let local = self.local_path(path);
        log::debug!("reading tile {} from {:?}", path, local);
        fs::read_to_string(&local)
            .map_err(|e| JasmineError::data_error(&local.display().to_string(), &e.to_string()))
    }
}

/// Tiles fetched over HTTP with a blocking `reqwest` client.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpTileSource {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl TileSource for HttpTileSource {
    fn fetch(&self, url: &str) -> JasmineResult<String> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| JasmineError::data_error(url, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JasmineError::data_error(url, &format!("HTTP {}", status)));
        }

        response
            .text()
            .map_err(|e| JasmineError::data_error(url, &e.to_string()))
    }
}

/// Row looked up for a selection, detached from its tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub csv_url: String,
    pub csv_idx: u64,
    pub fields: BTreeMap<String, String>,
}

impl CatalogEntry {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Fetches the selection's tile and returns the row at its relative index.
///
/// # Errors
/// - [`JasmineError::Data`] if the source cannot deliver the tile.
/// - [`JasmineError::Parse`] if the tile is malformed.
/// - [`JasmineError::RowNotFound`] if the tile has fewer rows than the index needs.
pub fn lookup<S: TileSource>(source: &S, selection: &Selection) -> JasmineResult<CatalogEntry> {
    let text = source.fetch(&selection.csv_url)?;
    let tile = CatalogTile::parse(&text)?;
    let row = tile
        .row(selection.csv_idx)
        .ok_or_else(|| JasmineError::RowNotFound {
            url: selection.csv_url.clone(),
            index: selection.csv_idx,
        })?;

    Ok(CatalogEntry {
        csv_url: selection.csv_url.clone(),
        csv_idx: selection.csv_idx,
        fields: row
            .to_map()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    })
}
