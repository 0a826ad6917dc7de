//! HiPS `properties` metadata file.
//!
//! The file is a list of `key = value` lines. Lines starting with `#` and
//! blank lines are ignored; the first `=` separates key from value and both
//! are trimmed. Keys keep their file order so a read-modify-write cycle does
//! not reshuffle the file.
//!
//! ```
//! use jasmine_hips::survey::HipsProperties;
//!
//! let props: HipsProperties = "hips_order = 3\nhips_frame = equatorial\n".parse().unwrap();
//! assert_eq!(props.hips_order().unwrap(), 3);
//! assert_eq!(props.hips_frame(), Some("equatorial"));
//! ```

use jasmine_core::{JasmineError, JasmineResult};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CREATOR_DID: &str = "ivo://HITS/hipster";

/// Description of a generated image survey.
///
/// Dates are ISO 8601 strings written as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSurvey {
    pub title: String,
    pub description: String,
    pub progenitor: String,
    pub max_order: u8,
    /// Edge of one rendered image in pixels.
    pub output_size: u32,
    /// Rendered images per tile edge.
    pub hierarchy: u32,
    pub creation_date: String,
    pub release_date: String,
}

impl ImageSurvey {
    /// `hips_tile_width`: one tile holds `hierarchy × hierarchy` images.
    pub fn tile_width(&self) -> u32 {
        self.output_size * self.hierarchy
    }
}

/// Parsed `properties` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HipsProperties {
    entries: Vec<(String, String)>,
}

impl HipsProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties for a freshly generated image survey.
    pub fn for_image_survey(survey: &ImageSurvey) -> Self {
        let mut props = Self::new();
        props.set("creator_did", CREATOR_DID);
        props.set("obs_title", survey.title.as_str());
        props.set("obs_description", survey.description.as_str());
        props.set("dataproduct_type", "image");
        props.set("dataproduct_subtype", "color");
        props.set("hips_version", "1.4");
        props.set("prov_progenitor", survey.progenitor.as_str());
        props.set("hips_creation_date", survey.creation_date.as_str());
        props.set("hips_release_date", survey.release_date.as_str());
        props.set("hips_status", "public master clonable");
        props.set("hips_tile_format", "jpeg");
        props.set("hips_order", survey.max_order.to_string());
        props.set("hips_tile_width", survey.tile_width().to_string());
        props.set("hips_frame", "equatorial");
        props
    }

    /// Reads and parses a `properties` file.
    pub fn from_file(path: impl AsRef<Path>) -> JasmineResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            JasmineError::data_error(&path.display().to_string(), &e.to_string())
        })?;
        text.parse()
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> JasmineResult<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets a key, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Deepest order of the survey.
    pub fn hips_order(&self) -> JasmineResult<u8> {
        self.parse_number("hips_order")
    }

    pub fn hips_tile_width(&self) -> JasmineResult<u32> {
        self.parse_number("hips_tile_width")
    }

    pub fn hips_frame(&self) -> Option<&str> {
        self.get("hips_frame")
    }

    pub fn hips_tile_format(&self) -> Option<&str> {
        self.get("hips_tile_format")
    }

    pub fn obs_title(&self) -> Option<&str> {
        self.get("obs_title")
    }

    fn parse_number<T: FromStr>(&self, key: &str) -> JasmineResult<T> {
        let raw = self
            .get(key)
            .ok_or_else(|| JasmineError::parse_error("properties", &format!("missing {}", key)))?;
        raw.parse().map_err(|_| {
            JasmineError::parse_error(
                "properties",
                &format!("{} is not a valid number: '{}'", key, raw),
            )
        })
    }
}

impl FromStr for HipsProperties {
    type Err = JasmineError;

    fn from_str(text: &str) -> JasmineResult<Self> {
        let mut props = Self::new();
        for (line_num, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (key, value) = trimmed.split_once('=').ok_or_else(|| {
                JasmineError::parse_error(
                    "properties",
                    &format!("line {}: expected 'key = value', got '{}'", line_num + 1, trimmed),
                )
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(JasmineError::parse_error(
                    "properties",
                    &format!("line {}: empty key", line_num + 1),
                ));
            }
            props.set(key, value.trim());
        }
        Ok(props)
    }
}

impl fmt::Display for HipsProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{:<20} = {}", key, value)?;
        }
        Ok(())
    }
}
