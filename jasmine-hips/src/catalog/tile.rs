use jasmine_core::{JasmineError, JasmineResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Column holding the data-product identifier unless configured otherwise.
pub const DEFAULT_ID_COLUMN: &str = "id";

/// A parsed catalog tile.
///
/// Row slot `k` is file line `k + 1`. A blank line inside the tile keeps its
/// slot as an absent row, so the rows after it stay at their line offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTile {
    header: Vec<String>,
    rows: Vec<Option<Vec<String>>>,
}

/// One data row, borrowed from its tile.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRow<'a> {
    header: &'a [String],
    values: &'a [String],
}

impl CatalogTile {
    /// Parses tab-separated text. Line 0 is the header.
    ///
    /// Trailing blank lines are dropped. A data line whose column count
    /// differs from the header is rejected with its 1-based line number.
    pub fn parse(text: &str) -> JasmineResult<Self> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let header = match lines.first() {
            Some(line) if !line.trim().is_empty() => split_line(line),
            _ => {
                return Err(JasmineError::parse_error(
                    "catalog tile",
                    "missing header row",
                ))
            }
        };

        let mut rows = Vec::with_capacity(lines.len().saturating_sub(1));
        for (line_num, line) in lines.iter().enumerate().skip(1) {
            if line.trim().is_empty() {
                rows.push(None);
                continue;
            }
            let values = split_line(line);
            if values.len() != header.len() {
                return Err(JasmineError::parse_error(
                    "catalog tile",
                    &format!(
                        "line {}: expected {} columns, found {}",
                        line_num + 1,
                        header.len(),
                        values.len()
                    ),
                ));
            }
            rows.push(Some(values));
        }

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of row slots, blank lines included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a relative sub-pixel index (file line `relative_index + 1`).
    ///
    /// `None` past the end and for blank lines.
    pub fn row(&self, relative_index: u64) -> Option<CatalogRow<'_>> {
        let idx = usize::try_from(relative_index).ok()?;
        self.rows.get(idx)?.as_deref().map(|values| CatalogRow {
            header: &self.header,
            values,
        })
    }

    /// Rows present in the tile, skipping blank slots.
    pub fn rows(&self) -> impl Iterator<Item = CatalogRow<'_>> {
        self.rows.iter().flatten().map(move |values| CatalogRow {
            header: &self.header,
            values,
        })
    }
}

impl<'a> CatalogRow<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.header
            .iter()
            .position(|h| h == column)
            .map(|i| self.values[i].as_str())
    }

    /// Identifier of the data product behind this row.
    ///
    /// # Errors
    /// [`JasmineError::Parse`] if the column is absent or the value is empty.
    pub fn identifier(&self, column: &str) -> JasmineResult<&'a str> {
        match self.get(column) {
            Some(id) if !id.is_empty() => Ok(id),
            Some(_) => Err(JasmineError::parse_error(
                "catalog row",
                &format!("empty '{}' value", column),
            )),
            None => Err(JasmineError::parse_error(
                "catalog row",
                &format!("no '{}' column in {:?}", column, self.header),
            )),
        }
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// Column name to value, for serialization.
    pub fn to_map(&self) -> BTreeMap<&'a str, &'a str> {
        self.header
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
            .collect()
    }
}

impl Serialize for CatalogRow<'_> {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(s)
    }
}

fn split_line(line: &str) -> Vec<String> {
    line.trim_end_matches('\r')
        .split('\t')
        .map(|v| v.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: &str = "id\tra\tdec\tx\ty\tz\n\
                        117250\t45.0\t10.1\t0.1\t0.2\t0.3\n\
                        8811\t45.5\t10.2\t0.4\t0.5\t0.6\n\
                        30204\t46.0\t10.3\t0.7\t0.8\t0.9\n\
                        5\t46.5\t10.4\t1.0\t1.1\t1.2\n\n";

    #[test]
    fn test_parse_header_and_rows() {
        let tile = CatalogTile::parse(TILE).unwrap();
        assert_eq!(tile.header(), ["id", "ra", "dec", "x", "y", "z"]);
        assert_eq!(tile.len(), 4);
    }

    #[test]
    fn test_row_by_relative_index() {
        let tile = CatalogTile::parse(TILE).unwrap();
        assert_eq!(tile.row(0).unwrap().identifier("id").unwrap(), "117250");
        assert_eq!(tile.row(2).unwrap().get("ra"), Some("46.0"));
        assert!(tile.row(4).is_none());
        assert!(tile.row(u64::MAX).is_none());
    }

    #[test]
    fn test_crlf_lines() {
        let tile = CatalogTile::parse("id\tname\r\n7\tfoo\r\n").unwrap();
        assert_eq!(tile.row(0).unwrap().get("name"), Some("foo"));
    }

    #[test]
    fn test_column_mismatch() {
        let err = CatalogTile::parse("id\tra\n1\t2\t3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_text() {
        assert!(CatalogTile::parse("\n\n").is_err());
    }

    #[test]
    fn test_blank_line_keeps_row_offsets() {
        let tile = CatalogTile::parse("id\n10\n\n30\n").unwrap();
        assert_eq!(tile.len(), 3);
        assert_eq!(tile.row(0).unwrap().get("id"), Some("10"));
        assert!(tile.row(1).is_none());
        assert_eq!(tile.row(2).unwrap().get("id"), Some("30"));
        assert_eq!(tile.rows().count(), 2);
    }

    #[test]
    fn test_leading_blank_line_is_not_header() {
        assert!(CatalogTile::parse("\nid\n1\n").is_err());
    }

    #[test]
    fn test_header_only() {
        let tile = CatalogTile::parse("id\tra\tdec\n").unwrap();
        assert!(tile.is_empty());
        assert!(tile.row(0).is_none());
    }

    #[test]
    fn test_identifier_errors() {
        let tile = CatalogTile::parse("id\tra\n\t1.0\n").unwrap();
        let row = tile.row(0).unwrap();
        assert!(row.identifier("id").is_err());
        assert!(row.identifier("subhalo_id").is_err());
    }

    #[test]
    fn test_row_serializes_as_object() {
        let tile = CatalogTile::parse("id\tra\n42\t10.5\n").unwrap();
        let json = serde_json::to_string(&tile.row(0).unwrap()).unwrap();
        assert_eq!(json, r#"{"id":"42","ra":"10.5"}"#);
    }
}
