//! Reconstructed sheet handed to the host document model

use std::collections::BTreeMap;

use crate::column::ColumnObject;
use crate::row::{CellObject, RowObject};
use crate::style::CellStyle;

/// Sheet-level display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SheetConfig {
    /// Whether the default cell grid is drawn
    pub grid_line: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { grid_line: true }
    }
}

/// A sheet in the host document model's shape
///
/// Built once per source sheet; every `style` index on a cell points into
/// [`styles`](Self::styles). Styles are appended per cell and never
/// deduplicated.
///
/// With the `serde` feature this serializes as
/// `{name, rows: {"0": {...}, ..., "len": N}, cols, merges, styles, sheetConfig}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetObject {
    /// Sheet name
    pub name: String,
    /// Rows keyed by row index
    pub rows: BTreeMap<u32, RowObject>,
    /// Number of scanned rows, padding included
    pub row_len: u32,
    /// Columns with explicit settings
    pub cols: BTreeMap<u16, ColumnObject>,
    /// Merged ranges in A1:B2 notation, in source order
    pub merges: Vec<String>,
    /// Style list addressed by [`CellObject::style`]
    pub styles: Vec<CellStyle>,
    /// Display settings
    pub sheet_config: SheetConfig,
}

impl SheetObject {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            row_len: 0,
            cols: BTreeMap::new(),
            merges: Vec::new(),
            styles: Vec::new(),
            sheet_config: SheetConfig::default(),
        }
    }

    /// Get a row
    pub fn row(&self, row: u32) -> Option<&RowObject> {
        self.rows.get(&row)
    }

    /// Get a row, inserting an empty one if absent
    pub fn row_mut(&mut self, row: u32) -> &mut RowObject {
        self.rows.entry(row).or_default()
    }

    /// Get a cell
    pub fn cell(&self, row: u32, col: u16) -> Option<&CellObject> {
        self.rows.get(&row).and_then(|r| r.cell(col))
    }

    /// Get a cell, inserting empty placeholders for the row and cell if absent
    pub fn cell_mut(&mut self, row: u32, col: u16) -> &mut CellObject {
        self.row_mut(row).cell_mut(col)
    }

    /// Append a style and return its index
    pub fn push_style(&mut self, style: CellStyle) -> usize {
        self.styles.push(style);
        self.styles.len() - 1
    }

    /// Style of a cell, if it has one
    pub fn cell_style(&self, row: u32, col: u16) -> Option<&CellStyle> {
        self.cell(row, col)
            .and_then(|c| c.style)
            .and_then(|i| self.styles.get(i))
    }
}

#[cfg(feature = "serde")]
mod ser {
    use super::*;
    use serde::ser::{SerializeMap, SerializeStruct};
    use serde::{Serialize, Serializer};

    struct Rows<'a> {
        rows: &'a BTreeMap<u32, RowObject>,
        len: u32,
    }

    impl Serialize for Rows<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.rows.len() + 1))?;
            for (index, row) in self.rows {
                map.serialize_entry(&index.to_string(), row)?;
            }
            map.serialize_entry("len", &self.len)?;
            map.end()
        }
    }

    impl Serialize for SheetObject {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("SheetObject", 6)?;
            state.serialize_field("name", &self.name)?;
            state.serialize_field(
                "rows",
                &Rows {
                    rows: &self.rows,
                    len: self.row_len,
                },
            )?;
            state.serialize_field("cols", &self.cols)?;
            state.serialize_field("merges", &self.merges)?;
            state.serialize_field("styles", &self.styles)?;
            state.serialize_field("sheetConfig", &self.sheet_config)?;
            state.end()
        }
    }
}
