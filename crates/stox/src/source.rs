//! The two input views of a workbook
//!
//! A workbook reaches stox twice: once as a structural view (cell values,
//! formatted text, formulas, merges, theme) and once as a rich per-cell
//! style map. Both are read-only inputs and load from JSON.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use stox_core::row::CellMeta;
use stox_core::{CellAddress, CellRange, CellValue, Style, ThemeTable};

use crate::error::Result;

/// Rich styles: sheet name → A1 address → engine style
pub type RichStyleMap = BTreeMap<String, BTreeMap<String, Style>>;

/// Structural view of a workbook
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceWorkbook {
    /// Sheet names in workbook order
    pub sheet_names: Vec<String>,
    /// Sheets by name
    #[serde(default)]
    pub sheets: BTreeMap<String, SourceSheet>,
    /// Theme color scheme
    #[serde(default)]
    pub theme: ThemeTable,
}

impl SourceWorkbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet, keeping `sheet_names` in step
    pub fn add_sheet<S: Into<String>>(&mut self, name: S, sheet: SourceSheet) {
        let name = name.into();
        if !self.sheet_names.contains(&name) {
            self.sheet_names.push(name.clone());
        }
        self.sheets.insert(name, sheet);
    }

    /// Get a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SourceSheet> {
        self.sheets.get(name)
    }

    /// Load from JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

/// Structural view of one sheet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceSheet {
    /// Used range in A1 notation (`A1:D20`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Cells keyed by A1 address
    #[serde(default)]
    pub cells: BTreeMap<String, SourceCell>,
    /// Merged ranges in A1 notation
    #[serde(default)]
    pub merges: Vec<String>,
}

impl SourceSheet {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the used range
    pub fn with_range<S: Into<String>>(mut self, range: S) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Add a cell
    pub fn with_cell<S: Into<String>>(mut self, address: S, cell: SourceCell) -> Self {
        self.cells.insert(address.into(), cell);
        self
    }

    /// Add a merged range
    pub fn with_merge<S: Into<String>>(mut self, range: S) -> Self {
        self.merges.push(range.into());
        self
    }

    /// Parsed used range, if the sheet declares one
    pub fn used_range(&self) -> Result<Option<CellRange>> {
        match &self.range {
            Some(range) => Ok(Some(CellRange::parse(range)?)),
            None => Ok(None),
        }
    }

    /// Cells with parsed addresses, in row-major order
    ///
    /// Entries whose key is not an A1 address are skipped.
    pub fn positioned_cells(&self) -> BTreeMap<(u32, u16), &SourceCell> {
        let mut cells = BTreeMap::new();
        for (key, cell) in &self.cells {
            match CellAddress::parse(key) {
                Ok(addr) => {
                    cells.insert((addr.row, addr.col), cell);
                }
                Err(e) => log::warn!("skipping cell with bad address '{}': {}", key, e),
            }
        }
        cells
    }
}

/// Structural view of one cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceCell {
    /// Raw value
    #[serde(default)]
    pub value: CellValue,
    /// Text as the workbook formats it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Formula without the leading `=`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// CSS declaration string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Host metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CellMeta>,
}

impl SourceCell {
    /// Create a cell holding a value
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the formatted text
    pub fn with_formatted<S: Into<String>>(mut self, text: S) -> Self {
        self.formatted = Some(text.into());
        self
    }

    /// Set the formula
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Set the declaration string
    pub fn with_style<S: Into<String>>(mut self, style: S) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Load a rich style map from JSON
pub fn read_style_map<R: Read>(reader: R) -> Result<RichStyleMap> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a rich style map from a JSON file
pub fn read_style_map_file<P: AsRef<Path>>(path: P) -> Result<RichStyleMap> {
    let file = File::open(path)?;
    read_style_map(BufReader::new(file))
}
