//! Rows and cells of a reconstructed sheet

use std::collections::BTreeMap;

/// Opaque host metadata carried through from the source cell
pub type CellMeta = BTreeMap<String, String>;

/// A row of a [`SheetObject`](crate::SheetObject)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowObject {
    /// Cells keyed by column index
    pub cells: BTreeMap<u16, CellObject>,
    /// Explicit height in pixels
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub height: Option<i64>,
}

impl RowObject {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn cell(&self, col: u16) -> Option<&CellObject> {
        self.cells.get(&col)
    }

    /// Get a cell, inserting an empty placeholder if absent
    pub fn cell_mut(&mut self, col: u16) -> &mut CellObject {
        self.cells.entry(col).or_default()
    }
}

/// A cell of a [`SheetObject`](crate::SheetObject)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CellObject {
    /// Display text, or `=` followed by the formula
    pub text: String,
    /// Text as the workbook formatted it
    pub formatted_text: String,
    /// Index into the owning sheet's style list
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub style: Option<usize>,
    /// Merge span of an anchor cell: `[extra rows, extra columns]`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub merge: Option<[u32; 2]>,
    /// Host metadata
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub cell_meta: Option<CellMeta>,
}

impl CellObject {
    /// Create a cell with the same display and formatted text
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        Self {
            formatted_text: text.clone(),
            text,
            ..Default::default()
        }
    }
}
