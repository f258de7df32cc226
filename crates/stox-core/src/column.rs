//! Column metadata of a reconstructed sheet

/// Column settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnObject {
    /// Explicit width in pixels
    pub width: i64,
}

impl ColumnObject {
    /// Create a column with an explicit width
    pub fn new(width: i64) -> Self {
        Self { width }
    }
}
