//! Reconstruction options

/// Options for rebuilding sheets
#[derive(Debug, Clone)]
pub struct ReconstructOptions {
    /// Minimum number of rows scanned per sheet (default: 100)
    pub min_rows: u32,
    /// Minimum number of columns scanned per sheet (default: 26, A..Z)
    pub min_cols: u16,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            min_rows: 100,
            min_cols: 26,
        }
    }
}

impl ReconstructOptions {
    /// Create options with the default 100x26 minimum extent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum extent
    pub fn with_min_extent(mut self, rows: u32, cols: u16) -> Self {
        self.min_rows = rows;
        self.min_cols = cols;
        self
    }
}
