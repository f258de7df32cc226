//! Reference shifts for inserted and deleted rows or columns

use stox_core::{CellAddress, MAX_COLS, MAX_ROWS};

use crate::error::{FormulaError, FormulaResult};

/// Text a reference becomes when the cell it pointed at was deleted
pub const REF_ERROR: &str = "#REF!";

/// Direction of a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// Whether lines are added or removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftKind {
    Insert,
    Delete,
}

/// Inserting or deleting `count` rows or columns starting at index `at`
/// (zero-based)
///
/// Pair it with [`rewrite_cell_refs`](crate::rewrite_cell_refs) to keep
/// formulas pointing at the same data after a structural edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefShift {
    pub axis: Axis,
    pub kind: ShiftKind,
    pub at: u32,
    pub count: u32,
}

impl RefShift {
    /// Create a shift, rejecting empty or out-of-sheet requests
    pub fn new(axis: Axis, kind: ShiftKind, at: u32, count: u32) -> FormulaResult<Self> {
        if count == 0 {
            return Err(FormulaError::ZeroCount);
        }
        let limit = match axis {
            Axis::Rows => MAX_ROWS,
            Axis::Columns => MAX_COLS as u32,
        };
        if at >= limit {
            return Err(FormulaError::OutOfBounds { at, limit });
        }
        Ok(Self {
            axis,
            kind,
            at,
            count,
        })
    }

    pub fn insert_rows(at: u32, count: u32) -> FormulaResult<Self> {
        Self::new(Axis::Rows, ShiftKind::Insert, at, count)
    }

    pub fn delete_rows(at: u32, count: u32) -> FormulaResult<Self> {
        Self::new(Axis::Rows, ShiftKind::Delete, at, count)
    }

    pub fn insert_cols(at: u32, count: u32) -> FormulaResult<Self> {
        Self::new(Axis::Columns, ShiftKind::Insert, at, count)
    }

    pub fn delete_cols(at: u32, count: u32) -> FormulaResult<Self> {
        Self::new(Axis::Columns, ShiftKind::Delete, at, count)
    }

    /// Remap one cell reference
    ///
    /// `$`-anchored parts are kept as they are. References into deleted
    /// lines, or pushed past the sheet edge, become [`REF_ERROR`]. Text that
    /// does not parse as a reference is returned unchanged.
    ///
    /// ```
    /// use stox_formula::RefShift;
    ///
    /// let shift = RefShift::delete_cols(1, 2).unwrap();
    /// assert_eq!(shift.apply("A1"), "A1");
    /// assert_eq!(shift.apply("C1"), "#REF!");
    /// assert_eq!(shift.apply("E1"), "C1");
    /// assert_eq!(shift.apply("$E1"), "$E1");
    /// ```
    pub fn apply(&self, cell_ref: &str) -> String {
        let Ok(mut addr) = CellAddress::parse(cell_ref) else {
            return cell_ref.to_string();
        };

        match self.axis {
            Axis::Rows if !addr.row_absolute => match self.shift_index(addr.row, MAX_ROWS) {
                Some(row) => addr.row = row,
                None => return REF_ERROR.to_string(),
            },
            Axis::Columns if !addr.col_absolute => {
                match self.shift_index(addr.col as u32, MAX_COLS as u32) {
                    Some(col) => addr.col = col as u16,
                    None => return REF_ERROR.to_string(),
                }
            }
            _ => {}
        }

        addr.to_a1_string()
    }

    /// New position of a line index, or `None` if it no longer exists
    fn shift_index(&self, index: u32, limit: u32) -> Option<u32> {
        if index < self.at {
            return Some(index);
        }
        match self.kind {
            ShiftKind::Insert => index.checked_add(self.count).filter(|i| *i < limit),
            ShiftKind::Delete => {
                if index - self.at < self.count {
                    None
                } else {
                    Some(index - self.count)
                }
            }
        }
    }
}
