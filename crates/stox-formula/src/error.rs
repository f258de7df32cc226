//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors from building formula rewrites
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// A shift that would move nothing
    #[error("Shift count must be at least 1")]
    ZeroCount,

    /// Shift position outside the sheet
    #[error("Shift position {at} is outside the sheet (limit {limit})")]
    OutOfBounds { at: u32, limit: u32 },
}
