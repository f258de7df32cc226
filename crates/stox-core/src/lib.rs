//! # stox-core
//!
//! Core data structures for the stox style translation engine.
//!
//! This crate provides the types shared by every other stox crate:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`Style`] - The spreadsheet-engine style object (alignment, border, fill, font)
//! - [`Color`] and [`ColorResolver`] - Color references and their hex resolution
//! - [`CellStyle`] - The flattened, renderer-facing cell style
//! - [`SheetObject`] - The reconstructed sheet handed to the host document model
//! - [`units`] - Pixel/point conversions
//!
//! ## Example
//!
//! ```rust
//! use stox_core::{Color, ColorContext, ColorResolver, ThemeTable};
//!
//! let theme = ThemeTable::default();
//! let resolver = ColorResolver::new(&theme);
//!
//! assert_eq!(resolver.resolve(&Color::argb("FF112233"), ColorContext::Font), "#112233");
//! assert_eq!(resolver.resolve(&Color::Theme(4), ColorContext::Fill), "#ffffff");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod row;
pub mod sheet;
pub mod style;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellValue};
pub use column::ColumnObject;
pub use error::{Error, Result};
pub use row::{CellObject, RowObject};
pub use sheet::{SheetConfig, SheetObject};

// Re-export all style types for convenience
pub use style::{
    alpha_composite, units, Alignment, BorderEdge, BorderSide, BorderStyle, CellBorder,
    CellFont, CellStyle, Color, ColorContext, ColorResolver, Dimensions, FillStyle, FontStyle,
    Length, Style, ThemeColor, ThemeTable, DEFAULT_FILL_COLOR, DEFAULT_FONT_COLOR,
};

#[cfg(feature = "serde")]
pub use style::deserialize_color;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
