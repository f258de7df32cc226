//! # stox
//!
//! Sheet reconstruction and style translation between spreadsheet
//! workbooks and web grid renderers.
//!
//! A workbook arrives as two views: a structural [`SourceWorkbook`] (values,
//! formatted text, formulas, merges, theme) and a [`RichStyleMap`] of
//! engine styles per cell. [`attach_styles`] exports each rich style to a CSS
//! declaration string on its structural cell, and [`reconstruct`] turns the
//! result into one [`SheetObject`] per sheet.
//!
//! ## Example
//!
//! ```rust
//! use stox::prelude::*;
//!
//! let mut workbook = SourceWorkbook::new();
//! workbook.add_sheet(
//!     "Sheet1",
//!     SourceSheet::new()
//!         .with_range("A1:B1")
//!         .with_cell("A1", SourceCell::new("Total"))
//!         .with_cell("B1", SourceCell::new(42.0).with_formula("SUM(C1:C9)")),
//! );
//!
//! let mut styles = RichStyleMap::new();
//! styles.insert(
//!     "Sheet1".to_string(),
//!     [("A1".to_string(), Style::new().bold(true))].into_iter().collect(),
//! );
//! attach_styles(&mut workbook, &styles);
//!
//! let sheets = reconstruct(&workbook);
//! let a1 = sheets[0].cell(0, 0).unwrap();
//! assert_eq!(sheets[0].styles[a1.style.unwrap()].font.bold, Some(true));
//! assert_eq!(sheets[0].cell(0, 1).unwrap().text, "=SUM(C1:C9)");
//! ```

pub mod error;
pub mod merge;
pub mod options;
pub mod prelude;
pub mod reconstruct;
pub mod source;
pub mod text;

pub use error::{Error, Result};
pub use merge::attach_styles;
pub use options::ReconstructOptions;
pub use reconstruct::{reconstruct, reconstruct_sheet, reconstruct_with_options};
pub use source::{
    read_style_map, read_style_map_file, RichStyleMap, SourceCell, SourceSheet, SourceWorkbook,
};

// Re-export the building blocks
pub use stox_core::{
    alpha_composite, units, Alignment, BorderEdge, BorderSide, BorderStyle, CellAddress,
    CellBorder, CellFont, CellObject, CellRange, CellStyle, CellValue, Color, ColorContext,
    ColorResolver, ColumnObject, Dimensions, FillStyle, FontStyle, Length, RowObject,
    SheetConfig, SheetObject, Style, ThemeColor, ThemeTable,
};
pub use stox_css::{
    consolidate_borders, css_to_cell_style, style_to_css, style_to_declarations, Declarations,
    ImportedStyle,
};
pub use stox_formula::{rewrite_cell_refs, FormulaError, RefScope, RefShift};
