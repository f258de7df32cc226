//! Prelude module - common imports for stox users
//!
//! ```rust
//! use stox::prelude::*;
//! ```

pub use crate::{
    attach_styles,
    css_to_cell_style,
    reconstruct,
    reconstruct_with_options,
    rewrite_cell_refs,
    style_to_css,

    CellAddress,
    CellRange,
    CellStyle,
    CellValue,
    Color,
    ReconstructOptions,
    RefScope,
    RefShift,
    RichStyleMap,
    SheetObject,
    SourceCell,
    SourceSheet,
    SourceWorkbook,
    Style,
    ThemeTable,
};
