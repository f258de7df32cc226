//! # stox-css
//!
//! Translation between spreadsheet-engine cell styles and CSS declaration
//! strings.
//!
//! - [`style_to_css`] - engine [`Style`](stox_core::Style) to `property:value;` text
//! - [`css_to_cell_style`] - declaration text to a renderer-facing
//!   [`CellStyle`](stox_core::CellStyle)
//! - [`consolidate_borders`] - folds per-edge border longhands into one
//!   declaration per edge
//!
//! ## Example
//!
//! ```rust
//! use stox_core::{Color, Style, ThemeTable};
//! use stox_css::{css_to_cell_style, style_to_css};
//!
//! let css = style_to_css(&Style::new().font_color(Color::rgb("112233")), &ThemeTable::default());
//! assert_eq!(css, "color:#112233;");
//!
//! let imported = css_to_cell_style(&css);
//! assert_eq!(imported.style.color.as_deref(), Some("#112233"));
//! ```

pub mod border;
pub mod declarations;
pub mod export;
pub mod import;

pub use border::{consolidate_borders, ConsolidatedBorders};
pub use declarations::Declarations;
pub use export::{style_to_css, style_to_declarations};
pub use import::{css_to_cell_style, ImportedStyle};
