//! Cell styling types
//!
//! Two style shapes live here:
//! - [`Style`] - the spreadsheet-engine style (alignment, border, fill, font),
//!   with colors as [`Color`] references
//! - [`CellStyle`] - the flattened style the host document model consumes,
//!   with colors already resolved to hex strings
//!
//! [`ColorResolver`] and [`units`] bridge the two.

mod alignment;
mod border;
mod cell_style;
mod color;
mod fill;
mod font;
pub mod units;

pub use alignment::Alignment;
pub use border::{BorderEdge, BorderStyle};
pub use cell_style::{BorderSide, CellBorder, CellFont, CellStyle, Dimensions};
pub use color::{
    alpha_composite, Color, ColorContext, ColorResolver, ThemeColor, ThemeTable,
    DEFAULT_FILL_COLOR, DEFAULT_FONT_COLOR,
};
#[cfg(feature = "serde")]
pub use color::deserialize_color;
pub use fill::FillStyle;
pub use font::FontStyle;
pub use units::Length;

/// Spreadsheet-engine cell style
///
/// Each group is optional; a missing group contributes nothing when the style
/// is translated.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Text alignment
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alignment: Option<Alignment>,
    /// Border settings
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub border: Option<BorderStyle>,
    /// Fill/background settings
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fill: Option<FillStyle>,
    /// Font settings
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub font: Option<FontStyle>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_mut().bold = Some(bold);
        self
    }

    /// Set italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font_mut().italic = Some(italic);
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_mut().size = Some(size);
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_mut().name = Some(name.into());
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_mut().color = Some(color);
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(FillStyle::solid(color));
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment<S: Into<String>>(mut self, align: S) -> Self {
        self.alignment.get_or_insert_with(Alignment::new).horizontal = Some(align.into());
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment<S: Into<String>>(mut self, align: S) -> Self {
        self.alignment.get_or_insert_with(Alignment::new).vertical = Some(align.into());
        self
    }

    /// Set borders
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = Some(border);
        self
    }

    /// Get a mutable reference to font settings, creating them if absent
    pub fn font_mut(&mut self) -> &mut FontStyle {
        self.font.get_or_insert_with(FontStyle::new)
    }
}
