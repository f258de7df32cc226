//! Flattened cell style consumed by the host document model

use super::units::Length;

/// Cell style in the renderer-facing shape
///
/// Every field is optional; absence means "inherit the default". With the
/// `serde` feature this serializes to the host's JSON keys (`bgcolor`,
/// `align`, `valign`, border sides as `[lineStyle, color]` pairs).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    /// Font settings
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "CellFont::is_empty"))]
    pub font: CellFont,
    /// Border sides
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "CellBorder::is_empty"))]
    pub border: CellBorder,
    /// Background color
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bgcolor: Option<String>,
    /// Text color
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
    /// Horizontal alignment
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub align: Option<String>,
    /// Vertical alignment
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub valign: Option<String>,
    /// Underline flag
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub underline: Option<bool>,
    /// Strikethrough flag
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub strike: Option<bool>,
    /// Cell box size; lifted onto the row/column before the style is stored
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Dimensions::is_empty"))]
    pub dimensions: Dimensions,
}

impl CellStyle {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        self.font.is_empty()
            && self.border.is_empty()
            && self.bgcolor.is_none()
            && self.color.is_none()
            && self.align.is_none()
            && self.valign.is_none()
            && self.underline.is_none()
            && self.strike.is_none()
            && self.dimensions.is_empty()
    }
}

/// Font part of a [`CellStyle`]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFont {
    /// Bold
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bold: Option<bool>,
    /// Italic
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub italic: Option<bool>,
    /// Size in pixels, or the original text when it had no usable unit
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub size: Option<Length>,
    /// Font family
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
}

impl CellFont {
    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        self.bold.is_none() && self.italic.is_none() && self.size.is_none() && self.name.is_none()
    }
}

/// A border side as `(lineStyle, color)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderSide(pub String, pub String);

impl BorderSide {
    /// Create a border side
    pub fn new<S: Into<String>, C: Into<String>>(line_style: S, color: C) -> Self {
        Self(line_style.into(), color.into())
    }

    /// Line style keyword
    pub fn line_style(&self) -> &str {
        &self.0
    }

    /// Line color
    pub fn color(&self) -> &str {
        &self.1
    }
}

/// Border part of a [`CellStyle`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellBorder {
    /// Top side
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub top: Option<BorderSide>,
    /// Bottom side
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bottom: Option<BorderSide>,
    /// Left side
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub left: Option<BorderSide>,
    /// Right side
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub right: Option<BorderSide>,
}

impl CellBorder {
    /// The same side on all four edges
    pub fn all(side: BorderSide) -> Self {
        Self {
            top: Some(side.clone()),
            bottom: Some(side.clone()),
            left: Some(side.clone()),
            right: Some(side),
        }
    }

    /// Mutable access to a side by its CSS edge name
    pub fn side_mut(&mut self, edge: &str) -> Option<&mut Option<BorderSide>> {
        match edge {
            "top" => Some(&mut self.top),
            "bottom" => Some(&mut self.bottom),
            "left" => Some(&mut self.left),
            "right" => Some(&mut self.right),
            _ => None,
        }
    }

    /// Check if no side is set
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Explicit cell width/height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Width
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub width: Option<i64>,
    /// Height
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub height: Option<i64>,
}

impl Dimensions {
    /// Check if neither width nor height is set
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}
