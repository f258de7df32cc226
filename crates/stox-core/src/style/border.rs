//! Border style types

use super::Color;

/// Per-side borders of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStyle {
    /// Top border
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub top: Option<BorderEdge>,
    /// Right border
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub right: Option<BorderEdge>,
    /// Bottom border
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bottom: Option<BorderEdge>,
    /// Left border
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub left: Option<BorderEdge>,
}

impl BorderStyle {
    /// Create a new border style with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four sides to the same edge
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            top: Some(edge.clone()),
            right: Some(edge.clone()),
            bottom: Some(edge.clone()),
            left: Some(edge),
        }
    }

    /// Set the top border
    pub fn with_top(mut self, edge: BorderEdge) -> Self {
        self.top = Some(edge);
        self
    }

    /// Set the right border
    pub fn with_right(mut self, edge: BorderEdge) -> Self {
        self.right = Some(edge);
        self
    }

    /// Set the bottom border
    pub fn with_bottom(mut self, edge: BorderEdge) -> Self {
        self.bottom = Some(edge);
        self
    }

    /// Set the left border
    pub fn with_left(mut self, edge: BorderEdge) -> Self {
        self.left = Some(edge);
        self
    }

    /// Check if all borders are empty
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderEdge {
    /// Line style keyword (`thin`, `medium`, `dashed`, ...)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub style: Option<String>,
    /// Line color
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::style::deserialize_color",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub color: Option<Color>,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new<S: Into<String>>(style: S, color: Color) -> Self {
        Self {
            style: Some(style.into()),
            color: Some(color),
        }
    }

    /// Create a thin black border
    pub fn thin() -> Self {
        Self::new("thin", Color::rgb("000000"))
    }
}
