//! Fill/background style

use super::Color;

/// Pattern fill of a cell
///
/// Only the two pattern colors take part in translation; gradients are not
/// modeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FillStyle {
    /// Pattern keyword (`solid`, `gray125`, ...)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pattern: Option<String>,
    /// Pattern background color
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::style::deserialize_color",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub bg_color: Option<Color>,
    /// Pattern foreground color
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::style::deserialize_color",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub fg_color: Option<Color>,
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: Some("solid".to_string()),
            bg_color: None,
            fg_color: Some(color),
        }
    }
}
