//! Font style

use super::Color;

/// Font settings as the spreadsheet engine stores them
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Bold
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bold: Option<bool>,
    /// Font color
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::style::deserialize_color",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub color: Option<Color>,
    /// Font size in points
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "sz", skip_serializing_if = "Option::is_none")
    )]
    pub size: Option<f64>,
    /// Italic
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub italic: Option<bool>,
    /// Font family name
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// Underline
    ///
    /// Readers emit either a flag or a kind (`single`, `double`, ...); any
    /// kind other than `none` means underlined.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "deserialize_underline",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub underline: Option<bool>,
    /// Strikethrough
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub strike: Option<bool>,
}

impl FontStyle {
    /// Create an empty font
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set font size in points
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set strikethrough
    pub fn with_strike(mut self, strike: bool) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[cfg(feature = "serde")]
fn deserialize_underline<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::IgnoredAny;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Underline {
        Flag(bool),
        Kind(String),
        Number(f64),
        Other(IgnoredAny),
    }

    Ok(match Option::<Underline>::deserialize(deserializer)? {
        Some(Underline::Flag(flag)) => Some(flag),
        Some(Underline::Kind(kind)) => {
            Some(!kind.is_empty() && !kind.eq_ignore_ascii_case("none"))
        }
        Some(Underline::Number(n)) => Some(n != 0.0),
        Some(Underline::Other(_)) | None => None,
    })
}
