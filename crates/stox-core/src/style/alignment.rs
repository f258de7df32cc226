//! Text alignment

/// Text alignment as the spreadsheet engine stores it
///
/// Values are kept as the engine's own keywords (`left`, `center`,
/// `top`, `middle`, ...) since they are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal alignment
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub horizontal: Option<String>,
    /// Vertical alignment
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub vertical: Option<String>,
}

impl Alignment {
    /// Create an empty alignment
    pub fn new() -> Self {
        Self::default()
    }
}
