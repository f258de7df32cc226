//! Color references and their resolution to `#RRGGBB` strings

/// Color used for fills whose theme entry cannot be found
pub const DEFAULT_FILL_COLOR: &str = "#ffffff";

/// Color used for text (and borders) whose theme entry cannot be found
pub const DEFAULT_FONT_COLOR: &str = "#000000";

/// A color as a spreadsheet engine stores it
///
/// With the `serde` feature a color serializes as `{"rgb": "FF0000"}`,
/// `{"argb": "FFFF0000"}` or `{"theme": 4}`. Style fields read colors
/// leniently through `deserialize_color`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Color {
    /// Hex RGB, with or without a leading `#`
    Rgb(String),

    /// Hex ARGB (alpha byte first), with or without a leading `#`
    Argb(String),

    /// Index into the workbook theme palette
    ///
    /// Theme indices:
    /// 0 = Background 1 (light)
    /// 1 = Text 1 (dark)
    /// 2 = Background 2
    /// 3 = Text 2
    /// 4-9 = Accent 1-6
    Theme(u32),
}

impl Color {
    /// Create an RGB color
    pub fn rgb<S: Into<String>>(hex: S) -> Self {
        Color::Rgb(hex.into())
    }

    /// Create an ARGB color
    pub fn argb<S: Into<String>>(hex: S) -> Self {
        Color::Argb(hex.into())
    }

    /// Pick one reference out of the loose `rgb`/`argb`/`theme` triple a
    /// workbook reader hands out, in that priority
    pub fn from_parts(rgb: Option<&str>, argb: Option<&str>, theme: Option<u32>) -> Option<Self> {
        rgb.map(Color::rgb)
            .or_else(|| argb.map(Color::argb))
            .or_else(|| theme.map(Color::Theme))
    }
}

/// Where a color is used; decides the fallback for unresolvable themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorContext {
    /// Cell background
    Fill,
    /// Text color
    Font,
    /// Border line color
    Border,
}

impl ColorContext {
    /// Fallback color for this context
    pub fn default_color(self) -> &'static str {
        match self {
            ColorContext::Fill => DEFAULT_FILL_COLOR,
            ColorContext::Font | ColorContext::Border => DEFAULT_FONT_COLOR,
        }
    }
}

/// One entry of a workbook color scheme
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeColor {
    /// Scheme slot name (e.g. "lt1", "accent1")
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// Hex RGB, usually without `#`
    pub rgb: String,
}

impl ThemeColor {
    /// Create an unnamed theme entry
    pub fn new<S: Into<String>>(rgb: S) -> Self {
        Self {
            name: None,
            rgb: rgb.into(),
        }
    }
}

/// Workbook theme palette, addressed by theme index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ThemeTable {
    colors: Vec<ThemeColor>,
}

impl ThemeTable {
    /// Create a palette from its entries
    pub fn new(colors: Vec<ThemeColor>) -> Self {
        Self { colors }
    }

    /// Look up a theme entry
    pub fn get(&self, index: u32) -> Option<&ThemeColor> {
        self.colors.get(index as usize)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl FromIterator<ThemeColor> for ThemeTable {
    fn from_iter<I: IntoIterator<Item = ThemeColor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Resolves [`Color`] references against a theme palette
///
/// Resolution never fails: anything that cannot be resolved yields the
/// context's default color.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'a> {
    theme: &'a ThemeTable,
}

impl<'a> ColorResolver<'a> {
    /// Create a resolver over a theme palette
    pub fn new(theme: &'a ThemeTable) -> Self {
        Self { theme }
    }

    /// Resolve a color to a `#`-prefixed hex string
    pub fn resolve(&self, color: &Color, context: ColorContext) -> String {
        let resolved = match color {
            Color::Rgb(hex) => with_hash(hex),
            Color::Argb(hex) => strip_alpha(hex).map(|rgb| format!("#{}", rgb)),
            Color::Theme(index) => self.theme.get(*index).and_then(|c| with_hash(&c.rgb)),
        };
        resolved.unwrap_or_else(|| context.default_color().to_string())
    }
}

fn with_hash(hex: &str) -> Option<String> {
    if hex.is_empty() {
        None
    } else if hex.starts_with('#') {
        Some(hex.to_string())
    } else {
        Some(format!("#{}", hex))
    }
}

/// Drop the leading alpha byte of an ARGB hex string
fn strip_alpha(hex: &str) -> Option<&str> {
    let skip = if hex.starts_with('#') { 3 } else { 2 };
    hex.get(skip..).filter(|rgb| !rgb.is_empty())
}

/// Flatten a translucent `#RRGGBBAA` color onto an opaque white background
///
/// Each channel becomes `(1 - a) * 255 + a * channel`, rounded. A six digit
/// color is taken as opaque. Returns `None` for anything that is not hex.
///
/// ```
/// use stox_core::alpha_composite;
///
/// assert_eq!(alpha_composite("#FF000080").as_deref(), Some("#FF7F7F"));
/// assert_eq!(alpha_composite("#336699FF").as_deref(), Some("#336699"));
/// ```
pub fn alpha_composite(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return None;
    }

    let alpha = match hex.len() {
        8 => u8::from_str_radix(&hex[6..8], 16).ok()?,
        6 => u8::MAX,
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    let a = alpha as f64 / 255.0;
    let blend = |c: u8| ((1.0 - a) * 255.0 + a * c as f64).round() as u8;

    Some(format!("#{:02X}{:02X}{:02X}", blend(r), blend(g), blend(b)))
}

#[cfg(feature = "serde")]
pub use self::lenient::deserialize_color;

#[cfg(feature = "serde")]
mod lenient {
    use super::Color;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    /// The loose shape workbook readers emit; `tint` and `indexed` are
    /// accepted and ignored
    #[derive(Deserialize)]
    struct ColorParts {
        #[serde(default)]
        rgb: Option<String>,
        #[serde(default)]
        argb: Option<String>,
        #[serde(default)]
        theme: Option<u32>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseColor {
        Parts(ColorParts),
        Other(IgnoredAny),
    }

    /// Read an optional color, treating anything unusable as absent
    ///
    /// `{"theme": 1, "tint": 0.5}` reads as theme 1; `{"indexed": 64}`,
    /// `{}` and values of the wrong type read as `None`.
    pub fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<LooseColor>::deserialize(deserializer)? {
            Some(LooseColor::Parts(parts)) => Color::from_parts(
                parts.rgb.as_deref(),
                parts.argb.as_deref(),
                parts.theme,
            ),
            Some(LooseColor::Other(_)) | None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> ThemeTable {
        ["FFFFFF", "000000", "E7E6E6", "44546A", "4472C4"]
            .into_iter()
            .map(ThemeColor::new)
            .collect()
    }

    #[test]
    fn test_rgb_gets_hash_prefix() {
        let table = ThemeTable::default();
        let resolver = ColorResolver::new(&table);
        assert_eq!(resolver.resolve(&Color::rgb("FF0000"), ColorContext::Fill), "#FF0000");
        assert_eq!(resolver.resolve(&Color::rgb("#00FF00"), ColorContext::Fill), "#00FF00");
    }

    #[test]
    fn test_argb_drops_alpha_byte() {
        let table = ThemeTable::default();
        let resolver = ColorResolver::new(&table);
        assert_eq!(resolver.resolve(&Color::argb("FF112233"), ColorContext::Font), "#112233");
        assert_eq!(resolver.resolve(&Color::argb("#80112233"), ColorContext::Fill), "#112233");
        assert_eq!(resolver.resolve(&Color::argb("F"), ColorContext::Fill), "#ffffff");
    }

    #[test]
    fn test_theme_lookup() {
        let table = theme();
        let resolver = ColorResolver::new(&table);
        assert_eq!(resolver.resolve(&Color::Theme(4), ColorContext::Fill), "#4472C4");
        assert_eq!(resolver.resolve(&Color::Theme(0), ColorContext::Font), "#FFFFFF");
    }

    #[test]
    fn test_missing_theme_falls_back_per_context() {
        let table = theme();
        let resolver = ColorResolver::new(&table);
        assert_eq!(resolver.resolve(&Color::Theme(42), ColorContext::Fill), DEFAULT_FILL_COLOR);
        assert_eq!(resolver.resolve(&Color::Theme(42), ColorContext::Font), DEFAULT_FONT_COLOR);
        assert_eq!(resolver.resolve(&Color::Theme(42), ColorContext::Border), "#000000");
    }

    #[test]
    fn test_from_parts_priority() {
        assert_eq!(
            Color::from_parts(Some("010203"), Some("FF040506"), Some(1)),
            Some(Color::rgb("010203"))
        );
        assert_eq!(
            Color::from_parts(None, Some("FF040506"), Some(1)),
            Some(Color::argb("FF040506"))
        );
        assert_eq!(Color::from_parts(None, None, Some(1)), Some(Color::Theme(1)));
        assert_eq!(Color::from_parts(None, None, None), None);
    }

    #[test]
    fn test_alpha_composite() {
        assert_eq!(alpha_composite("#00000000").as_deref(), Some("#FFFFFF"));
        assert_eq!(alpha_composite("#000000FF").as_deref(), Some("#000000"));
        assert_eq!(alpha_composite("#ff000080").as_deref(), Some("#FF7F7F"));
        assert_eq!(alpha_composite("abcdef").as_deref(), Some("#ABCDEF"));
        assert_eq!(alpha_composite("#12345"), None);
        assert_eq!(alpha_composite("#GG0000FF"), None);
    }
}
