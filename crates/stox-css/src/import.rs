//! CSS declarations to the renderer-facing cell style

use stox_core::units::px_or_pt_to_px;
use stox_core::{BorderSide, CellBorder, CellStyle, Length};

use crate::border::{consolidate_borders, shorthand_tokens};
use crate::declarations::Declarations;

/// A parsed cell style plus what it says about the sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportedStyle {
    /// The cell style, dimensions included
    pub style: CellStyle,
    /// Set when a bare zero-width `border` asked for the sheet grid to be
    /// hidden
    pub hides_grid: bool,
}

/// Parse a declaration string into a [`CellStyle`]
///
/// Parsing never fails. Unknown properties are ignored and malformed values
/// leave their field unset; empty input yields an empty style.
///
/// ```
/// use stox_css::css_to_cell_style;
///
/// let imported = css_to_cell_style("font-weight:700;color:#112233;border:1px solid black;");
/// assert_eq!(imported.style.font.bold, Some(true));
/// assert_eq!(imported.style.color.as_deref(), Some("#112233"));
/// assert_eq!(imported.style.border.left.unwrap().line_style(), "thin");
/// assert!(!imported.hides_grid);
/// ```
pub fn css_to_cell_style(text: &str) -> ImportedStyle {
    if text.trim().is_empty() {
        return ImportedStyle::default();
    }

    let consolidated = consolidate_borders(&Declarations::parse(text));
    let mut style = CellStyle::new();

    for (property, value) in consolidated.declarations.iter() {
        match property {
            "background" | "background-color" => style.bgcolor = Some(value.to_string()),
            "color" => style.color = Some(value.to_string()),
            "text-decoration" => match value {
                "underline" => style.underline = Some(true),
                "line-through" => style.strike = Some(true),
                _ => {}
            },
            "text-align" => style.align = Some(value.to_string()),
            "vertical-align" => style.valign = Some(value.to_string()),
            "font-weight" => style.font.bold = Some(is_bold(value)),
            "font-size" => style.font.size = Some(px_or_pt_to_px(value)),
            "font-style" => style.font.italic = Some(value == "italic"),
            "font-family" => style.font.name = Some(value.to_string()),
            "border" | "border-top" | "border-bottom" | "border-left" | "border-right" => {
                apply_border(&mut style.border, property, value)
            }
            "width" => {
                if let Some(px) = nonzero_pixels(value) {
                    style.dimensions.width = Some(px);
                }
            }
            "height" => {
                if let Some(px) = nonzero_pixels(value) {
                    style.dimensions.height = Some(px);
                }
            }
            _ => {}
        }
    }

    ImportedStyle {
        style,
        hides_grid: consolidated.hides_grid,
    }
}

/// `bold`, or a weight of at least 400
fn is_bold(value: &str) -> bool {
    if value == "bold" {
        return true;
    }
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().map_or(false, |weight| weight >= 400)
}

fn nonzero_pixels(value: &str) -> Option<i64> {
    px_or_pt_to_px(value).as_pixels().filter(|px| *px != 0)
}

fn apply_border(border: &mut CellBorder, property: &str, value: &str) {
    let tokens = shorthand_tokens(value);
    let [width, line, color, ..] = tokens.as_slice() else {
        log::debug!("ignoring {}:{} without width, style and color", property, value);
        return;
    };

    let line_style = if *line == "solid" {
        solid_weight(&px_or_pt_to_px(width)).to_string()
    } else {
        line.to_string()
    };
    let color = match *color {
        "black" | "initial" => "#000000",
        other => other,
    };
    let side = BorderSide::new(line_style, color);

    match property.strip_prefix("border-") {
        None => *border = CellBorder::all(side),
        Some(edge) => {
            if let Some(slot) = border.side_mut(edge) {
                *slot = Some(side);
            }
        }
    }
}

/// Line weight keyword for a solid border of the given width
fn solid_weight(width: &Length) -> &'static str {
    match width {
        Length::Pixels(px) if *px <= 1 => "thin",
        Length::Pixels(px) if *px <= 2 => "medium",
        Length::Pixels(_) => "thick",
        Length::Verbatim(keyword) => match keyword.as_str() {
            "thin" => "thin",
            "medium" => "medium",
            _ => "thick",
        },
    }
}
