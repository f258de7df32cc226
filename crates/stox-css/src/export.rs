//! Engine style to CSS declarations

use stox_core::units::points_to_pixels;
use stox_core::{ColorContext, ColorResolver, Style, ThemeTable};

use crate::declarations::Declarations;

/// Width emitted for every exported border edge
pub const EXPORT_BORDER_WIDTH: &str = "1px";

/// Translate an engine style into declarations
///
/// Groups are emitted in a fixed order: alignment, border (top, bottom,
/// right, left), fill, font. Colors are resolved against `theme`.
pub fn style_to_declarations(style: &Style, theme: &ThemeTable) -> Declarations {
    let resolver = ColorResolver::new(theme);
    let mut decls = Declarations::new();

    if let Some(alignment) = &style.alignment {
        if let Some(vertical) = &alignment.vertical {
            decls.insert("display", "table-cell");
            decls.insert("vertical-align", vertical.as_str());
        }
        if let Some(horizontal) = &alignment.horizontal {
            decls.insert("text-align", horizontal.as_str());
        }
    }

    if let Some(border) = &style.border {
        let edges = [
            ("top", &border.top),
            ("bottom", &border.bottom),
            ("right", &border.right),
            ("left", &border.left),
        ];
        for (name, edge) in edges {
            let Some(edge) = edge else { continue };
            let line_style = edge.style.as_deref().filter(|s| !s.is_empty());
            if let (Some(line_style), Some(color)) = (line_style, &edge.color) {
                let color = resolver.resolve(color, ColorContext::Border);
                decls.insert(
                    format!("border-{}", name),
                    format!("{} {} {}", EXPORT_BORDER_WIDTH, line_style, color),
                );
            }
        }
    }

    if let Some(fill) = &style.fill {
        for color in [&fill.bg_color, &fill.fg_color].into_iter().flatten() {
            decls.insert("background-color", resolver.resolve(color, ColorContext::Fill));
        }
    }

    if let Some(font) = &style.font {
        if let Some(bold) = font.bold {
            decls.insert("font-weight", if bold { "bold" } else { "normal" });
        }
        if let Some(color) = &font.color {
            decls.insert("color", resolver.resolve(color, ColorContext::Font));
        }
        if let Some(size) = font.size {
            decls.insert("font-size", format!("{}px", points_to_pixels(size)));
        }
        if let Some(italic) = font.italic {
            decls.insert("font-style", if italic { "italic" } else { "normal" });
        }
        if let Some(name) = &font.name {
            decls.insert("font-family", name.as_str());
        }
        if let Some(underline) = font.underline {
            decls.insert("text-decoration", if underline { "underline" } else { "none" });
        }
        if let Some(strike) = font.strike {
            decls.insert("text-decoration", if strike { "line-through" } else { "none" });
        }
    }

    decls
}

/// Translate an engine style into a `;`-terminated declaration string
///
/// ```
/// use stox_core::{Color, Style, ThemeTable};
/// use stox_css::style_to_css;
///
/// let style = Style::new().bold(true).font_size(12.0).fill_color(Color::argb("FF00FF00"));
/// assert_eq!(
///     style_to_css(&style, &ThemeTable::default()),
///     "background-color:#00FF00;font-weight:bold;font-size:16px;"
/// );
/// ```
pub fn style_to_css(style: &Style, theme: &ThemeTable) -> String {
    style_to_declarations(style, theme).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stox_core::{BorderEdge, BorderStyle, Color, FillStyle, FontStyle, ThemeColor};

    fn theme() -> ThemeTable {
        ["FFFFFF", "000000", "E7E6E6", "44546A", "4472C4"]
            .into_iter()
            .map(ThemeColor::new)
            .collect()
    }

    #[test]
    fn test_empty_style_emits_nothing() {
        assert_eq!(style_to_css(&Style::new(), &theme()), "");
    }

    #[test]
    fn test_group_order() {
        let style = Style::new()
            .italic(true)
            .fill_color(Color::rgb("FFFF00"))
            .border(BorderStyle::new().with_left(BorderEdge::thin()))
            .vertical_alignment("middle")
            .horizontal_alignment("center");

        assert_eq!(
            style_to_css(&style, &theme()),
            "display:table-cell;vertical-align:middle;text-align:center;\
             border-left:1px thin #000000;\
             background-color:#FFFF00;\
             font-style:italic;"
        );
    }

    #[test]
    fn test_border_edges_in_fixed_order_and_need_style_and_color() {
        let red = Color::rgb("FF0000");
        let style = Style::new().border(
            BorderStyle::new()
                .with_left(BorderEdge::new("thick", red.clone()))
                .with_right(BorderEdge::new("dashed", Color::Theme(4)))
                .with_top(BorderEdge::new("thin", red))
                .with_bottom(BorderEdge {
                    style: Some("thin".into()),
                    color: None,
                }),
        );

        assert_eq!(
            style_to_css(&style, &theme()),
            "border-top:1px thin #FF0000;\
             border-right:1px dashed #4472C4;\
             border-left:1px thick #FF0000;"
        );
    }

    #[test]
    fn test_fg_color_overwrites_bg_color() {
        let style = Style {
            fill: Some(FillStyle {
                pattern: Some("solid".into()),
                bg_color: Some(Color::Theme(99)),
                fg_color: Some(Color::argb("#80ABCDEF")),
            }),
            ..Default::default()
        };
        assert_eq!(style_to_css(&style, &theme()), "background-color:#ABCDEF;");

        let style = Style {
            fill: Some(FillStyle {
                pattern: None,
                bg_color: Some(Color::Theme(99)),
                fg_color: None,
            }),
            ..Default::default()
        };
        assert_eq!(style_to_css(&style, &theme()), "background-color:#ffffff;");
    }

    #[test]
    fn test_font_properties() {
        let style = Style {
            font: Some(
                FontStyle::new()
                    .with_bold(false)
                    .with_color(Color::Theme(42))
                    .with_size(11.0)
                    .with_italic(false)
                    .with_name("Calibri"),
            ),
            ..Default::default()
        };
        assert_eq!(
            style_to_css(&style, &ThemeTable::default()),
            "font-weight:normal;color:#000000;font-size:14.666666666666666px;\
             font-style:normal;font-family:Calibri;"
        );
    }

    #[test]
    fn test_text_decoration_is_single_key_last_wins() {
        let font = FontStyle::new().with_underline(true).with_strike(true);
        let style = Style {
            font: Some(font),
            ..Default::default()
        };
        assert_eq!(style_to_css(&style, &theme()), "text-decoration:line-through;");

        let font = FontStyle::new().with_underline(true).with_strike(false);
        let style = Style {
            font: Some(font),
            ..Default::default()
        };
        assert_eq!(style_to_css(&style, &theme()), "text-decoration:none;");
    }
}
