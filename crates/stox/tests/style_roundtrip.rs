//! End-to-end tests for style translation (engine style -> CSS -> cell style)

use pretty_assertions::assert_eq;
use stox::prelude::*;
use stox::{BorderEdge, BorderSide, BorderStyle, CellBorder, FontStyle, Length, ThemeColor};

fn office_theme() -> ThemeTable {
    [
        ("lt1", "FFFFFF"),
        ("dk1", "000000"),
        ("lt2", "E7E6E6"),
        ("dk2", "44546A"),
        ("accent1", "4472C4"),
    ]
    .into_iter()
    .map(|(name, rgb)| ThemeColor {
        name: Some(name.to_string()),
        rgb: rgb.to_string(),
    })
    .collect()
}

/// Bold, color and a bare border shorthand import together
#[test]
fn test_import_bold_color_border() {
    let imported = css_to_cell_style("font-weight:700;color:#112233;border:1px solid black;");

    let mut expected = CellStyle::new();
    expected.font.bold = Some(true);
    expected.color = Some("#112233".to_string());
    expected.border = CellBorder::all(BorderSide::new("thin", "#000000"));

    assert_eq!(imported.style, expected);
    assert!(!imported.hides_grid);
}

/// Four-value shorthands land on four distinct edges in CSS order
#[test]
fn test_four_value_shorthand() {
    let style = css_to_cell_style(
        "border-style:solid solid dashed dotted;border-width:1px 2px 3px 1px;\
         border-color:#111111 #222222 #333333 #444444;",
    )
    .style;

    assert_eq!(style.border.top, Some(BorderSide::new("thin", "#111111")));
    assert_eq!(style.border.right, Some(BorderSide::new("medium", "#222222")));
    assert_eq!(style.border.bottom, Some(BorderSide::new("dashed", "#333333")));
    assert_eq!(style.border.left, Some(BorderSide::new("dotted", "#444444")));
}

/// A zero-width bare border hides the grid and leaves no borders behind
#[test]
fn test_zero_width_border() {
    let imported = css_to_cell_style("border:0px solid black;");
    assert!(imported.hides_grid);
    assert!(imported.style.border.is_empty());
}

/// Missing theme entries fall back per context
#[test]
fn test_theme_fallbacks() {
    let style = Style::new()
        .fill_color(Color::Theme(77))
        .font_color(Color::Theme(77));
    assert_eq!(
        style_to_css(&style, &office_theme()),
        "background-color:#ffffff;color:#000000;"
    );
    assert_eq!(
        style_to_css(&style, &ThemeTable::default()),
        "background-color:#ffffff;color:#000000;"
    );
}

/// Font size survives export and re-import within one pixel
#[test]
fn test_font_size_round_trip() {
    for points in [8.0, 9.0, 10.0, 10.5, 11.0, 12.0, 14.0, 18.0, 24.0, 72.0] {
        let css = style_to_css(&Style::new().font_size(points), &ThemeTable::default());
        let size = css_to_cell_style(&css).style.font.size;
        let Some(Length::Pixels(px)) = size else {
            panic!("{} pt exported as {:?}", points, css);
        };
        let exact = points / 0.75;
        assert!(
            px as f64 >= exact && (px as f64) - exact < 1.0,
            "{} pt -> {} -> {} px",
            points,
            css,
            px
        );
    }
}

/// Everything the exporter writes, the importer reads back
#[test]
fn test_full_style_round_trip() {
    let style = Style {
        font: Some(
            FontStyle::new()
                .with_bold(true)
                .with_italic(true)
                .with_name("Calibri")
                .with_size(12.0)
                .with_color(Color::Theme(4))
                .with_underline(true),
        ),
        border: Some(
            BorderStyle::new()
                .with_top(BorderEdge::new("thin", Color::argb("FF00B050")))
                .with_bottom(BorderEdge::new("double", Color::Theme(1))),
        ),
        ..Default::default()
    }
    .fill_color(Color::rgb("FFFF00"))
    .horizontal_alignment("right")
    .vertical_alignment("bottom");

    let css = style_to_css(&style, &office_theme());
    assert_eq!(
        css,
        "display:table-cell;vertical-align:bottom;text-align:right;\
         border-top:1px thin #00B050;border-bottom:1px double #000000;\
         background-color:#FFFF00;\
         font-weight:bold;color:#4472C4;font-size:16px;font-style:italic;\
         font-family:Calibri;text-decoration:underline;"
    );

    let cell = css_to_cell_style(&css).style;
    assert_eq!(cell.valign.as_deref(), Some("bottom"));
    assert_eq!(cell.align.as_deref(), Some("right"));
    assert_eq!(cell.bgcolor.as_deref(), Some("#FFFF00"));
    assert_eq!(cell.color.as_deref(), Some("#4472C4"));
    assert_eq!(cell.underline, Some(true));
    assert_eq!(cell.font.bold, Some(true));
    assert_eq!(cell.font.italic, Some(true));
    assert_eq!(cell.font.name.as_deref(), Some("Calibri"));
    assert_eq!(cell.font.size, Some(Length::Pixels(16)));
    assert_eq!(cell.border.top, Some(BorderSide::new("thin", "#00B050")));
    assert_eq!(cell.border.bottom, Some(BorderSide::new("double", "#000000")));
    assert_eq!(cell.border.left, None);
}
