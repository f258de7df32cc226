//! Joining rich styles onto the structural workbook

use stox_css::style_to_css;

use crate::source::{RichStyleMap, SourceWorkbook};

/// Translate each rich style and store it on the matching structural cell
///
/// Only sheets listed in `sheet_names` and addresses present in both views
/// are touched; for those, the cell's `style` is replaced with the exported
/// declaration string and nothing else changes. Returns the number of cells
/// styled.
pub fn attach_styles(workbook: &mut SourceWorkbook, styles: &RichStyleMap) -> usize {
    let SourceWorkbook {
        sheet_names,
        sheets,
        theme,
    } = workbook;

    let mut styled = 0;
    for name in sheet_names.iter() {
        let (Some(sheet), Some(sheet_styles)) = (sheets.get_mut(name), styles.get(name)) else {
            continue;
        };
        for (address, style) in sheet_styles {
            if let Some(cell) = sheet.cells.get_mut(address) {
                cell.style = Some(style_to_css(style, theme));
                styled += 1;
            }
        }
    }

    log::debug!("attached {} cell styles", styled);
    styled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SourceCell, SourceSheet};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use stox_core::{CellValue, Color, Style, ThemeColor, ThemeTable};

    #[test]
    fn test_styles_land_on_matching_cells_only() {
        let mut wb = SourceWorkbook::new();
        wb.theme = ThemeTable::new(vec![ThemeColor::new("FFFFFF"), ThemeColor::new("1F1F1F")]);
        wb.add_sheet(
            "Data",
            SourceSheet::new()
                .with_cell("A1", SourceCell::new(1.0).with_formatted("1"))
                .with_cell("B1", SourceCell::new("keep").with_style("color:red;")),
        );

        let mut data = BTreeMap::new();
        data.insert("A1".to_string(), Style::new().font_color(Color::Theme(1)));
        data.insert("Z9".to_string(), Style::new().bold(true));
        let mut styles = RichStyleMap::new();
        styles.insert("Data".to_string(), data);
        styles.insert("Ghost".to_string(), BTreeMap::new());

        assert_eq!(attach_styles(&mut wb, &styles), 1);

        let sheet = wb.sheet("Data").unwrap();
        let a1 = &sheet.cells["A1"];
        assert_eq!(a1.style.as_deref(), Some("color:#1F1F1F;"));
        assert_eq!(a1.value, CellValue::Number(1.0));
        assert_eq!(a1.formatted.as_deref(), Some("1"));
        assert_eq!(sheet.cells["B1"].style.as_deref(), Some("color:red;"));
        assert!(!sheet.cells.contains_key("Z9"));
    }

    #[test]
    fn test_unlisted_sheets_are_ignored() {
        let mut wb = SourceWorkbook::new();
        wb.sheets.insert(
            "Hidden".to_string(),
            SourceSheet::new().with_cell("A1", SourceCell::default()),
        );

        let mut styles = RichStyleMap::new();
        styles.insert(
            "Hidden".to_string(),
            [("A1".to_string(), Style::new().bold(true))].into_iter().collect(),
        );

        assert_eq!(attach_styles(&mut wb, &styles), 0);
        assert_eq!(wb.sheets["Hidden"].cells["A1"].style, None);
    }

    #[test]
    fn test_empty_style_clears_to_empty_string() {
        let mut wb = SourceWorkbook::new();
        wb.add_sheet(
            "S",
            SourceSheet::new().with_cell("A1", SourceCell::default().with_style("color:red;")),
        );
        let mut styles = RichStyleMap::new();
        styles.insert(
            "S".to_string(),
            [("A1".to_string(), Style::new())].into_iter().collect(),
        );

        attach_styles(&mut wb, &styles);
        assert_eq!(wb.sheets["S"].cells["A1"].style.as_deref(), Some(""));
    }
}
