//! Sheet reconstruction
//!
//! Turns the structural view of a workbook into the [`SheetObject`]s the
//! host grid consumes: one row entry per scanned row, cell text and
//! formatted text, per-cell styles imported from their declaration strings,
//! row heights, column widths, and merges.

use stox_core::{CellObject, CellRange, CellStyle, ColumnObject, RowObject, SheetObject};
use stox_css::css_to_cell_style;

use crate::options::ReconstructOptions;
use crate::source::{SourceCell, SourceSheet, SourceWorkbook};

/// Rebuild every sheet of a workbook with default options
pub fn reconstruct(workbook: &SourceWorkbook) -> Vec<SheetObject> {
    reconstruct_with_options(workbook, &ReconstructOptions::default())
}

/// Rebuild every sheet of a workbook
///
/// Sheets come out in `sheet_names` order. A name without a matching sheet,
/// and a sheet without a used range, is skipped.
pub fn reconstruct_with_options(
    workbook: &SourceWorkbook,
    options: &ReconstructOptions,
) -> Vec<SheetObject> {
    workbook
        .sheet_names
        .iter()
        .filter_map(|name| match workbook.sheet(name) {
            Some(sheet) if sheet.range.is_none() => {
                log::debug!("sheet '{}' has no used range, skipping", name);
                None
            }
            Some(sheet) => Some(reconstruct_sheet(name, sheet, options)),
            None => {
                log::warn!("sheet '{}' is listed but has no data, skipping", name);
                None
            }
        })
        .collect()
}

/// Rebuild one sheet
///
/// The scanned extent runs from A1 to the end of the used range, grown to
/// at least `options.min_rows` by `options.min_cols`. A sheet without a
/// usable range scans the minimum extent. Stub cells (no value, formatted
/// text or formula) are not materialized.
pub fn reconstruct_sheet(
    name: &str,
    sheet: &SourceSheet,
    options: &ReconstructOptions,
) -> SheetObject {
    let used = match sheet.used_range() {
        Ok(range) => range,
        Err(e) => {
            log::warn!("sheet '{}': ignoring used range: {}", name, e);
            None
        }
    };
    let end_row = used
        .map_or(0, |r| r.end.row)
        .max(options.min_rows.saturating_sub(1));
    let end_col = used
        .map_or(0, |r| r.end.col)
        .max(options.min_cols.saturating_sub(1));

    let mut out = SheetObject::new(name);
    let mut hides_grid = false;
    let cells = sheet.positioned_cells();

    for row_index in 0..=end_row {
        let mut row = RowObject::new();
        for (&(_, col), source) in cells.range((row_index, 0)..=(row_index, end_col)) {
            if is_stub(source) {
                continue;
            }
            let built = build_cell(source);
            hides_grid |= built.hides_grid;

            let mut cell = built.cell;
            if let Some(style) = built.style {
                cell.style = Some(out.push_style(style));
            }
            if row.height.is_none() {
                row.height = built.height;
            }
            if let Some(width) = built.width {
                out.cols.insert(col, ColumnObject::new(width));
            }
            row.cells.insert(col, cell);
        }
        out.rows.insert(row_index, row);
    }
    out.row_len = end_row + 1;

    for merge in &sheet.merges {
        let range = match CellRange::parse(merge) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("sheet '{}': skipping merge '{}': {}", name, merge, e);
                continue;
            }
        };
        let anchor = out.cell_mut(range.start.row, range.start.col);
        anchor.merge = Some([range.extra_rows(), range.extra_cols() as u32]);
        out.merges.push(range.to_a1_string());
    }

    out.sheet_config.grid_line = !hides_grid;
    out
}

struct BuiltCell {
    cell: CellObject,
    style: Option<CellStyle>,
    width: Option<i64>,
    height: Option<i64>,
    hides_grid: bool,
}

fn is_stub(source: &SourceCell) -> bool {
    source.value.is_empty() && source.formatted.is_none() && source.formula.is_none()
}

fn build_cell(source: &SourceCell) -> BuiltCell {
    let formatted = source.formatted.clone().unwrap_or_default();
    let text = match &source.formula {
        Some(formula) if !formula.is_empty() => {
            if formula.starts_with('=') {
                formula.clone()
            } else {
                format!("={}", formula)
            }
        }
        _ => source
            .formatted
            .clone()
            .unwrap_or_else(|| source.value.to_string()),
    };

    let imported = css_to_cell_style(source.style.as_deref().unwrap_or_default());
    let mut style = imported.style;
    let dimensions = std::mem::take(&mut style.dimensions);

    BuiltCell {
        cell: CellObject {
            text,
            formatted_text: formatted,
            style: None,
            merge: None,
            cell_meta: source.metadata.clone(),
        },
        style: (!style.is_empty()).then_some(style),
        width: dimensions.width,
        height: dimensions.height,
        hides_grid: imported.hides_grid,
    }
}
