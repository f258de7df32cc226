//! End-to-end tests for workbook loading, style merging and sheet reconstruction

use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use stox::prelude::*;
use stox::{read_style_map_file, BorderSide, Error, Length};

const WORKBOOK_JSON: &str = r##"{
    "sheetNames": ["Summary", "Detail", "Blank", "Orphan"],
    "sheets": {
        "Summary": {
            "range": "A1:C3",
            "cells": {
                "A1": {"value": "Region", "formatted": "Region", "style": "height:24px"},
                "B1": {"value": 1200.5, "formatted": "1,200.50"},
                "C1": {"value": 2401, "formula": "B1*2", "formatted": "2,401.00"},
                "A3": {"value": "", "metadata": {"comment": "fill me"}},
                "B3": {"value": null, "style": "color:#ff0000"}
            },
            "merges": ["A2:C2"]
        },
        "Detail": {
            "range": "A1",
            "cells": {
                "A1": {"value": true, "style": "border:0px"}
            }
        },
        "Blank": {
            "cells": {
                "A1": {"value": "no range, never scanned"}
            }
        }
    },
    "theme": [
        {"name": "lt1", "rgb": "FFFFFF"},
        {"name": "dk1", "rgb": "000000"},
        {"name": "lt2", "rgb": "E7E6E6"},
        {"name": "dk2", "rgb": "44546A"},
        {"name": "accent1", "rgb": "4472C4"}
    ]
}"##;

const STYLES_JSON: &str = r#"{
    "Summary": {
        "A1": {"font": {"bold": true, "sz": 12}, "fill": {"fgColor": {"theme": 4}}},
        "B1": {"alignment": {"horizontal": "right"}},
        "Z99": {"font": {"italic": true}}
    },
    "Detail": {
        "A1": {"border": {"left": {"style": "thin", "color": {"argb": "FFFF0000"}}}}
    }
}"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn load() -> Vec<SheetObject> {
    let wb_file = write_temp(WORKBOOK_JSON);
    let styles_file = write_temp(STYLES_JSON);

    let mut workbook = SourceWorkbook::from_file(wb_file.path()).unwrap();
    let styles = read_style_map_file(styles_file.path()).unwrap();
    assert_eq!(attach_styles(&mut workbook, &styles), 3);

    reconstruct(&workbook)
}

#[test]
fn test_orphan_and_rangeless_sheets_are_skipped() {
    let sheets = load();
    let names: Vec<_> = sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Summary", "Detail"]);
}

#[test]
fn test_summary_sheet() {
    let sheets = load();
    let summary = &sheets[0];

    assert_eq!(summary.row_len, 100);
    assert!(summary.sheet_config.grid_line);

    let a1 = summary.cell(0, 0).unwrap();
    assert_eq!(a1.text, "Region");
    let a1_style = &summary.styles[a1.style.unwrap()];
    assert_eq!(a1_style.font.bold, Some(true));
    assert_eq!(a1_style.font.size, Some(Length::Pixels(16)));
    assert_eq!(a1_style.bgcolor.as_deref(), Some("#4472C4"));

    // attached style replaced the inline one, so no row height survives
    assert_eq!(summary.row(0).unwrap().height, None);

    let b1 = summary.cell(0, 1).unwrap();
    assert_eq!(b1.text, "1,200.50");
    assert_eq!(summary.styles[b1.style.unwrap()].align.as_deref(), Some("right"));

    let c1 = summary.cell(0, 2).unwrap();
    assert_eq!(c1.text, "=B1*2");
    assert_eq!(c1.formatted_text, "2,401.00");
    assert_eq!(c1.style, None);

    let a2 = summary.cell(1, 0).unwrap();
    assert_eq!(a2.merge, Some([0, 2]));
    assert_eq!(summary.merges, vec!["A2:C2".to_string()]);

    let a3 = summary.cell(2, 0).unwrap();
    assert_eq!(a3.text, "");
    assert_eq!(a3.cell_meta.as_ref().unwrap()["comment"], "fill me");

    // a value-less stub is not materialized, and its style is not collected
    assert!(summary.cell(2, 1).is_none());
    assert_eq!(summary.styles.len(), 2);
}

#[test]
fn test_detail_sheet() {
    let sheets = load();
    let detail = &sheets[1];

    assert_eq!(detail.row_len, 100);
    let a1 = detail.cell(0, 0).unwrap();
    assert_eq!(a1.text, "TRUE");
    let style = &detail.styles[a1.style.unwrap()];
    assert_eq!(style.border.left, Some(BorderSide::new("thin", "#FF0000")));
    // the inline zero border was replaced by the attached style
    assert!(detail.sheet_config.grid_line);
}

#[test]
fn test_sheet_object_json_shape() {
    let mut workbook = SourceWorkbook::new();
    workbook.add_sheet(
        "S",
        SourceSheet::new()
            .with_range("A1:B1")
            .with_cell("A1", SourceCell::new("a").with_style("color:#010203;width:80px"))
            .with_merge("A1:B1"),
    );
    let options = ReconstructOptions::new().with_min_extent(2, 2);
    let sheets = reconstruct_with_options(&workbook, &options);

    let value = serde_json::to_value(&sheets[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "S",
            "rows": {
                "0": {"cells": {"0": {"text": "a", "formattedText": "", "style": 0, "merge": [0, 1]}}},
                "1": {"cells": {}},
                "len": 2
            },
            "cols": {"0": {"width": 80}},
            "merges": ["A1:B1"],
            "styles": [{"color": "#010203"}],
            "sheetConfig": {"gridLine": true}
        })
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SourceWorkbook::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_json_is_json_error() {
    let file = write_temp("{\"sheetNames\": 3}");
    let err = SourceWorkbook::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
