//! stox CLI - sheet reconstruction and style translation tool

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use stox::prelude::*;
use stox::read_style_map_file;

#[derive(Parser)]
#[command(name = "stox")]
#[command(
    author,
    version,
    about = "Spreadsheet sheet reconstruction and style translation tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild grid sheets from a workbook JSON file
    Convert {
        /// Structural workbook (JSON)
        input: PathBuf,

        /// Rich per-cell styles to attach first (JSON)
        #[arg(short, long)]
        styles: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum rows per sheet
        #[arg(long, default_value = "100")]
        min_rows: u32,

        /// Minimum columns per sheet
        #[arg(long, default_value = "26")]
        min_cols: u16,
    },

    /// Show information about a workbook JSON file
    Info {
        /// Structural workbook (JSON)
        input: PathBuf,
    },

    /// Parse a CSS declaration string into a cell style
    ImportCss {
        /// Declarations, e.g. "font-weight:700;color:#112233;"
        declarations: String,
    },

    /// Translate an engine style (JSON) into CSS declarations
    ExportCss {
        /// Engine style (JSON)
        style: PathBuf,

        /// Theme color table (JSON array of {"rgb": ...})
        #[arg(short, long)]
        theme: Option<PathBuf>,
    },

    /// Shift the cell references of a formula after a row/column edit
    #[command(group(ArgGroup::new("shift").required(true).multiple(false)))]
    Rewrite {
        /// Formula text
        formula: String,

        /// Sheet whose references are shifted
        #[arg(long)]
        sheet: String,

        /// The formula lives on that sheet, so bare references shift too
        #[arg(long)]
        same_sheet: bool,

        /// Insert rows before this row (1-based)
        #[arg(long, group = "shift", value_name = "ROW")]
        insert_rows: Option<u32>,

        /// Delete rows starting at this row (1-based)
        #[arg(long, group = "shift", value_name = "ROW")]
        delete_rows: Option<u32>,

        /// Insert columns before this column (1-based)
        #[arg(long, group = "shift", value_name = "COL")]
        insert_cols: Option<u32>,

        /// Delete columns starting at this column (1-based)
        #[arg(long, group = "shift", value_name = "COL")]
        delete_cols: Option<u32>,

        /// Number of rows or columns
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            styles,
            output,
            min_rows,
            min_cols,
        } => convert(
            &input,
            styles.as_deref(),
            output.as_deref(),
            ReconstructOptions::new().with_min_extent(min_rows, min_cols),
        ),
        Commands::Info { input } => show_info(&input),
        Commands::ImportCss { declarations } => import_css(&declarations),
        Commands::ExportCss { style, theme } => export_css(&style, theme.as_deref()),
        Commands::Rewrite {
            formula,
            sheet,
            same_sheet,
            insert_rows,
            delete_rows,
            insert_cols,
            delete_cols,
            count,
        } => {
            let shift = build_shift(insert_rows, delete_rows, insert_cols, delete_cols, count)?;

            let scope = if same_sheet {
                RefScope::SameSheet
            } else {
                RefScope::CrossSheet
            };
            println!(
                "{}",
                rewrite_cell_refs(&formula, scope, &sheet, |cell| shift.apply(cell))
            );
            Ok(())
        }
    }
}

fn convert(
    input: &Path,
    styles: Option<&Path>,
    output: Option<&Path>,
    options: ReconstructOptions,
) -> Result<()> {
    let mut workbook = SourceWorkbook::from_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    if let Some(styles_path) = styles {
        let styles = read_style_map_file(styles_path)
            .with_context(|| format!("Failed to read styles '{}'", styles_path.display()))?;
        let styled = attach_styles(&mut workbook, &styles);
        eprintln!("Attached {} cell styles", styled);
    }

    let sheets = reconstruct_with_options(&workbook, &options);
    let json = serde_json::to_string_pretty(&sheets).context("Failed to serialize sheets")?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} sheets to '{}'", sheets.len(), output_path.display());
    } else {
        io::stdout()
            .write_all(json.as_bytes())
            .context("Failed to write to stdout")?;
        println!();
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let workbook = SourceWorkbook::from_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_names.len());
    println!("Theme colors: {}", workbook.theme.len());

    for (i, name) in workbook.sheet_names.iter().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, name);

        let Some(sheet) = workbook.sheet(name) else {
            println!("    Missing (will be skipped)");
            continue;
        };
        match sheet.used_range() {
            Ok(Some(range)) => println!(
                "    Used range: {} ({} rows x {} columns)",
                range,
                range.end.row + 1,
                range.end.col as u32 + 1
            ),
            Ok(None) => println!("    Used range: none (will be skipped)"),
            Err(e) => println!("    Used range: invalid ({})", e),
        }
        let formulas = sheet.cells.values().filter(|c| c.formula.is_some()).count();
        println!("    Cells: {}", sheet.cells.len());
        println!("    Formulas: {}", formulas);
        println!("    Merges: {}", sheet.merges.len());
    }

    Ok(())
}

fn import_css(declarations: &str) -> Result<()> {
    let imported = css_to_cell_style(declarations);
    let value = serde_json::json!({
        "style": imported.style,
        "hidesGrid": imported.hides_grid,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn export_css(style_path: &Path, theme_path: Option<&Path>) -> Result<()> {
    let style: Style = read_json(style_path)?;
    let theme: ThemeTable = match theme_path {
        Some(path) => read_json(path)?,
        None => ThemeTable::default(),
    };
    println!("{}", style_to_css(&style, &theme));
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse '{}'", path.display()))
}

fn build_shift(
    insert_rows: Option<u32>,
    delete_rows: Option<u32>,
    insert_cols: Option<u32>,
    delete_cols: Option<u32>,
    count: u32,
) -> Result<RefShift> {
    let shift = match (insert_rows, delete_rows, insert_cols, delete_cols) {
        (Some(at), _, _, _) => RefShift::insert_rows(zero_based(at)?, count),
        (_, Some(at), _, _) => RefShift::delete_rows(zero_based(at)?, count),
        (_, _, Some(at), _) => RefShift::insert_cols(zero_based(at)?, count),
        (_, _, _, Some(at)) => RefShift::delete_cols(zero_based(at)?, count),
        _ => bail!("One of --insert-rows, --delete-rows, --insert-cols, --delete-cols is required"),
    };
    shift.context("Invalid shift")
}

fn zero_based(position: u32) -> Result<u32> {
    position
        .checked_sub(1)
        .context("Positions are 1-based; 0 is not a valid row or column")
}
