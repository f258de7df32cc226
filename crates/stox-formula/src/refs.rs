//! Cell reference rewriting

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `Sheet!A1` or `'My Sheet'!$A$1`
static QUALIFIED_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<sheet>'[^']+'|[\p{L}\p{N}_.]+)!(?P<cell>\$?[A-Za-z]{1,3}\$?[0-9]+)")
        .expect("valid qualified reference regex")
});

/// A qualified reference or a bare `A1`
static ANY_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(?P<sheet>'[^']+'|[\p{L}\p{N}_.]+)!)?(?P<cell>\$?[A-Za-z]{1,3}\$?[0-9]+)")
        .expect("valid reference regex")
});

/// Which references a rewrite looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefScope {
    /// The formula lives on the target sheet: bare references are remapped
    /// along with `Sheet!A1` references naming the target sheet
    SameSheet,
    /// The formula lives on another sheet: only `Sheet!A1` references naming
    /// the target sheet are remapped
    CrossSheet,
}

/// Rewrite the cell references of `text` that point at `sheet_name`
///
/// `remap` receives the cell part of each matching reference (`A1`, `$B$2`)
/// and returns its replacement. For qualified references the sheet prefix is
/// kept as written; quotes are ignored when comparing it with `sheet_name`.
/// References to other sheets, and tokens that only look like references
/// (`LOG10(`, `AB12C`), are left untouched.
///
/// ```
/// use stox_formula::{rewrite_cell_refs, RefScope};
///
/// let out = rewrite_cell_refs("=Sheet1!A1+Sheet2!B2", RefScope::CrossSheet, "Sheet1", |cell| {
///     if cell == "A1" { "A2".to_string() } else { cell.to_string() }
/// });
/// assert_eq!(out, "=Sheet1!A2+Sheet2!B2");
/// ```
pub fn rewrite_cell_refs<F>(text: &str, scope: RefScope, sheet_name: &str, mut remap: F) -> String
where
    F: FnMut(&str) -> String,
{
    let regex = match scope {
        RefScope::SameSheet => &*ANY_REF,
        RefScope::CrossSheet => &*QUALIFIED_REF,
    };

    regex
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let (Some(matched), Some(cell)) = (caps.get(0), caps.name("cell")) else {
                return whole.to_string();
            };
            if !stands_alone(text, matched.start(), matched.end()) {
                return whole.to_string();
            }

            match caps.name("sheet") {
                Some(sheet) if sheet.as_str().replace('\'', "") == sheet_name => {
                    format!("{}!{}", sheet.as_str(), remap(cell.as_str()))
                }
                Some(_) => whole.to_string(),
                None => remap(cell.as_str()),
            }
        })
        .into_owned()
}

/// Whether the match is a whole token rather than part of a name or number
fn stands_alone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    let glued_before =
        before.map_or(false, |c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$'));
    let glued_after =
        after.map_or(false, |c| c.is_alphanumeric() || matches!(c, '_' | '(' | '!'));

    !glued_before && !glued_after
}
