//! Border declaration consolidation
//!
//! CSS can spell a border in several overlapping ways: per-edge longhands
//! (`border-top-width`), per-property shorthands covering one to four edges
//! (`border-color: red blue`), and full shorthands (`border`, `border-left`).
//! [`consolidate_borders`] folds the longhands and per-property shorthands
//! into one `border-<edge>` declaration per edge that the importer can read.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::declarations::Declarations;

/// Edge names in CSS shorthand order
pub const EDGES: [&str; 4] = ["top", "right", "bottom", "left"];

const PARTS: [&str; 3] = ["style", "width", "color"];

/// Splits a border shorthand into tokens, keeping `rgb(...)` groups whole
static SHORTHAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\s(]+(\(.+\))?").expect("valid border token regex"));

/// Tokens of a `<width> <style> <color>` shorthand value
pub(crate) fn shorthand_tokens(value: &str) -> Vec<&str> {
    SHORTHAND_TOKEN.find_iter(value).map(|m| m.as_str()).collect()
}

/// Result of [`consolidate_borders`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsolidatedBorders {
    /// Consolidated edges first (top, right, bottom, left), then the parts of
    /// incomplete edges, then every other declaration in source order
    pub declarations: Declarations,
    /// A bare zero-width `border` asked for the sheet grid to be hidden
    pub hides_grid: bool,
}

#[derive(Debug, Default, Clone)]
struct EdgeParts {
    style: Option<String>,
    width: Option<String>,
    color: Option<String>,
}

impl EdgeParts {
    fn set(&mut self, part: &str, value: String) {
        match part {
            "style" => self.style = Some(value),
            "width" => self.width = Some(value),
            "color" => self.color = Some(value),
            _ => {}
        }
    }

    fn collapse(&self) -> Option<String> {
        let style = self.style.as_ref()?;
        let width = self.width.as_ref()?;
        let color = self.color.as_ref()?;
        if width == "0px" {
            Some("none".to_string())
        } else {
            Some(format!("{} {} {}", width, style, color))
        }
    }

    /// The parts that are set, as `(part, value)` in style, width, color order
    fn longhands(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("style", &self.style),
            ("width", &self.width),
            ("color", &self.color),
        ]
        .into_iter()
        .filter_map(|(part, value)| value.as_deref().map(|v| (part, v)))
    }
}

/// Merge per-edge border declarations into one declaration per edge
///
/// - `border-<edge>-<style|width|color>` sets one part of one edge.
/// - `border-<style|width|color>: v1 [v2 [v3 [v4]]]` spreads over the edges
///   following CSS shorthand rules. Colors written with `rgb(`/`rgba(` are
///   split on `)` instead of whitespace.
/// - An edge with all three parts becomes `border-<edge>: <width> <style>
///   <color>`, or `none` when the width is `0px`. The parts of an incomplete
///   edge are kept as `border-<edge>-<part>` longhands.
/// - A bare `border` whose width is `0px` sets
///   [`hides_grid`](ConsolidatedBorders::hides_grid) and zeroes all four
///   edges; later per-edge declarations still apply on top of it.
///
/// Consolidated edges come first, then the longhands of incomplete edges,
/// then everything else unchanged in source order.
/// A passed-through key that matches a consolidated one (`border-top`
/// itself) replaces its value in place.
///
/// ```
/// use stox_css::{consolidate_borders, Declarations};
///
/// let decls = Declarations::parse("border-width:1px;border-style:solid;border-color:red;");
/// let out = consolidate_borders(&decls);
/// assert_eq!(
///     out.declarations.to_string(),
///     "border-top:1px solid red;border-right:1px solid red;\
///      border-bottom:1px solid red;border-left:1px solid red;"
/// );
/// ```
pub fn consolidate_borders(decls: &Declarations) -> ConsolidatedBorders {
    let mut edges: [EdgeParts; 4] = Default::default();
    let mut others: Vec<(&str, &str)> = Vec::new();
    let mut hides_grid = false;

    for (property, value) in decls.iter() {
        if property == "border" && is_zero_width(value) {
            hides_grid = true;
            let tokens = shorthand_tokens(value);
            for edge in edges.iter_mut() {
                edge.width = Some("0px".to_string());
                edge.style = Some(tokens.get(1).unwrap_or(&"none").to_string());
                edge.color = Some(tokens.get(2).unwrap_or(&"none").to_string());
            }
            continue;
        }

        let Some(rest) = property.strip_prefix("border-") else {
            others.push((property, value));
            continue;
        };

        match rest.split('-').collect::<Vec<_>>().as_slice() {
            [edge, part] if PARTS.contains(part) => match edge_index(edge) {
                Some(i) => edges[i].set(part, value.to_string()),
                None => others.push((property, value)),
            },
            [part] if PARTS.contains(part) => {
                let values = split_values(part, value);
                let Some(layout) = shorthand_layout(values.len()) else {
                    log::debug!("ignoring {} with {} values", property, values.len());
                    continue;
                };
                for (edge, &source) in edges.iter_mut().zip(layout.iter()) {
                    edge.set(part, values[source].clone());
                }
            }
            _ => others.push((property, value)),
        }
    }

    let mut declarations = Declarations::new();
    let mut incomplete = Vec::new();
    for (edge, parts) in EDGES.iter().zip(edges.iter()) {
        match parts.collapse() {
            Some(value) => declarations.insert(format!("border-{}", edge), value),
            None => incomplete.extend(
                parts
                    .longhands()
                    .map(|(part, value)| (format!("border-{}-{}", edge, part), value.to_string())),
            ),
        }
    }
    declarations.extend(incomplete);
    declarations.extend(others);

    ConsolidatedBorders {
        declarations,
        hides_grid,
    }
}

fn edge_index(edge: &str) -> Option<usize> {
    EDGES.iter().position(|e| *e == edge)
}

fn is_zero_width(value: &str) -> bool {
    shorthand_tokens(value).first() == Some(&"0px")
}

/// Which of the given values each edge (top, right, bottom, left) takes
fn shorthand_layout(count: usize) -> Option<[usize; 4]> {
    match count {
        1 => Some([0, 0, 0, 0]),
        2 => Some([0, 1, 0, 1]),
        3 => Some([0, 1, 2, 1]),
        4 => Some([0, 1, 2, 3]),
        _ => None,
    }
}

fn split_values(part: &str, value: &str) -> Vec<String> {
    if part == "color" && value.contains("rgb") {
        let compact: String = value.chars().filter(|c| *c != ' ').collect();
        let mut pieces: Vec<String> = compact.split(')').map(|p| format!("{})", p)).collect();
        // text after the last `)`
        pieces.pop();
        pieces
    } else {
        value.split_whitespace().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn consolidate(text: &str) -> ConsolidatedBorders {
        consolidate_borders(&Declarations::parse(text))
    }

    #[test]
    fn test_four_values_go_to_four_edges() {
        let out = consolidate(
            "border-width:1px 2px 3px 4px;border-style:solid dashed dotted double;\
             border-color:red green blue black;",
        );
        assert_eq!(out.declarations.get("border-top"), Some("1px solid red"));
        assert_eq!(out.declarations.get("border-right"), Some("2px dashed green"));
        assert_eq!(out.declarations.get("border-bottom"), Some("3px dotted blue"));
        assert_eq!(out.declarations.get("border-left"), Some("4px double black"));
        assert!(!out.hides_grid);
    }

    #[test]
    fn test_two_and_three_value_shorthands() {
        let out = consolidate("border-width:1px 2px;border-style:solid;border-color:a b c;");
        assert_eq!(out.declarations.get("border-top"), Some("1px solid a"));
        assert_eq!(out.declarations.get("border-right"), Some("2px solid b"));
        assert_eq!(out.declarations.get("border-bottom"), Some("1px solid c"));
        assert_eq!(out.declarations.get("border-left"), Some("2px solid b"));
    }

    #[test]
    fn test_rgb_colors_split_on_closing_paren() {
        let out = consolidate(
            "border-width:1px;border-style:solid;border-color:rgb(1, 2, 3) rgba(4, 5, 6, 0.5);",
        );
        assert_eq!(out.declarations.get("border-top"), Some("1px solid rgb(1,2,3)"));
        assert_eq!(out.declarations.get("border-left"), Some("1px solid rgba(4,5,6,0.5)"));
    }

    #[test]
    fn test_zero_width_edge_becomes_none() {
        let out = consolidate("border-top-width:0px;border-top-style:solid;border-top-color:red;");
        assert_eq!(out.declarations.to_string(), "border-top:none;");
    }

    #[test]
    fn test_incomplete_edges_pass_through() {
        let out = consolidate("border-top-width:1px;border-top-style:solid;color:red;");
        assert_eq!(
            out.declarations.to_string(),
            "border-top-style:solid;border-top-width:1px;color:red;"
        );

        let out = consolidate(
            "color:red;border-left-color:blue;border-left-style:solid;border-left-width:2px;\
             border-color:green;width:4px;",
        );
        assert_eq!(
            out.declarations.to_string(),
            "border-left:2px solid green;border-top-color:green;border-right-color:green;\
             border-bottom-color:green;color:red;width:4px;"
        );
    }

    #[test]
    fn test_consolidated_edges_come_first() {
        let out = consolidate(
            "color:red;border-left-color:blue;border-left-style:solid;border-left-width:2px;",
        );
        assert_eq!(out.declarations.to_string(), "border-left:2px solid blue;color:red;");
    }

    #[test]
    fn test_pass_through_edge_overwrites_in_place() {
        let out = consolidate(
            "border-width:1px;border-style:solid;border-color:red;border-top:3px dashed blue;",
        );
        let keys: Vec<_> = out.declarations.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["border-top", "border-right", "border-bottom", "border-left"]);
        assert_eq!(out.declarations.get("border-top"), Some("3px dashed blue"));
    }

    #[test]
    fn test_zero_width_border_hides_grid() {
        let out = consolidate("border:0px solid black;");
        assert!(out.hides_grid);
        assert_eq!(
            out.declarations.to_string(),
            "border-top:none;border-right:none;border-bottom:none;border-left:none;"
        );

        let out = consolidate("border:0px;");
        assert!(out.hides_grid);
        assert_eq!(out.declarations.get("border-right"), Some("none"));
    }

    #[test]
    fn test_nonzero_border_passes_through() {
        let out = consolidate("border:1px solid black;");
        assert!(!out.hides_grid);
        assert_eq!(out.declarations.to_string(), "border:1px solid black;");
    }

    #[test]
    fn test_unknown_border_properties_pass_through() {
        let out = consolidate("border-collapse:collapse;border-top-left-radius:2px;");
        assert_eq!(
            out.declarations.to_string(),
            "border-collapse:collapse;border-top-left-radius:2px;"
        );
    }

    #[test]
    fn test_shorthand_tokens_keep_functions_whole() {
        assert_eq!(
            shorthand_tokens("1px solid rgb(0, 0, 0)"),
            vec!["1px", "solid", "rgb(0, 0, 0)"]
        );
        assert_eq!(shorthand_tokens("  2pt   dashed  #ff0000 "), vec!["2pt", "dashed", "#ff0000"]);
    }
}
