//! Text helpers for pasted content, sheet naming and ids

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

static SPACE_AFTER_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+").expect("valid regex"));
static SPACE_BEFORE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+<").expect("valid regex"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\n\r ]+").expect("valid regex"));
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*[bB][rR]\s*/?>").expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static TRAILING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+$").expect("valid regex"));

/// Decoded entities; `&amp;` is last so it cannot create new entities
static ENTITIES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("nbsp", ""),
        ("middot", "\u{b7}"),
        ("quot", "\""),
        ("apos", "'"),
        ("gt", ">"),
        ("lt", "<"),
        ("amp", "&"),
    ]
    .into_iter()
    .map(|(name, text)| {
        let regex = Regex::new(&format!("(?i)&{};", name)).expect("valid entity regex");
        (regex, text)
    })
    .collect()
});

/// Flatten an HTML fragment to the plain text a cell should hold
///
/// Whitespace around tags is dropped and other whitespace runs collapse to
/// one space; `<br>` becomes a newline and every other tag is removed. A few
/// common entities are decoded (`&nbsp;` to nothing).
///
/// ```
/// use stox::text::html_to_text;
///
/// assert_eq!(html_to_text("  <b>Tom &amp;\n  Jerry</b><br/>2 &lt; 3 "), "Tom & Jerry\n2 < 3");
/// ```
pub fn html_to_text(html: &str) -> String {
    let text = html.trim_matches(|c: char| matches!(c, '\t' | '\n' | '\r' | ' '));
    let text = SPACE_AFTER_TAG.replace_all(text, ">");
    let text = SPACE_BEFORE_TAG.replace_all(&text, "<");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let mut text = TAG.replace_all(&text, "").into_owned();

    for (entity, replacement) in ENTITIES.iter() {
        text = entity.replace_all(&text, *replacement).into_owned();
    }
    text
}

/// Next free name in the `name`, `name1`, `name2`, ... sequence
///
/// A trailing number on `name` is incremented; a name without one gets `1`.
///
/// ```
/// use stox::text::next_sheet_name;
///
/// assert_eq!(next_sheet_name("Sheet", &["Sheet1"]), "Sheet2");
/// assert_eq!(next_sheet_name("Sheet3", &["Sheet1"]), "Sheet4");
/// ```
pub fn next_sheet_name<S: AsRef<str>>(name: &str, existing: &[S]) -> String {
    let (base, mut number) = match TRAILING_NUMBER.find(name) {
        Some(m) => (
            &name[..m.start()],
            m.as_str().parse::<u64>().map_or(1, |n| n.saturating_add(1)),
        ),
        None => (name, 1),
    };

    loop {
        let candidate = format!("{}{}", base, number);
        if !existing.iter().any(|e| e.as_ref() == candidate) {
            return candidate;
        }
        number = number.saturating_add(1);
    }
}

/// A short id unique enough for client-side keys
///
/// Base-36 milliseconds since the epoch followed by a base-36 random
/// suffix.
pub fn generate_unique_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: u64 = rand::thread_rng().gen();
    format!("{}{}", to_base36(millis), to_base36(suffix))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
