//! Pixel/point conversions
//!
//! The renderer works in pixels; workbooks and CSS frequently carry points.
//! One CSS pixel is three quarters of a point.

use std::fmt;

/// Points per pixel
pub const PX_TO_PT: f64 = 0.75;

/// A length normalized to whole pixels, or the original text when it carried
/// no `px`/`pt` unit (or no parsable number in front of it)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Length {
    /// Whole pixels, rounded up
    Pixels(i64),
    /// Untouched input such as `medium` or `auto`
    Verbatim(String),
}

impl Length {
    /// The pixel count, if this length was converted
    pub fn as_pixels(&self) -> Option<i64> {
        match self {
            Length::Pixels(px) => Some(*px),
            Length::Verbatim(_) => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Pixels(px) => write!(f, "{}", px),
            Length::Verbatim(s) => write!(f, "{}", s),
        }
    }
}

/// Convert a `px` or `pt` length to whole pixels, rounding up
///
/// Anything without one of those suffixes, or without a finite number in
/// front of it, is returned unchanged as [`Length::Verbatim`].
///
/// ```
/// use stox_core::units::{px_or_pt_to_px, Length};
///
/// assert_eq!(px_or_pt_to_px("10.2px"), Length::Pixels(11));
/// assert_eq!(px_or_pt_to_px("12pt"), Length::Pixels(16));
/// assert_eq!(px_or_pt_to_px("medium"), Length::Verbatim("medium".into()));
/// ```
pub fn px_or_pt_to_px(value: &str) -> Length {
    let trimmed = value.trim();

    let pixels = if let Some(number) = trimmed.strip_suffix("px") {
        parse_number(number)
    } else if let Some(number) = trimmed.strip_suffix("pt") {
        parse_number(number).map(|pt| pt / PX_TO_PT)
    } else {
        None
    };

    match pixels {
        Some(px) => Length::Pixels(px.ceil() as i64),
        None => Length::Verbatim(value.to_string()),
    }
}

/// Convert a size in points to (possibly fractional) pixels
pub fn points_to_pixels(points: f64) -> f64 {
    points / PX_TO_PT
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_px_rounds_up() {
        assert_eq!(px_or_pt_to_px("10px"), Length::Pixels(10));
        assert_eq!(px_or_pt_to_px("10.01px"), Length::Pixels(11));
        assert_eq!(px_or_pt_to_px(" 3px "), Length::Pixels(3));
        assert_eq!(px_or_pt_to_px("0px"), Length::Pixels(0));
    }

    #[test]
    fn test_pt_converts_then_rounds_up() {
        assert_eq!(px_or_pt_to_px("9pt"), Length::Pixels(12));
        assert_eq!(px_or_pt_to_px("11pt"), Length::Pixels(15));
    }

    #[test]
    fn test_unrecognized_passes_through() {
        assert_eq!(px_or_pt_to_px("1em"), Length::Verbatim("1em".into()));
        assert_eq!(px_or_pt_to_px("px"), Length::Verbatim("px".into()));
        assert_eq!(px_or_pt_to_px("NaNpx"), Length::Verbatim("NaNpx".into()));
        assert_eq!(px_or_pt_to_px(""), Length::Verbatim(String::new()));
    }

    #[test]
    fn test_points_to_pixels_is_not_rounded() {
        assert_eq!(points_to_pixels(12.0), 16.0);
        assert!((points_to_pixels(11.0) - 14.666_666_666_666_666).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn font_size_round_trip_within_one_pixel(points in 1.0f64..409.0) {
            let px = points_to_pixels(points);
            let parsed = px_or_pt_to_px(&format!("{}px", px))
                .as_pixels()
                .expect("emitted pixel size must parse");
            let error = parsed as f64 - px;
            prop_assert!((0.0..1.0).contains(&error));
            prop_assert!((parsed as f64 * PX_TO_PT - points).abs() < 1.0);
        }
    }
}
