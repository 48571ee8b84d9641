//! hOCR `title` property parsing.
//!
//! hOCR stores geometry and recognition metadata as `;`-separated
//! properties in the `title` attribute, e.g.
//! `bbox 36 92 618 184; x_wconf 93`.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::BBox;

static RE_BBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|;)\s*bbox\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)").expect("valid bbox regex")
});

static RE_WCONF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|;)\s*x_wconf\s+(-?\d+(?:\.\d+)?)").expect("valid x_wconf regex")
});

/// Extract the `bbox` property.
pub fn parse_bbox(title: &str) -> Option<BBox> {
    let caps = RE_BBOX.captures(title)?;
    let coord = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    Some(BBox::new(coord(1)?, coord(2)?, coord(3)?, coord(4)?))
}

/// Extract the `x_wconf` property, clamped to 0-100.
pub fn parse_confidence(title: &str) -> Option<f32> {
    let caps = RE_WCONF.captures(title)?;
    let value: f32 = caps.get(1)?.as_str().parse().ok()?;
    Some(value.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox() {
        let bbox = parse_bbox("image \"page.png\"; bbox 0 0 2550 3300; ppageno 0").unwrap();
        assert_eq!(bbox, BBox::new(0, 0, 2550, 3300));
    }

    #[test]
    fn test_parse_bbox_missing() {
        assert!(parse_bbox("ppageno 0").is_none());
        assert!(parse_bbox("bbox 1 2 3").is_none());
    }

    #[test]
    fn test_parse_bbox_ignores_property_suffix() {
        // `x_bboxes` must not be read as `bbox`
        assert!(parse_bbox("x_bboxes 1 2 3 4").is_none());
    }

    #[test]
    fn test_parse_confidence() {
        assert_eq!(parse_confidence("bbox 1 2 3 4; x_wconf 93"), Some(93.0));
        assert_eq!(parse_confidence("x_wconf 74.5"), Some(74.5));
        assert_eq!(parse_confidence("x_wconf 120"), Some(100.0));
        assert_eq!(parse_confidence("bbox 1 2 3 4"), None);
    }
}
