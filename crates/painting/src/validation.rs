use crate::constants::{MAX_BRUSH_SIZE, MAX_MIRROR_COUNT};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid mirror count: {0}")]
    InvalidMirrorCount(i64),
    #[error("Invalid brush size: {0}")]
    InvalidBrushSize(i64),
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Unknown brush shape: {0:?}")]
    UnknownShape(String),
}

/// Check a raw mirror count from the UI
pub fn validate_mirror_count(count: i64) -> Result<u32, ValidationError> {
    if (1..=MAX_MIRROR_COUNT as i64).contains(&count) {
        Ok(count as u32)
    } else {
        Err(ValidationError::InvalidMirrorCount(count))
    }
}

/// Check a raw brush size from the UI
pub fn validate_brush_size(size: i64) -> Result<u32, ValidationError> {
    if (1..=MAX_BRUSH_SIZE as i64).contains(&size) {
        Ok(size as u32)
    } else {
        Err(ValidationError::InvalidBrushSize(size))
    }
}

/// Clamp a raw mirror count into the accepted range
pub fn clamp_mirror_count(count: i64) -> u32 {
    count.clamp(1, MAX_MIRROR_COUNT as i64) as u32
}

/// Clamp a raw brush size into the accepted range
pub fn clamp_brush_size(size: i64) -> u32 {
    size.clamp(1, MAX_BRUSH_SIZE as i64) as u32
}

/// Parse a CSS hex color ("#rrggbb" or "#rgb") into opaque RGBA8
pub fn parse_hex_color(value: &str) -> Result<[u8; 4], ValidationError> {
    let invalid = || ValidationError::InvalidColor(value.to_string());

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            255,
        ]),
        // "#abc" expands to "#aabbcc"
        3 => Ok([
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
            255,
        ]),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mirror_count() {
        assert_eq!(validate_mirror_count(1), Ok(1));
        assert_eq!(validate_mirror_count(12), Ok(12));
        assert_eq!(
            validate_mirror_count(0),
            Err(ValidationError::InvalidMirrorCount(0))
        );
        assert!(validate_mirror_count(-3).is_err());
        assert!(validate_mirror_count(MAX_MIRROR_COUNT as i64 + 1).is_err());
    }

    #[test]
    fn test_validate_brush_size() {
        assert_eq!(validate_brush_size(5), Ok(5));
        assert!(validate_brush_size(0).is_err());
        assert!(validate_brush_size(-1).is_err());
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_mirror_count(-4), 1);
        assert_eq!(clamp_mirror_count(0), 1);
        assert_eq!(clamp_mirror_count(1000), MAX_MIRROR_COUNT);
        assert_eq!(clamp_brush_size(0), 1);
        assert_eq!(clamp_brush_size(40), 40);
        assert_eq!(clamp_brush_size(i64::MAX), MAX_BRUSH_SIZE);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8000"), Ok([255, 128, 0, 255]));
        assert_eq!(parse_hex_color("#FF8000"), Ok([255, 128, 0, 255]));
        assert_eq!(parse_hex_color("#f80"), Ok([255, 136, 0, 255]));
        assert!(parse_hex_color("ff8000").is_err());
        assert!(parse_hex_color("#ff80").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#+f+f+f").is_err());
    }
}
