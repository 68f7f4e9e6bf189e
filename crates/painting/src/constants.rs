/// Largest accepted mirror fold count. Not a magic number - may change.
pub const MAX_MIRROR_COUNT: u32 = 64;

/// Largest accepted brush size in pixels.
pub const MAX_BRUSH_SIZE: u32 = 512;

/// Fully transparent pixel, the initial surface contents.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Fill used by the brush preview.
pub const PREVIEW_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Prefix of exported image file names.
pub const EXPORT_FILE_PREFIX: &str = "drawing_";
