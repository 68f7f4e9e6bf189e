//! Surface export for the painting pipeline

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::constants::EXPORT_FILE_PREFIX;
use crate::error::PaintError;

use super::PaintingPipeline;

const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]T[hour][minute][second]Z");

/// The current canvas encoded for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// Suggested file name, e.g. `drawing_20231114T221320Z.png`
    pub file_name: String,
    /// PNG bytes
    pub png: Vec<u8>,
}

impl PaintingPipeline {
    /// Encode the surface as PNG with a timestamped file name
    pub fn export_png(&self) -> Result<ExportedImage, PaintError> {
        let png = self.surface.encode_png()?;
        let file_name = export_file_name(OffsetDateTime::now_utc());
        debug!("export_png: {} ({} bytes)", file_name, png.len());
        Ok(ExportedImage { file_name, png })
    }

    /// Get raw surface data as bytes (RGBA8, row-major)
    pub fn surface_as_bytes(&self) -> &[u8] {
        self.surface.as_bytes()
    }

    /// Get a single pixel's color
    ///
    /// Returns None if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.surface.get_pixel(x, y)
    }
}

/// File name for an export taken at `time`: `drawing_YYYYMMDDTHHMMSSZ.png` (UTC)
pub fn export_file_name(time: OffsetDateTime) -> String {
    let stamp = time
        .to_offset(UtcOffset::UTC)
        .format(FILE_STAMP)
        .unwrap_or_else(|_| "19700101T000000Z".to_string());
    format!("{}{}.png", EXPORT_FILE_PREFIX, stamp)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_export_file_name() {
        let time = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(export_file_name(time), "drawing_20231114T221320Z.png");

        assert_eq!(
            export_file_name(OffsetDateTime::UNIX_EPOCH),
            "drawing_19700101T000000Z.png"
        );

        // Leap day
        let time = datetime!(2000-02-29 01:01:01 UTC);
        assert_eq!(export_file_name(time), "drawing_20000229T010101Z.png");
    }

    #[test]
    fn test_export_file_name_is_utc() {
        let local = datetime!(2024-01-01 01:30:00 +02:00);
        assert_eq!(export_file_name(local), "drawing_20231231T233000Z.png");
    }

    #[test]
    fn test_export_png_matches_surface() {
        let mut pipeline = PaintingPipeline::new(20, 10);
        pipeline.begin_stroke(5.0, 5.0);
        pipeline.end_stroke();

        let exported = pipeline.export_png().unwrap();
        let image = image::load_from_memory(&exported.png).unwrap().to_rgba8();
        assert_eq!(image.as_raw().as_slice(), pipeline.surface_as_bytes());
        assert_eq!(pipeline.get_pixel(5, 5), Some([0, 0, 0, 255]));
    }
}
