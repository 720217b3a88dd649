//! Horizontal concatenation of processed frames.

use image::buffer::ConvertBuffer;
use image::imageops;
use image::{GrayImage, RgbImage};
use tracing::debug;

use crate::{Result, StripError};

/// Concatenate frames horizontally (left to right).
///
/// All frames are top-aligned on a black RGB canvas. The output height equals
/// the maximum frame height; shorter frames leave black below them.
pub fn stitch_horizontal(frames: &[GrayImage]) -> Result<RgbImage> {
    if frames.is_empty() {
        return Err(StripError::EmptySequence);
    }

    let total_width = frames
        .iter()
        .try_fold(0u32, |acc, f| acc.checked_add(f.width()))
        .ok_or_else(|| {
            StripError::InvalidGeometry(format!(
                "combined width of {} frames exceeds {} pixels",
                frames.len(),
                u32::MAX
            ))
        })?;
    let max_height = frames.iter().map(|f| f.height()).max().unwrap_or(0);
    debug!(
        count = frames.len(),
        total_width,
        max_height,
        "Stitching frames"
    );

    let mut strip = RgbImage::new(total_width, max_height);

    let mut x_offset = 0i64;
    for frame in frames {
        let rgb: RgbImage = frame.convert();
        imageops::replace(&mut strip, &rgb, x_offset, 0);
        x_offset += i64::from(frame.width());
    }

    Ok(strip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn test_stitch_sums_widths() {
        let frames = vec![GrayImage::new(40, 11), GrayImage::new(40, 11), GrayImage::new(7, 11)];
        let result = stitch_horizontal(&frames).unwrap();
        assert_eq!(result.width(), 87);
        assert_eq!(result.height(), 11);
    }

    #[test]
    fn test_stitch_uses_max_height_with_black_residual() {
        let frames = vec![
            GrayImage::from_pixel(3, 2, Luma([255])),
            GrayImage::from_pixel(2, 5, Luma([255])),
        ];
        let result = stitch_horizontal(&frames).unwrap();
        assert_eq!(result.dimensions(), (5, 5));

        // Below the short first frame stays black
        assert_eq!(*result.get_pixel(0, 1), Rgb([255, 255, 255]));
        assert_eq!(*result.get_pixel(0, 2), Rgb([0, 0, 0]));
        assert_eq!(*result.get_pixel(2, 4), Rgb([0, 0, 0]));
        // Tall second frame covers full height
        assert_eq!(*result.get_pixel(3, 4), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_stitch_places_frames_in_order() {
        let frames = vec![
            GrayImage::from_pixel(2, 1, Luma([0])),
            GrayImage::from_pixel(2, 1, Luma([255])),
            GrayImage::from_pixel(2, 1, Luma([0])),
        ];
        let result = stitch_horizontal(&frames).unwrap();
        let row: Vec<u8> = (0..6).map(|x| result.get_pixel(x, 0).0[0]).collect();
        assert_eq!(row, vec![0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn test_stitch_empty_sequence_is_error() {
        let err = stitch_horizontal(&[]);
        assert!(matches!(err, Err(StripError::EmptySequence)));
    }

    #[test]
    fn test_stitch_width_overflow_is_error() {
        // Zero-height frames keep the buffers empty while the widths overflow u32
        let half = 1u32 << 31;
        let frames = vec![GrayImage::new(half, 0), GrayImage::new(half, 0)];
        let err = stitch_horizontal(&frames);
        assert!(matches!(err, Err(StripError::InvalidGeometry(_))));
    }
}
