//! Threshold binarization and inversion for grayscale frames.

use image::GrayImage;
use tracing::debug;

/// Map one luma value to black or white.
///
/// Values strictly greater than `threshold` become 255, everything else 0.
#[inline]
pub fn binarize_value(value: u8, threshold: u8) -> u8 {
    if value > threshold { 255 } else { 0 }
}

/// Invert one luma value.
#[inline]
pub fn invert_value(value: u8) -> u8 {
    255 - value
}

/// Threshold conversion without dithering.
///
/// Pixels with values > `threshold` become white (255), others become black (0).
pub fn binarize(img: &GrayImage, threshold: u8) -> GrayImage {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying threshold conversion");

    let mut output = img.clone();
    output.iter_mut().for_each(|v| *v = binarize_value(*v, threshold));
    output
}

/// Invert every pixel in place.
pub fn invert(img: &mut GrayImage) {
    debug!(width = img.width(), height = img.height(), "Inverting colors");
    img.iter_mut().for_each(|v| *v = invert_value(*v));
}
