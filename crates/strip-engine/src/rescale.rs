//! Fitting frames into the fixed LED canvas.
//!
//! Each frame is resized with Lanczos3 filtering, binarized, optionally
//! inverted, and pasted onto a background canvas at a justified x offset.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

use crate::binarize::{binarize, invert};
use crate::options::{Justify, ScaleRule, StripOptions};
use crate::{Result, StripError};

/// Compute the size a `frame_w` x `frame_h` frame is resized to before pasting.
///
/// Frames relatively taller than the canvas keep the canvas height. Wider
/// (or equal ratio) frames take the canvas width and a height given by
/// `opts.scale_rule`.
pub fn fit_size(frame_w: u32, frame_h: u32, opts: &StripOptions) -> Result<(u32, u32)> {
    if frame_w == 0 || frame_h == 0 {
        return Err(StripError::InvalidGeometry(format!(
            "frame has no pixels ({frame_w}x{frame_h})"
        )));
    }

    let width = f64::from(opts.width);
    let height = f64::from(opts.height);
    let desired_ratio = width / height;
    let actual_ratio = f64::from(frame_w) / f64::from(frame_h);

    let (new_w, new_h) = if actual_ratio < desired_ratio {
        ((height * actual_ratio).round() as u32, opts.height)
    } else {
        let new_h = match opts.scale_rule {
            ScaleRule::Literal => (actual_ratio / width).round(),
            ScaleRule::AspectPreserving => (width / actual_ratio).round(),
        };
        (opts.width, new_h as u32)
    };

    if new_w == 0 || new_h == 0 {
        return Err(StripError::InvalidGeometry(format!(
            "{frame_w}x{frame_h} frame scales to {new_w}x{new_h} on a {}x{} canvas ({:?} rule)",
            opts.width, opts.height, opts.scale_rule
        )));
    }

    Ok((new_w, new_h))
}

/// Horizontal paste offset for a resized frame of `new_width` pixels.
///
/// May be negative when the frame is wider than `justify_width`.
pub fn justify_offset(justify: Justify, justify_width: u32, new_width: u32) -> i64 {
    let justify_width = f64::from(justify_width);
    let new_width = f64::from(new_width);

    let box_x = match justify {
        Justify::Left => 0.0,
        Justify::Center => justify_width / 2.0 - new_width / 2.0,
        Justify::Right => justify_width - new_width,
    };
    box_x.round() as i64
}

/// Turn one raw frame into a binarized, justified canvas.
pub fn rescale_frame(frame: &DynamicImage, opts: &StripOptions) -> Result<GrayImage> {
    let (orig_w, orig_h) = (frame.width(), frame.height());
    let (new_w, new_h) = fit_size(orig_w, orig_h, opts)?;

    debug!(
        orig_w,
        orig_h,
        new_width = new_w,
        new_height = new_h,
        "Resizing frame to fit canvas"
    );
    let resized = frame.resize_exact(new_w, new_h, FilterType::Lanczos3);

    let mut canvas = GrayImage::from_pixel(opts.width, opts.height, Luma([opts.background.luma()]));
    let box_x = justify_offset(opts.justify, opts.justify_width, new_w);

    let mut filtered = binarize(&resized.to_luma8(), opts.threshold);
    if opts.invert {
        invert(&mut filtered);
    }

    debug!(box_x, justify = %opts.justify, "Pasting frame onto canvas");
    imageops::replace(&mut canvas, &filtered, box_x, 0);

    Ok(canvas)
}

/// Rescale every frame, preserving count and order.
pub fn rescale_all(frames: &[DynamicImage], opts: &StripOptions) -> Result<Vec<GrayImage>> {
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| {
            debug!(index, "Rescaling frame");
            rescale_frame(frame, opts)
        })
        .collect()
}
