//! End-to-end conversion: extract, rescale, stitch, save.
//!
//! File conversion runs in two steps, [`extract_file`] and [`render_file`],
//! so callers can report the frame count before the frames are processed.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use tracing::{debug, info, warn};

use crate::frames::{FrameSource, GifSource, validate_source};
use crate::options::StripOptions;
use crate::rescale::rescale_all;
use crate::stitch::stitch_horizontal;
use crate::{Result, StripError};

/// Summary of a strip written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub frame_count: usize,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Rescale, binarize, and justify every frame.
pub fn process_frames(frames: &[DynamicImage], opts: &StripOptions) -> Result<Vec<GrayImage>> {
    opts.validate()?;
    rescale_all(frames, opts)
}

/// Run the whole pipeline in memory.
pub fn convert<S: FrameSource>(source: S, opts: &StripOptions) -> Result<RgbImage> {
    opts.validate()?;
    let frames = source.into_frames()?;
    let canvases = process_frames(&frames, opts)?;
    stitch_horizontal(&canvases)
}

/// Default output location: next to the input, same stem, `.png`.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("png")
}

/// Encode `strip` as PNG at `path`.
///
/// The image is written to a `.part` sibling first and renamed into place, so
/// `path` is either the complete new image or untouched.
pub fn save_png(strip: &RgbImage, path: &Path) -> Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    if let Err(e) = strip.save_with_format(&partial, ImageFormat::Png) {
        warn!(path = %path.display(), "Failed to encode strip: {e}");
        let _ = fs::remove_file(&partial);
        return Err(StripError::Encode(e));
    }

    if let Err(e) = fs::rename(&partial, path) {
        warn!(path = %path.display(), "Failed to move encoded strip into place: {e}");
        let _ = fs::remove_file(&partial);
        return Err(StripError::Io(e));
    }

    debug!(
        path = %path.display(),
        width = strip.width(),
        height = strip.height(),
        "Saved strip"
    );
    Ok(())
}

/// Validate a GIF path and decode its frames.
pub fn extract_file(input: &Path) -> Result<Vec<DynamicImage>> {
    validate_source(input)?;
    let frames = GifSource::open(input)?.into_frames()?;
    info!(input = %input.display(), frame_count = frames.len(), "Extracted frames");
    Ok(frames)
}

/// Process extracted frames and write the stitched strip to `output`.
pub fn render_file(
    frames: &[DynamicImage],
    output: &Path,
    opts: &StripOptions,
) -> Result<Conversion> {
    let canvases = process_frames(frames, opts)?;
    let strip = stitch_horizontal(&canvases)?;
    save_png(&strip, output)?;

    Ok(Conversion {
        frame_count: frames.len(),
        output: output.to_path_buf(),
        width: strip.width(),
        height: strip.height(),
    })
}
