//! Frame extraction from animated sources.
//!
//! Frames are decoded into memory in temporal order. GIF frames come out
//! fully composited (disposal and offsets already applied) as RGBA.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage};
use tracing::debug;

use crate::{Result, StripError};

/// Something that yields the ordered still frames of an animation.
pub trait FrameSource {
    /// Consume the source and return every frame in order.
    fn into_frames(self) -> Result<Vec<DynamicImage>>;
}

/// Frames that are already in memory.
impl FrameSource for Vec<DynamicImage> {
    fn into_frames(self) -> Result<Vec<DynamicImage>> {
        Ok(self)
    }
}

/// An animated GIF read from any seekable reader.
pub struct GifSource<R> {
    reader: R,
}

impl GifSource<BufReader<File>> {
    /// Open a GIF file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead + Seek> GifSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Seek> FrameSource for GifSource<R> {
    fn into_frames(self) -> Result<Vec<DynamicImage>> {
        let decoder = GifDecoder::new(self.reader).map_err(StripError::Decode)?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .map_err(StripError::Decode)?;

        debug!(count = frames.len(), "Decoded GIF frames");
        if frames.len() <= 1 {
            return Err(StripError::NotAnimated);
        }

        Ok(frames
            .into_iter()
            .map(|frame| DynamicImage::ImageRgba8(frame.into_buffer()))
            .collect())
    }
}

/// Check that `path` names an existing `.gif` file.
pub fn validate_source(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(StripError::InvalidInput(format!(
            "file does not exist: {}",
            path.display()
        )));
    }
    let is_gif = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.trim().eq_ignore_ascii_case("gif"));
    if !is_gif {
        return Err(StripError::InvalidInput("only .gif files are supported".into()));
    }
    Ok(())
}
