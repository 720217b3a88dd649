//! Frame-strip conversion for LED matrix animations.
//!
//! Splits an animated GIF into frames, fits each frame into a fixed canvas,
//! binarizes it, and stitches every frame left-to-right into one image.

pub mod binarize;
pub mod frames;
pub mod options;
pub mod pipeline;
pub mod rescale;
pub mod stitch;

// Re-exports for convenience
pub use binarize::{binarize, invert};
pub use frames::{FrameSource, GifSource, validate_source};
pub use options::{Background, Justify, ScaleRule, StripOptions};
pub use pipeline::{
    Conversion, convert, extract_file, output_path_for, process_frames, render_file, save_png,
};
pub use rescale::{fit_size, justify_offset, rescale_all, rescale_frame};
pub use stitch::stitch_horizontal;

/// Default canvas width of the target LED matrix.
pub const DEFAULT_WIDTH: u32 = 40;

/// Default canvas height of the target LED matrix.
pub const DEFAULT_HEIGHT: u32 = 11;

/// Default width used to compute justification offsets.
pub const DEFAULT_JUSTIFY_WIDTH: u32 = 33;

/// Largest accepted canvas width or height.
pub const MAX_CANVAS_SIDE: u32 = 4096;

/// Default binarization threshold.
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Errors that can occur while converting an animation to a strip.
#[derive(Debug, thiserror::Error)]
pub enum StripError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Source image is not animated")]
    NotAnimated,

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Cannot stitch an empty frame sequence")]
    EmptySequence,

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for strip-engine operations.
pub type Result<T> = std::result::Result<T, StripError>;
