//! Conversion options.
//!
//! Target geometry, justification, and filter settings for one conversion.
//! Defaults describe the 40x11 LED matrix the strips were first made for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_HEIGHT, DEFAULT_JUSTIFY_WIDTH, DEFAULT_THRESHOLD, DEFAULT_WIDTH, MAX_CANVAS_SIDE,
    Result, StripError,
};

/// Horizontal alignment of a rescaled frame inside its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for Justify {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(format!("must be 'left', 'center' or 'right', got '{other}'")),
        }
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Canvas fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Black,
    White,
}

impl Background {
    /// Luma value the canvas is filled with.
    pub fn luma(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::White => 255,
        }
    }
}

/// How the height is derived when a frame is at least as wide as the canvas ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleRule {
    /// `round(actual_ratio / width)`, kept for parity with strips made by
    /// earlier versions of the tool. Yields a zero height for most frames.
    #[default]
    Literal,

    /// `round(width / actual_ratio)`, which keeps the frame's aspect ratio.
    AspectPreserving,
}

/// Options controlling how frames are fitted, filtered, and laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripOptions {
    /// Canvas width of a single frame.
    pub width: u32,

    /// Canvas height of a single frame.
    pub height: u32,

    /// Nominal width used for the justification offset only.
    /// Independent of `width` (33 vs 40 on the default matrix).
    pub justify_width: u32,

    pub justify: Justify,

    /// Pixels strictly brighter than this become white.
    pub threshold: u8,

    /// Invert colors after binarization.
    pub invert: bool,

    pub background: Background,

    pub scale_rule: ScaleRule,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            justify_width: DEFAULT_JUSTIFY_WIDTH,
            justify: Justify::Center,
            threshold: DEFAULT_THRESHOLD,
            invert: false,
            background: Background::Black,
            scale_rule: ScaleRule::Literal,
        }
    }
}

impl StripOptions {
    /// Create options with the LED matrix defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set canvas size.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder: set justification width.
    pub fn with_justify_width(mut self, val: u32) -> Self {
        self.justify_width = val;
        self
    }

    /// Builder: set justification mode.
    pub fn with_justify(mut self, val: Justify) -> Self {
        self.justify = val;
        self
    }

    /// Builder: set binarization threshold.
    pub fn with_threshold(mut self, val: u8) -> Self {
        self.threshold = val;
        self
    }

    /// Builder: set invert flag.
    pub fn with_invert(mut self, val: bool) -> Self {
        self.invert = val;
        self
    }

    /// Builder: set background color.
    pub fn with_background(mut self, val: Background) -> Self {
        self.background = val;
        self
    }

    /// Builder: set the wide-frame scale rule.
    pub fn with_scale_rule(mut self, val: ScaleRule) -> Self {
        self.scale_rule = val;
        self
    }

    /// Check that each canvas side is between 1 and [`MAX_CANVAS_SIDE`].
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StripError::InvalidGeometry(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
            return Err(StripError::InvalidGeometry(format!(
                "canvas sides are limited to {MAX_CANVAS_SIDE}, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
