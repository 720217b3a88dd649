//! Command-line arguments and their validation.

use std::path::PathBuf;

use clap::Parser;
use strip_engine::{Background, Justify, StripOptions, validate_source};

use crate::config;

/// Convert an animated GIF into a single image with its frames side by side.
#[derive(Parser, Debug)]
#[command(name = "gif-strip", version)]
#[command(about = "Convert an animated GIF into a single image with its frames", long_about = None)]
pub struct Cli {
    /// GIF file path
    #[arg(value_name = "FILE", value_parser = parse_source)]
    pub file: PathBuf,

    /// Binarization threshold (black and white conversion) [default: 200]
    #[arg(short = 'b', long = "bin-threshold")]
    pub bin_threshold: Option<u8>,

    /// Invert colors
    #[arg(short, long)]
    pub invert: bool,

    /// White background. By default, black is used.
    #[arg(short = 'w', long = "white-bg")]
    pub white_bg: bool,

    /// Frame alignment inside the canvas: left, center or right [default: center]
    #[arg(long, value_name = "MODE")]
    pub justify: Option<Justify>,

    /// JSON file with canvas geometry and filter options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output PNG path (default: input with .png extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolve the options for this run: config file first, then flags.
    pub fn options(&self) -> anyhow::Result<StripOptions> {
        let base = match &self.config {
            Some(path) => config::load_options(path)?,
            None => StripOptions::default(),
        };
        Ok(self.apply_flags(base))
    }

    fn apply_flags(&self, mut opts: StripOptions) -> StripOptions {
        if let Some(threshold) = self.bin_threshold {
            opts.threshold = threshold;
        }
        if self.invert {
            opts.invert = true;
        }
        if self.white_bg {
            opts.background = Background::White;
        }
        if let Some(justify) = self.justify {
            opts.justify = justify;
        }
        opts
    }

    /// Where the strip is written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| strip_engine::output_path_for(&self.file))
    }
}

fn parse_source(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    validate_source(&path).map_err(|e| e.to_string())?;
    Ok(path)
}
