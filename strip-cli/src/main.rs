//! gif-strip: turn an animated GIF into one horizontal strip for LED matrices.
//!
//! Each frame is fitted into the matrix canvas, reduced to black and white,
//! and placed left to right in a single PNG.

mod args;
mod config;

use std::io::{self, Write};

use anyhow::Context as _;
use clap::Parser;
use strip_engine::{Background, extract_file, render_file};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    run(&cli, &mut stdout)
}

/// Convert `cli.file`, reporting progress to `out`.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let opts = cli.options()?;
    tracing::debug!(?opts, "Resolved options");

    writeln!(out, "Binarization threshold set to {}", opts.threshold)?;
    writeln!(out, "Invert colors: {}", opts.invert)?;
    writeln!(out, "White background: {}", opts.background == Background::White)?;
    writeln!(out)?;

    let frames = extract_file(&cli.file)
        .with_context(|| format!("Failed to read frames from '{}'", cli.file.display()))?;
    writeln!(out, "Processing {} frames...", frames.len())?;

    let output = cli.output_path();
    writeln!(out, "Saving as {}", output.display())?;
    let done = render_file(&frames, &output, &opts)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    tracing::info!(
        frames = done.frame_count,
        width = done.width,
        height = done.height,
        "Strip written"
    );
    writeln!(out, "Done")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Frame, Rgba, RgbaImage};
    use std::fs;
    use std::path::{Path, PathBuf};
    use strip_engine::StripError;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gif-strip-run-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a GIF with one solid 20x10 frame per color.
    fn write_gif(path: &Path, colors: &[[u8; 4]]) {
        let file = fs::File::create(path).unwrap();
        let mut encoder = GifEncoder::new(file);
        for &color in colors {
            let img = RgbaImage::from_pixel(20, 10, Rgba(color));
            encoder.encode_frame(Frame::new(img)).unwrap();
        }
    }

    fn run_with(args: &[&str]) -> (anyhow::Result<()>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_prints_progress_in_order() {
        let dir = scratch_dir("ok");
        let input = dir.join("anim.gif");
        write_gif(&input, &[[128, 128, 128, 255], [128, 128, 128, 255]]);

        let (result, stdout) = run_with(&["gif-strip", input.to_str().unwrap()]);
        result.unwrap();

        let output = dir.join("anim.png");
        let expected = format!(
            "Binarization threshold set to 200\n\
             Invert colors: false\n\
             White background: false\n\
             \n\
             Processing 2 frames...\n\
             Saving as {}\n\
             Done\n",
            output.display()
        );
        assert_eq!(stdout, expected);

        let saved = image::open(&output).unwrap();
        assert_eq!((saved.width(), saved.height()), (80, 11));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_reports_flag_settings() {
        let dir = scratch_dir("flags");
        let input = dir.join("anim.gif");
        write_gif(&input, &[[0, 0, 0, 255], [255, 255, 255, 255], [0, 0, 0, 255]]);
        let output = dir.join("custom.png");

        let (result, stdout) = run_with(&[
            "gif-strip",
            "-b",
            "150",
            "-i",
            "-w",
            "-o",
            output.to_str().unwrap(),
            input.to_str().unwrap(),
        ]);
        result.unwrap();

        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], "Binarization threshold set to 150");
        assert_eq!(lines[1], "Invert colors: true");
        assert_eq!(lines[2], "White background: true");
        assert_eq!(lines[4], "Processing 3 frames...");
        assert_eq!(lines[5], format!("Saving as {}", output.display()));
        assert_eq!(lines[6], "Done");
        assert!(output.exists());
        assert!(!dir.join("anim.png").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_single_frame_fails_without_done() {
        let dir = scratch_dir("still");
        let input = dir.join("still.gif");
        write_gif(&input, &[[0, 0, 0, 255]]);

        let (result, stdout) = run_with(&["gif-strip", input.to_str().unwrap()]);
        let err = result.unwrap_err();

        assert!(matches!(err.downcast_ref::<StripError>(), Some(StripError::NotAnimated)));
        assert_eq!(
            stdout,
            "Binarization threshold set to 200\nInvert colors: false\nWhite background: false\n\n"
        );
        assert!(!stdout.contains("Done"));
        assert!(!dir.join("still.png").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
