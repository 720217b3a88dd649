//! Options file loading.
//!
//! A JSON object with any subset of the [`StripOptions`] fields; missing
//! fields take their defaults.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use strip_engine::StripOptions;

/// Read and validate options from a JSON file.
pub fn load_options(path: &Path) -> anyhow::Result<StripOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    let opts: StripOptions = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config '{}'", path.display()))?;
    opts.validate()
        .with_context(|| format!("Invalid config '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), ?opts, "Loaded options file");
    Ok(opts)
}
