// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod utils;
pub mod vision;

// Re-export commonly used types
pub use config::{VISION, VisionConfig};
pub use data::Report;
pub use domain::{BoundingBox, CandleType, DisplayCandle, RawCandle};
pub use engine::{CandleExtractor, Extraction};
pub use vision::{BodyEstimator, VisionError};

use std::path::{Path, PathBuf};

use anyhow::Result;
// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Extract candlestick data from a chart screenshot", long_about = None)]
pub struct Cli {
    /// Path to the chart screenshot (PNG or JPEG)
    pub image_path: PathBuf,

    /// JSON file overriding the default vision tunables
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write an annotated copy of the screenshot here
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

/// Defaults, or the JSON overrides at `path` when given.
pub fn resolve_config(path: Option<&Path>) -> Result<VisionConfig> {
    match path {
        Some(path) => {
            let config = VisionConfig::load_from_path(path)?;
            log::info!("Loaded vision config from {:?}", path);
            Ok(config)
        }
        None => Ok(VISION),
    }
}

/// Runs one CLI invocation and always produces an envelope; failures become
/// error reports rather than escaping.
pub fn run_cli(args: &Cli) -> Report {
    if !args.image_path.exists() {
        return Report::file_not_found(&args.image_path);
    }

    let result = resolve_config(args.config.as_deref()).and_then(|config| {
        let extractor = CandleExtractor::new(config)?;
        let extraction = match &args.overlay {
            Some(overlay) => extractor.extract_with_overlay(&args.image_path, overlay)?,
            None => extractor.extract_from_path(&args.image_path)?,
        };
        Ok(extraction)
    });

    match result {
        Ok(extraction) => Report::from_candles(extraction.display),
        Err(e) => Report::from_error(&format!("{:#}", e)),
    }
}
