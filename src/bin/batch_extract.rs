use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_vision::config::REPORT_EXTENSION;
use chart_vision::engine::{BatchItem, CandleExtractor, collect_image_paths, extract_batch};
use chart_vision::resolve_config;
use clap::Parser;

/// Extracts candles from every screenshot in a directory, in parallel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding PNG/JPEG screenshots
    input_dir: PathBuf,

    /// Where the per-image JSON files go (defaults to the input directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON file overriding the default vision tunables
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    run_batch(&args)
}

fn report_path(item: &BatchItem, output_dir: &Path) -> PathBuf {
    let stem = item
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    output_dir.join(format!("{}.{}", stem, REPORT_EXTENSION))
}

fn run_batch(args: &Args) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let extractor = CandleExtractor::new(config).context("Invalid vision config")?;

    let paths = collect_image_paths(&args.input_dir)?;
    log::info!("Found {} images in {:?}", paths.len(), args.input_dir);

    let output_dir = args.output_dir.as_deref().unwrap_or(&args.input_dir);
    let items = extract_batch(&extractor, &paths);

    let mut failures = 0;
    for item in &items {
        if item.is_error() {
            failures += 1;
        }
        let out = report_path(item, output_dir);
        item.report.save_to_path(&out)?;
        log::debug!("Wrote {:?}", out);
    }

    log::info!(
        "Processed {} images ({} ok, {} failed) into {:?}",
        items.len(),
        items.len() - failures,
        failures,
        output_dir
    );
    Ok(())
}
