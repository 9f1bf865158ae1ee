use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_vision::config::DEMO_CHART_PATH;
use chart_vision::data::{DemoCandle, draw_demo_chart};
use clap::Parser;

/// Writes a synthetic 400x400 chart with one bullish and two bearish candles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to write the PNG
    #[arg(long, default_value = DEMO_CHART_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    build_demo_chart(&args.output)
}

fn build_demo_chart(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let candles = DemoCandle::DEFAULT_SET;
    let chart = draw_demo_chart(&candles, 400, 400);
    chart
        .save(output_path)
        .with_context(|| format!("Failed to write demo chart to {:?}", output_path))?;

    println!(
        "✅ Demo chart written to {:?} with {} candles.",
        output_path,
        candles.len()
    );
    Ok(())
}
