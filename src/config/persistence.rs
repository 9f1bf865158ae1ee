//! Default file locations used by the binaries

/// Where `make_demo_chart` writes the synthetic screenshot
pub const DEMO_CHART_PATH: &str = "data/input/chart_screenshot.png";

/// Extensions (lowercase) picked up by the batch extractor
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Extension of the per-image envelopes written by the batch extractor
pub const REPORT_EXTENSION: &str = "json";
