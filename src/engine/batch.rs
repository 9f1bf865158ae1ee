//! Batch mode: one independent pipeline run per image, spread over rayon's pool.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::{DEBUG_FLAGS, IMAGE_EXTENSIONS};
use crate::data::Report;

use super::pipeline::CandleExtractor;

/// Outcome for one file of a batch.
pub struct BatchItem {
    pub path: PathBuf,
    pub report: Report,
}

impl BatchItem {
    pub fn is_error(&self) -> bool {
        matches!(self.report, Report::Error { .. })
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files directly inside `dir`, sorted by path so output order is stable.
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).context(format!("Failed to read input directory: {:?}", dir))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .context(format!("Failed to list entry in {:?}", dir))?
            .path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Runs every path through `extractor` in parallel. A failing image turns into
/// an error report; it never stops the rest of the batch.
pub fn extract_batch(extractor: &CandleExtractor, paths: &[PathBuf]) -> Vec<BatchItem> {
    paths
        .par_iter()
        .map(|path| {
            let started = Instant::now();
            let report = match extractor.extract_from_path(path) {
                Ok(extraction) => Report::from_candles(extraction.display),
                Err(e) => {
                    log::warn!("Skipping {:?}: {}", path, e);
                    Report::from_error(&e)
                }
            };
            if DEBUG_FLAGS.print_batch_timings {
                log::debug!("{:?} processed in {:?}", path, started.elapsed());
            }
            BatchItem {
                path: path.clone(),
                report,
            }
        })
        .collect()
}
