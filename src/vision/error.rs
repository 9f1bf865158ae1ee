use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the vision pipeline.
///
/// Degenerate boxes are not errors; the noise filter drops them silently.
#[derive(Error, Debug)]
pub enum VisionError {
    // Input missing or undecodable
    #[error("Could not load image at {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    // Tunables that cannot drive a run
    #[error("Invalid vision config: {0}")]
    InvalidConfig(String),
    // Debug overlay could not be persisted
    #[error("Failed to write debug overlay to {}", path.display())]
    OverlayWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
