//! Configuration module for the chart vision pipeline.

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod vision;

// Re-export commonly used items
pub use persistence::{DEMO_CHART_PATH, IMAGE_EXTENSIONS, REPORT_EXTENSION};
pub use vision::{
    AxisSettings, BodyHeuristic, ColorBands, HsvBound, HsvRange, KernelShape, NoiseFilter, VISION,
    VisionConfig,
};
