pub mod batch;
pub mod pipeline;

// Re-export key components
pub use batch::{BatchItem, collect_image_paths, extract_batch};
pub use pipeline::{CandleExtractor, Extraction, load_image};
