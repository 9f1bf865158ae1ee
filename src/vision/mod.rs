// Image-space stages of the pipeline
pub mod color_mask;
pub mod error;
pub mod overlay;
pub mod reconstruct;
pub mod shapes;

// Re-export commonly used types
pub use color_mask::{ColorMasks, segment};
pub use error::VisionError;
pub use overlay::render_overlay;
pub use reconstruct::{BodyEstimator, CandleReconstructor, FractionalBodyEstimator};
pub use shapes::extract_boxes;
