// Domain types and value objects
pub mod bounding_box;
pub mod candle;

// Re-export commonly used types
pub use bounding_box::BoundingBox;
pub use candle::{CandleType, DisplayCandle, RawCandle};
