// Output envelopes and synthetic inputs
pub mod demo_chart;
pub mod report;

// Re-export commonly used types
pub use demo_chart::{DemoCandle, draw_demo_chart};
pub use report::Report;
