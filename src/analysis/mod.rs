// Post-reconstruction analysis: ordering and axis inversion
pub mod axis_inversion;
pub mod ordering;

// Re-export commonly used items
pub use axis_inversion::{invert_axis, reference_height};
pub use ordering::order_chronologically;
