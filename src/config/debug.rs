//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds stay quiet on stderr even with `RUST_LOG=trace`.

pub struct DebugFlags {
    /// Emit one line per bounding box dropped by the noise filter.
    pub print_rejected_boxes: bool,
    /// Emit contour and box counts for each color mask.
    pub print_mask_stats: bool,
    /// Emit every reconstructed candle after ordering.
    pub print_raw_candles: bool,
    /// Emit per-image timings in batch mode.
    pub print_batch_timings: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_rejected_boxes: false,
    print_mask_stats: false,
    print_raw_candles: false,
    print_batch_timings: false,
};
