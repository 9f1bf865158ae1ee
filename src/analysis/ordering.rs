//! Chronological ordering of reconstructed candles.

use crate::domain::RawCandle;

/// Sorts left to right by `x_center`. The sort is stable, so candles sharing
/// an X keep their insertion order.
pub fn order_chronologically(mut candles: Vec<RawCandle>) -> Vec<RawCandle> {
    candles.sort_by(|a, b| a.x_center.total_cmp(&b.x_center));
    candles
}
