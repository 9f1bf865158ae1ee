//! Pixel-to-price inversion.
//!
//! Image rows grow downward while prices grow upward. Each row is subtracted
//! from one global reference (`lowest row + padding`), a pure shift with no
//! scaling, so consumers must auto-scale. Relative order and distances are
//! preserved; absolute prices are not recovered.

use crate::domain::{DisplayCandle, RawCandle};
use crate::utils::maths_utils::{get_min_max, try_get_max};

fn all_rows(candles: &[RawCandle]) -> Vec<f64> {
    candles.iter().flat_map(RawCandle::price_rows).collect()
}

/// `max(y_open, y_close, y_high, y_low over all candles) + padding`,
/// or `None` when there are no candles.
pub fn reference_height(candles: &[RawCandle], padding: f64) -> Option<f64> {
    try_get_max(&all_rows(candles)).map(|max_y| max_y + padding)
}

/// Maps ordered candles to display candles; `time` is the position in `candles`.
pub fn invert_axis(candles: &[RawCandle], padding: f64) -> Vec<DisplayCandle> {
    let rows = all_rows(candles);
    if rows.is_empty() {
        return Vec::new();
    }
    let (min_y, max_y) = get_min_max(&rows);
    let reference = max_y + padding;
    log::debug!(
        "Inverting {} candles spanning rows {}..{} against reference {}",
        candles.len(),
        min_y,
        max_y,
        reference
    );

    candles
        .iter()
        .enumerate()
        .map(|(time, c)| DisplayCandle {
            time,
            open: reference - c.y_open,
            close: reference - c.y_close,
            high: reference - c.y_high,
            low: reference - c.y_low,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(y_open: f64, y_close: f64, y_high: f64, y_low: f64, is_bullish: bool) -> RawCandle {
        RawCandle {
            x_center: 0.0,
            y_open,
            y_close,
            y_high,
            y_low,
            is_bullish,
            width: 10.0,
        }
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(reference_height(&[], 50.0), None);
        assert!(invert_axis(&[], 50.0).is_empty());
    }

    #[test]
    fn test_reference_uses_global_max_plus_padding() {
        let candles = [
            candle(275.0, 225.0, 200.0, 300.0, true),
            candle(137.5, 212.5, 100.0, 250.0, false),
        ];
        assert_eq!(reference_height(&candles, 50.0), Some(350.0));
        assert_eq!(reference_height(&candles, 0.0), Some(300.0));
    }

    #[test]
    fn test_affine_shift_and_time_index() {
        let candles = [
            candle(275.0, 225.0, 200.0, 300.0, true),
            candle(137.5, 212.5, 100.0, 250.0, false),
        ];
        let display = invert_axis(&candles, 50.0);
        assert_eq!(display.len(), 2);

        for (raw, out) in candles.iter().zip(&display) {
            assert_eq!(out.open + raw.y_open, 350.0);
            assert_eq!(out.close + raw.y_close, 350.0);
            assert_eq!(out.high + raw.y_high, 350.0);
            assert_eq!(out.low + raw.y_low, 350.0);
        }
        assert_eq!(display[0].time, 0);
        assert_eq!(display[1].time, 1);
        assert_eq!(display[0].low, 50.0, "lowest row lands on the padding");
    }

    #[test]
    fn test_inversion_flips_ordering() {
        let bullish = candle(275.0, 225.0, 200.0, 300.0, true);
        let out = invert_axis(&[bullish], 50.0)[0];
        assert!(out.close > out.open, "bullish closes above its open");
        assert!(out.high >= out.close.max(out.open));
        assert!(out.low <= out.close.min(out.open));
    }
}
