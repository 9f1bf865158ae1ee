//! Turns bounding boxes into pixel-space candles.

use crate::config::{DEBUG_FLAGS, NoiseFilter};
use crate::domain::{BoundingBox, CandleType, RawCandle};

/// Locates the body inside a candle's bounding box.
pub trait BodyEstimator: Send + Sync {
    /// Returns `(body_top, body_bottom)` in pixel rows, with
    /// `bbox.top() <= body_top <= body_bottom <= bbox.bottom()`.
    fn body_span(&self, bbox: &BoundingBox) -> (f64, f64);
}

/// Assumes the body is vertically centred and trims a fixed fraction of the
/// height from each end. With 0.25 the body is the middle half of the box.
///
/// This is an approximation: it ignores where the body really starts, which
/// needs per-row widths rather than the box alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalBodyEstimator {
    pub inset_fraction: f64,
}

impl BodyEstimator for FractionalBodyEstimator {
    fn body_span(&self, bbox: &BoundingBox) -> (f64, f64) {
        let inset = bbox.height as f64 * self.inset_fraction;
        (bbox.top() + inset, bbox.bottom() - inset)
    }
}

impl NoiseFilter {
    /// True for boxes worth reconstructing: tall enough and not a flat smear.
    pub fn accepts(&self, bbox: &BoundingBox) -> bool {
        if bbox.height < self.min_height {
            return false;
        }
        bbox.width as f64 <= bbox.height as f64 * self.max_width_to_height_ratio
    }
}

pub struct CandleReconstructor<'a> {
    noise: NoiseFilter,
    estimator: &'a dyn BodyEstimator,
}

impl<'a> CandleReconstructor<'a> {
    pub fn new(noise: NoiseFilter, estimator: &'a dyn BodyEstimator) -> Self {
        Self { noise, estimator }
    }

    /// One candle for a surviving box, `None` when the noise filter rejects it.
    pub fn reconstruct(&self, bbox: &BoundingBox, candle_type: CandleType) -> Option<RawCandle> {
        if !self.noise.accepts(bbox) {
            if DEBUG_FLAGS.print_rejected_boxes {
                log::trace!("Dropping {} box {:?} as noise", candle_type, bbox);
            }
            return None;
        }

        let (body_top, body_bottom) = self.estimator.body_span(bbox);

        // A rising candle closes at the top of its body
        let (y_open, y_close) = match candle_type {
            CandleType::Bullish => (body_bottom, body_top),
            CandleType::Bearish => (body_top, body_bottom),
        };

        Some(RawCandle {
            x_center: bbox.x_center(),
            y_open,
            y_close,
            y_high: bbox.top(),
            y_low: bbox.bottom(),
            is_bullish: candle_type.is_bullish(),
            width: bbox.width as f64,
        })
    }

    pub fn reconstruct_all(&self, boxes: &[BoundingBox], candle_type: CandleType) -> Vec<RawCandle> {
        boxes
            .iter()
            .filter_map(|bbox| self.reconstruct(bbox, candle_type))
            .collect()
    }
}
