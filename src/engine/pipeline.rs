use std::path::Path;

use image::RgbImage;
use strum::IntoEnumIterator;

use crate::analysis::{invert_axis, order_chronologically};
use crate::config::{DEBUG_FLAGS, VisionConfig};
use crate::domain::{CandleType, DisplayCandle, RawCandle};
use crate::vision::{
    BodyEstimator, CandleReconstructor, FractionalBodyEstimator, VisionError, extract_boxes,
    render_overlay, segment,
};

/// Result of one run over one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Pixel-space candles, left to right
    pub raw: Vec<RawCandle>,
    /// Same candles with the Y axis inverted
    pub display: Vec<DisplayCandle>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// The pipeline entry point. Holds an immutable, validated configuration; each
/// call is independent of every other.
pub struct CandleExtractor {
    config: VisionConfig,
    body_estimator: Box<dyn BodyEstimator>,
}

impl CandleExtractor {
    pub fn new(config: VisionConfig) -> Result<Self, VisionError> {
        config.validate()?;
        let body_estimator = Box::new(FractionalBodyEstimator {
            inset_fraction: config.body.inset_fraction,
        });
        Ok(Self {
            config,
            body_estimator,
        })
    }

    /// Swaps the body heuristic without touching the other stages.
    pub fn with_body_estimator(mut self, body_estimator: Box<dyn BodyEstimator>) -> Self {
        self.body_estimator = body_estimator;
        self
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// Segment, close, box, reconstruct and order. Never fails: an image with
    /// no candle-colored shapes gives an empty vector.
    pub fn extract_raw(&self, image: &RgbImage) -> Vec<RawCandle> {
        let masks = segment(image, &self.config.colors);
        let reconstructor = CandleReconstructor::new(self.config.noise, self.body_estimator.as_ref());

        let mut candles = Vec::new();
        for candle_type in CandleType::iter() {
            let boxes = extract_boxes(masks.for_type(candle_type), &self.config.kernel);
            let reconstructed = reconstructor.reconstruct_all(&boxes, candle_type);
            if DEBUG_FLAGS.print_mask_stats {
                log::debug!(
                    "{} mask: {} contours, {} kept after noise filter",
                    candle_type,
                    boxes.len(),
                    reconstructed.len()
                );
            }
            candles.extend(reconstructed);
        }

        let ordered = order_chronologically(candles);
        if DEBUG_FLAGS.print_raw_candles {
            for (idx, c) in ordered.iter().enumerate() {
                log::trace!(
                    "Candle {}: {} X={} open/close={}/{}",
                    idx,
                    c.candle_type(),
                    c.x_center,
                    c.y_open,
                    c.y_close
                );
            }
        }
        ordered
    }

    /// Raw candles plus their inverted display form.
    pub fn extract(&self, image: &RgbImage) -> Extraction {
        let raw = self.extract_raw(image);
        let display = invert_axis(&raw, self.config.axis.reference_padding);
        Extraction { raw, display }
    }

    /// Decodes the file and runs the full pipeline.
    pub fn extract_from_path(&self, path: &Path) -> Result<Extraction, VisionError> {
        let image = load_image(path)?;
        let extraction = self.extract(&image);
        log::info!(
            "Detected {} candles in {:?}",
            extraction.raw.len(),
            path
        );
        Ok(extraction)
    }

    /// Like `extract_from_path`, also writing the debug overlay to `overlay_path`.
    pub fn extract_with_overlay(
        &self,
        path: &Path,
        overlay_path: &Path,
    ) -> Result<Extraction, VisionError> {
        let image = load_image(path)?;
        let extraction = self.extract(&image);
        render_overlay(&image, &extraction.raw, overlay_path)?;
        Ok(extraction)
    }
}

/// Reads any format the decoder supports and normalises to 8-bit RGB.
pub fn load_image(path: &Path) -> Result<RgbImage, VisionError> {
    let image = image::open(path).map_err(|source| VisionError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded {:?} ({}x{})",
        path,
        image.width(),
        image.height()
    );
    Ok(image.to_rgb8())
}
