//! Vision pipeline configuration

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::vision::VisionError;

/// One inclusive HSV bound in 8-bit units.
/// Hue runs 0..=180 (degrees halved), saturation and value 0..=255.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvBound {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl HsvBound {
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Inclusive HSV box: a pixel matches when every channel lies within `lower..=upper`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: HsvBound,
    pub upper: HsvBound,
}

impl HsvRange {
    pub fn contains(&self, hue: u8, saturation: u8, value: u8) -> bool {
        (self.lower.hue..=self.upper.hue).contains(&hue)
            && (self.lower.saturation..=self.upper.saturation).contains(&saturation)
            && (self.lower.value..=self.upper.value).contains(&value)
    }
}

/// Color families for the two candle directions
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBands {
    pub bullish: HsvRange,
    // Red straddles hue 0, so bearish needs a low band and a high band
    pub bearish: [HsvRange; 2],
}

/// Structuring element used for the vertical closing pass
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelShape {
    // Stays at 1px so neighbouring candles are never bridged sideways
    pub width: u32,
    pub height: u32,
}

/// Bounding-box rejection thresholds
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NoiseFilter {
    /// Boxes shorter than this (in pixels) are dropped
    pub min_height: u32,
    /// Boxes wider than `ratio * height` are dropped (grid lines, labels)
    pub max_width_to_height_ratio: f64,
}

/// Settings for the default body estimator
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BodyHeuristic {
    /// Fraction of the box height trimmed from top and bottom to get the body
    pub inset_fraction: f64,
}

/// Settings for the pixel-to-price inversion
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisSettings {
    /// Added to the lowest pixel row so the lowest price is never zero
    pub reference_padding: f64,
}

/// The Master Vision Configuration
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct VisionConfig {
    pub colors: ColorBands,
    pub kernel: KernelShape,
    pub noise: NoiseFilter,
    pub body: BodyHeuristic,
    pub axis: AxisSettings,
}

pub const VISION: VisionConfig = VisionConfig {
    // Tuned against TradingView's default greens and reds
    colors: ColorBands {
        bullish: HsvRange {
            lower: HsvBound::new(35, 50, 50),
            upper: HsvBound::new(85, 255, 255),
        },
        bearish: [
            HsvRange {
                lower: HsvBound::new(0, 50, 50),
                upper: HsvBound::new(10, 255, 255),
            },
            HsvRange {
                lower: HsvBound::new(170, 50, 50),
                upper: HsvBound::new(180, 255, 255),
            },
        ],
    },

    kernel: KernelShape {
        width: 1,
        height: 5,
    },

    noise: NoiseFilter {
        min_height: 2,
        max_width_to_height_ratio: 2.0,
    },

    body: BodyHeuristic {
        inset_fraction: 0.25,
    },

    axis: AxisSettings {
        reference_padding: 50.0,
    },
};

impl Default for VisionConfig {
    fn default() -> Self {
        VISION
    }
}

impl VisionConfig {
    /// Reads a JSON override file. Fields left out keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: VisionConfig = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VisionError> {
        let ranges = std::iter::once(("bullish", &self.colors.bullish))
            .chain(self.colors.bearish.iter().map(|r| ("bearish", r)));
        for (family, range) in ranges {
            let (lo, hi) = (range.lower, range.upper);
            if lo.hue > hi.hue || lo.saturation > hi.saturation || lo.value > hi.value {
                return Err(VisionError::InvalidConfig(format!(
                    "{} color band has a lower bound above its upper bound: {:?}",
                    family, range
                )));
            }
        }

        let kernel = self.kernel;
        if kernel.width == 0 || kernel.height == 0 {
            return Err(VisionError::InvalidConfig(format!(
                "kernel dimensions must be non-zero, got {}x{}",
                kernel.width, kernel.height
            )));
        }
        if kernel.width > 255 || kernel.height > 255 {
            return Err(VisionError::InvalidConfig(format!(
                "kernel dimensions must not exceed 255, got {}x{}",
                kernel.width, kernel.height
            )));
        }

        if self.noise.min_height == 0 {
            return Err(VisionError::InvalidConfig(
                "noise.min_height must be at least 1".to_string(),
            ));
        }
        let ratio = self.noise.max_width_to_height_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(VisionError::InvalidConfig(format!(
                "noise.max_width_to_height_ratio must be positive, got {}",
                ratio
            )));
        }

        let inset = self.body.inset_fraction;
        if !(0.0..0.5).contains(&inset) {
            return Err(VisionError::InvalidConfig(format!(
                "body.inset_fraction must lie in [0, 0.5), got {}",
                inset
            )));
        }

        if !self.axis.reference_padding.is_finite() {
            return Err(VisionError::InvalidConfig(format!(
                "axis.reference_padding must be finite, got {}",
                self.axis.reference_padding
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(VisionConfig::default().validate().is_ok());
        assert_eq!(VisionConfig::default(), VISION);
    }

    #[test]
    fn test_hsv_range_is_inclusive() {
        let range = VISION.colors.bullish;
        assert!(range.contains(35, 50, 50));
        assert!(range.contains(85, 255, 255));
        assert!(!range.contains(34, 255, 255));
        assert!(!range.contains(60, 49, 255));
        assert!(!range.contains(60, 255, 49));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = VISION;
        config.kernel.height = 0;
        assert!(matches!(
            config.validate(),
            Err(VisionError::InvalidConfig(_))
        ));

        let mut config = VISION;
        config.body.inset_fraction = 0.5;
        assert!(config.validate().is_err(), "inset of 0.5 leaves no body");

        let mut config = VISION;
        config.noise.max_width_to_height_ratio = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = VISION;
        config.colors.bearish[1].lower.hue = 181;
        assert!(config.validate().is_err(), "inverted hue band");
    }

    #[test]
    fn test_partial_json_override_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vision.json");
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "noise": {{ "min_height": 4, "max_width_to_height_ratio": 1.5 }},
                 "axis": {{ "reference_padding": 10.0 }} }}"#
        )
        .unwrap();

        let config = VisionConfig::load_from_path(&path).unwrap();
        assert_eq!(config.noise.min_height, 4);
        assert_eq!(config.noise.max_width_to_height_ratio, 1.5);
        assert_eq!(config.axis.reference_padding, 10.0);
        assert_eq!(config.colors, VISION.colors);
        assert_eq!(config.kernel, VISION.kernel);
        assert_eq!(config.body, VISION.body);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(VisionConfig::load_from_path(&dir.path().join("nope.json")).is_err());
    }
}
