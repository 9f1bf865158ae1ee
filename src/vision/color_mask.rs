//! Color segmentation: splits a chart screenshot into bullish and bearish masks.
//!
//! Pixels are converted to HSV and tested against the configured bands. Each
//! mask is a `GrayImage` the size of the input, 255 where the pixel belongs to
//! the color family and 0 elsewhere.

use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{FromColor, Hsv, Srgb};

use crate::config::{ColorBands, HsvRange};
use crate::domain::CandleType;

const FOREGROUND: Luma<u8> = Luma([255]);

/// Binary masks for both color families, same dimensions as the source image.
pub struct ColorMasks {
    pub bullish: GrayImage,
    pub bearish: GrayImage,
}

impl ColorMasks {
    pub fn for_type(&self, candle_type: CandleType) -> &GrayImage {
        match candle_type {
            CandleType::Bullish => &self.bullish,
            CandleType::Bearish => &self.bearish,
        }
    }
}

/// Converts an RGB pixel to 8-bit HSV: hue 0..180, saturation and value 0..=255.
pub fn rgb_to_hsv8(pixel: &Rgb<u8>) -> (u8, u8, u8) {
    let [r, g, b] = pixel.0;
    let hsv: Hsv = Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>());

    let hue = (hsv.hue.into_positive_degrees() / 2.0).round();
    // 359.x degrees rounds up to 180, which the high red band still covers
    let hue = hue.clamp(0.0, 180.0) as u8;
    let saturation = (hsv.saturation * 255.0).round().clamp(0.0, 255.0) as u8;
    let value = (hsv.value * 255.0).round().clamp(0.0, 255.0) as u8;
    (hue, saturation, value)
}

fn matches_any(ranges: &[HsvRange], hsv: (u8, u8, u8)) -> bool {
    let (h, s, v) = hsv;
    ranges.iter().any(|range| range.contains(h, s, v))
}

/// Produces the bullish mask from a single band and the bearish mask from the
/// union of both bearish bands.
pub fn segment(image: &RgbImage, bands: &ColorBands) -> ColorMasks {
    let (width, height) = image.dimensions();
    let mut bullish = GrayImage::new(width, height);
    let mut bearish = GrayImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels() {
        let hsv = rgb_to_hsv8(pixel);
        if matches_any(std::slice::from_ref(&bands.bullish), hsv) {
            bullish.put_pixel(x, y, FOREGROUND);
        }
        if matches_any(&bands.bearish, hsv) {
            bearish.put_pixel(x, y, FOREGROUND);
        }
    }

    ColorMasks { bullish, bearish }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VISION;

    fn one_pixel(rgb: [u8; 3]) -> ColorMasks {
        let image = RgbImage::from_pixel(1, 1, Rgb(rgb));
        segment(&image, &VISION.colors)
    }

    fn lit(mask: &GrayImage) -> bool {
        mask.get_pixel(0, 0).0[0] == 255
    }

    #[test]
    fn test_hsv_conversion_matches_8bit_convention() {
        assert_eq!(rgb_to_hsv8(&Rgb([0, 255, 0])), (60, 255, 255));
        assert_eq!(rgb_to_hsv8(&Rgb([255, 0, 0])), (0, 255, 255));
        assert_eq!(rgb_to_hsv8(&Rgb([0, 0, 255])), (120, 255, 255));
        assert_eq!(rgb_to_hsv8(&Rgb([0, 0, 0])).2, 0);
    }

    #[test]
    fn test_pure_colors_land_in_their_family() {
        let green = one_pixel([0, 255, 0]);
        assert!(lit(&green.bullish));
        assert!(!lit(&green.bearish));

        let red = one_pixel([255, 0, 0]);
        assert!(lit(&red.bearish));
        assert!(!lit(&red.bullish));
    }

    #[test]
    fn test_red_wraps_around_hue_zero() {
        // Magenta-leaning red: hue ~351 degrees, i.e. ~175 in 8-bit units
        let (hue, _, _) = rgb_to_hsv8(&Rgb([255, 0, 40]));
        assert!(hue >= 170, "expected high hue band, got {}", hue);
        assert!(lit(&one_pixel([255, 0, 40]).bearish));
    }

    #[test]
    fn test_background_pixels_are_excluded() {
        for rgb in [[0, 0, 0], [128, 128, 128], [255, 255, 255], [0, 0, 255], [20, 40, 20]] {
            let masks = one_pixel(rgb);
            assert!(!lit(&masks.bullish), "{:?} should not be bullish", rgb);
            assert!(!lit(&masks.bearish), "{:?} should not be bearish", rgb);
        }
    }

    #[test]
    fn test_masks_keep_image_dimensions() {
        let image = RgbImage::new(7, 3);
        let masks = segment(&image, &VISION.colors);
        assert_eq!(masks.bullish.dimensions(), (7, 3));
        assert_eq!(masks.for_type(CandleType::Bearish).dimensions(), (7, 3));
    }
}
