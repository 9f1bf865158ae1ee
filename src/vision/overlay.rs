//! Diagnostic overlay: draws reconstructed candles back over the screenshot.

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::domain::{CandleType, RawCandle};
use crate::vision::VisionError;

const BULLISH_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const BEARISH_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

fn color_for(candle_type: CandleType) -> Rgb<u8> {
    match candle_type {
        CandleType::Bullish => BULLISH_COLOR,
        CandleType::Bearish => BEARISH_COLOR,
    }
}

/// Annotated copy of `image`: one wick line and one hollow body box per candle.
pub fn draw_overlay(image: &RgbImage, candles: &[RawCandle]) -> RgbImage {
    let mut canvas = image.clone();

    for candle in candles {
        let color = color_for(candle.candle_type());
        let x = candle.x_center as f32;
        draw_line_segment_mut(
            &mut canvas,
            (x, candle.y_high as f32),
            (x, candle.y_low as f32),
            color,
        );

        let (body_top, body_bottom) = candle.body_range();
        let left = (candle.x_center - candle.width / 2.0).round() as i32;
        let right = (candle.x_center + candle.width / 2.0).round() as i32;
        let top = body_top.round() as i32;
        let bottom = body_bottom.round() as i32;
        // Both corners are drawn, so the size counts them inclusively
        let body = Rect::at(left, top).of_size(
            (right - left + 1).max(1) as u32,
            (bottom - top + 1).max(1) as u32,
        );
        draw_hollow_rect_mut(&mut canvas, body, color);
    }

    canvas
}

/// Draws the overlay and writes it; the format follows the path's extension.
pub fn render_overlay(image: &RgbImage, candles: &[RawCandle], path: &Path) -> Result<(), VisionError> {
    let canvas = draw_overlay(image, candles);
    canvas.save(path).map_err(|source| VisionError::OverlayWrite {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Debug overlay with {} candles written to {:?}", candles.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullish() -> RawCandle {
        RawCandle {
            x_center: 20.0,
            y_open: 30.0,
            y_close: 20.0,
            y_high: 10.0,
            y_low: 40.0,
            is_bullish: true,
            width: 8.0,
        }
    }

    #[test]
    fn test_overlay_draws_wick_and_body() {
        let image = RgbImage::new(50, 50);
        let canvas = draw_overlay(&image, &[bullish()]);

        assert_eq!(*canvas.get_pixel(20, 12), BULLISH_COLOR, "wick above body");
        assert_eq!(*canvas.get_pixel(20, 38), BULLISH_COLOR, "wick below body");
        assert_eq!(*canvas.get_pixel(16, 25), BULLISH_COLOR, "left body edge");
        assert_eq!(*canvas.get_pixel(24, 25), BULLISH_COLOR, "right body edge");
        assert_eq!(*canvas.get_pixel(25, 25), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(18, 20), BULLISH_COLOR, "top body edge");
        assert_eq!(*canvas.get_pixel(18, 30), BULLISH_COLOR, "bottom body edge");
        assert_eq!(*canvas.get_pixel(18, 31), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(18, 25), Rgb([0, 0, 0]), "body is hollow");
        assert_eq!(*canvas.get_pixel(5, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_bearish_candles_are_red() {
        let mut candle = bullish();
        candle.is_bullish = false;
        candle.y_open = 20.0;
        candle.y_close = 30.0;
        let canvas = draw_overlay(&RgbImage::new(50, 50), &[candle]);
        assert_eq!(*canvas.get_pixel(20, 12), BEARISH_COLOR);
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.png");
        render_overlay(&RgbImage::new(50, 50), &[bullish()], &path).unwrap();
        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(*written.get_pixel(20, 12), BULLISH_COLOR);
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("overlay.png");
        let err = render_overlay(&RgbImage::new(10, 10), &[], &path).unwrap_err();
        assert!(matches!(err, VisionError::OverlayWrite { .. }));
    }
}
