//! Synthetic chart screenshots for smoke tests and the `make_demo_chart` binary.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::domain::{BoundingBox, CandleType};

const BULLISH_RGB: Rgb<u8> = Rgb([0, 255, 0]);
const BEARISH_RGB: Rgb<u8> = Rgb([255, 0, 0]);

/// A candle glyph as filled body plus a 2px wick, both in pixel boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoCandle {
    pub candle_type: CandleType,
    pub body: BoundingBox,
    pub wick: BoundingBox,
}

impl DemoCandle {
    const fn new(candle_type: CandleType, body: BoundingBox, wick: BoundingBox) -> Self {
        Self {
            candle_type,
            body,
            wick,
        }
    }

    /// One rising candle followed by two falling ones on a 400x400 canvas
    pub const DEFAULT_SET: [DemoCandle; 3] = [
        DemoCandle::new(
            CandleType::Bullish,
            BoundingBox { x: 100, y: 100, width: 21, height: 101 },
            BoundingBox { x: 109, y: 50, width: 2, height: 201 },
        ),
        DemoCandle::new(
            CandleType::Bearish,
            BoundingBox { x: 200, y: 100, width: 21, height: 151 },
            BoundingBox { x: 209, y: 80, width: 2, height: 221 },
        ),
        DemoCandle::new(
            CandleType::Bearish,
            BoundingBox { x: 250, y: 200, width: 21, height: 121 },
            BoundingBox { x: 259, y: 180, width: 2, height: 171 },
        ),
    ];
}

fn fill(canvas: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    let rect = Rect::at(bbox.x as i32, bbox.y as i32).of_size(bbox.width, bbox.height);
    draw_filled_rect_mut(canvas, rect, color);
}

/// Black canvas with each candle's wick and body painted in its family color.
pub fn draw_demo_chart(candles: &[DemoCandle], width: u32, height: u32) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);
    for candle in candles {
        let color = match candle.candle_type {
            CandleType::Bullish => BULLISH_RGB,
            CandleType::Bearish => BEARISH_RGB,
        };
        fill(&mut canvas, &candle.wick, color);
        fill(&mut canvas, &candle.body, color);
    }
    canvas
}
