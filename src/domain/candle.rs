use std::fmt;

use serde::{Deserialize, Serialize};

// Direction of a candle, as told by its color family
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum CandleType {
    Bullish,
    Bearish,
}

impl CandleType {
    pub fn is_bullish(self) -> bool {
        self == CandleType::Bullish
    }
}

impl fmt::Display for CandleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CandleType::Bullish => write!(f, "bullish"),
            CandleType::Bearish => write!(f, "bearish"),
        }
    }
}

/// A candle measured in image pixels. Y grows downward, so the high price sits
/// at the smallest Y.
///
/// Bullish candles have `y_close <= y_open`; bearish ones `y_open <= y_close`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCandle {
    pub x_center: f64,
    pub y_open: f64,
    pub y_close: f64,
    pub y_high: f64,
    pub y_low: f64,
    pub is_bullish: bool,
    pub width: f64,
}

impl RawCandle {
    pub fn candle_type(&self) -> CandleType {
        if self.is_bullish {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the top and bottom pixel rows of the body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        (
            self.y_open.min(self.y_close),
            self.y_open.max(self.y_close),
        )
    }

    /// All four price rows, in open/close/high/low order.
    pub fn price_rows(&self) -> [f64; 4] {
        [self.y_open, self.y_close, self.y_high, self.y_low]
    }

    /// `y_high <= body top <= body bottom <= y_low` and a positive width.
    pub fn is_well_formed(&self) -> bool {
        let (body_top, body_bottom) = self.body_range();
        let oriented = match self.candle_type() {
            CandleType::Bullish => self.y_close <= self.y_open,
            CandleType::Bearish => self.y_open <= self.y_close,
        };
        self.y_high <= body_top
            && body_top <= body_bottom
            && body_bottom <= self.y_low
            && oriented
            && self.width > 0.0
    }
}

/// Output record: prices where larger means higher on the chart.
/// `time` is the zero-based chronological rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayCandle {
    pub time: usize,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl DisplayCandle {
    pub fn candle_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(y_open: f64, y_close: f64, is_bullish: bool) -> RawCandle {
        RawCandle {
            x_center: 10.0,
            y_open,
            y_close,
            y_high: 0.0,
            y_low: 100.0,
            is_bullish,
            width: 4.0,
        }
    }

    #[test]
    fn test_body_range_orders_rows() {
        assert_eq!(raw(75.0, 25.0, true).body_range(), (25.0, 75.0));
        assert_eq!(raw(25.0, 75.0, false).body_range(), (25.0, 75.0));
    }

    #[test]
    fn test_well_formed_checks_orientation() {
        assert!(raw(75.0, 25.0, true).is_well_formed());
        assert!(!raw(25.0, 75.0, true).is_well_formed(), "bullish must close above open");
        assert!(raw(25.0, 75.0, false).is_well_formed());

        let mut wick_inside_body = raw(75.0, 25.0, true);
        wick_inside_body.y_high = 30.0;
        assert!(!wick_inside_body.is_well_formed());
    }

    #[test]
    fn test_display_type() {
        let up = DisplayCandle {
            time: 0,
            open: 1.0,
            close: 2.0,
            high: 3.0,
            low: 0.5,
        };
        assert_eq!(up.candle_type(), CandleType::Bullish);
        assert_eq!(CandleType::Bearish.to_string(), "bearish");
    }
}
