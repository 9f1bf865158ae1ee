use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

/// Axis-aligned box in pixel units, `(x, y)` being the top-left corner.
/// Width and height count pixels inclusively, so a single pixel is 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box covering every point, or `None` for an empty set.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (u32, u32)> + Clone,
    {
        let (min_x, max_x) = match points.clone().into_iter().map(|(x, _)| x).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(x) => (x, x),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        let (min_y, max_y) = match points.into_iter().map(|(_, y)| y).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(y) => (y, y),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        Some(Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    pub fn x_center(&self) -> f64 {
        self.x as f64 + self.width as f64 / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y as f64
    }

    pub fn bottom(&self) -> f64 {
        self.y as f64 + self.height as f64
    }
}
