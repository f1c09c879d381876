//! Bounding box geometry
//!
//! Boxes are half-open on the high edge: a box covers columns `x0..x1` and
//! rows `y0..y1`, so `x1` and `y1` sit one past the last covered pixel.
//! That matches both array-slice conventions and the `[x0, y0, x1, y1]`
//! tuples in the JSON artifact consumed by the viewer front-end.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle over pixel coordinates.
///
/// Serializes as the 4-tuple `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    /// Box covering exactly the pixel at `(x, y)`.
    pub fn pixel(x: u32, y: u32) -> Self {
        Self { x0: x, y0: y, x1: x + 1, y1: y + 1 }
    }

    /// Grow the box as needed to cover the pixel at `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x + 1);
        self.y1 = self.y1.max(y + 1);
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

impl From<[u32; 4]> for BoundingBox {
    fn from([x0, y0, x1, y1]: [u32; 4]) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

impl From<BoundingBox> for [u32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}
