//! Binary hit mask extraction
//!
//! A mask records, for every pixel of a sprite, whether that pixel sits
//! within tolerance of one of the palette's hit colors. Masks always have
//! the same dimensions as the image they were extracted from.

use image::{GrayImage, Luma, RgbImage};

use crate::geometry::BoundingBox;
use crate::palette::HitPalette;

/// Row-major boolean mask over a sprite's pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl HitMask {
    /// Extract the hit mask of `image` under `palette`.
    ///
    /// A pixel is set when it matches any palette target on every channel
    /// (inclusive tolerance). The input is already alpha-free; callers load
    /// sprites through [`crate::sprite::load_rgb`], which discards alpha.
    pub fn extract(image: &RgbImage, palette: &HitPalette) -> Self {
        let (width, height) = image.dimensions();
        let bits = image.pixels().map(|&pixel| palette.matches(pixel)).collect();
        Self { width, height, bits }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the pixel at `(x, y)` matched a hit color.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the mask.
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "({}, {}) outside mask", x, y);
        self.bits[(y * self.width + x) as usize]
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Tight box around all set pixels, or `None` for an empty mask.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y) {
                    match bbox.as_mut() {
                        Some(b) => b.include(x, y),
                        None => bbox = Some(BoundingBox::pixel(x, y)),
                    }
                }
            }
        }
        bbox
    }

    /// Render the mask as an 8-bit image (255 = set, 0 = clear) so it can
    /// feed imageproc's region labelling.
    pub fn to_binary_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([if self.get(x, y) { 255 } else { 0 }])
        })
    }
}
