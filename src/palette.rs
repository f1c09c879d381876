//! Hit palette configuration
//!
//! The game renders hitboxes in two near-identical greens, so matching is
//! done against a small target list with a generous per-channel tolerance.
//! The palette is a plain value passed into every extraction call; nothing
//! in this crate reads matching configuration from global state.

use image::Rgb;

use crate::color;

/// Darker of the two greens used by the in-game hitbox rendering.
pub const HIT_GREEN_DARK: u32 = 0x52DB22;
/// Lighter of the two greens used by the in-game hitbox rendering.
pub const HIT_GREEN_LIGHT: u32 = 0x52E23F;
/// Default inclusive per-channel tolerance for hit color matching.
pub const DEFAULT_TOLERANCE: u8 = 50;

/// Colors to match plus the shared per-channel tolerance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitPalette {
    /// Target colors; a pixel matching any of them is a hit pixel.
    pub targets: Vec<Rgb<u8>>,
    /// Inclusive per-channel tolerance applied to every target.
    pub tolerance: u8,
}

impl HitPalette {
    pub fn new(targets: Vec<Rgb<u8>>, tolerance: u8) -> Self {
        Self { targets, tolerance }
    }

    /// True when `pixel` is within tolerance of any target color.
    pub fn matches(&self, pixel: Rgb<u8>) -> bool {
        self.targets.iter().any(|&target| color::within_tolerance(pixel, target, self.tolerance))
    }
}

impl Default for HitPalette {
    fn default() -> Self {
        Self {
            targets: vec![color::from_hex(HIT_GREEN_DARK), color::from_hex(HIT_GREEN_LIGHT)],
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
