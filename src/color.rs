//! Hit color construction and tolerance matching
//!
//! Hit colors are plain opaque RGB values. Matching is per-channel: a pixel
//! matches a target when every channel differs by at most the tolerance,
//! so the acceptance region around each target is a cube, not a sphere.

use image::Rgb;

/// Build an opaque RGB color from a packed `0xRRGGBB` value.
///
/// # Examples
///
/// ```
/// use dustbox::color::from_hex;
///
/// let green = from_hex(0x52DB22);
/// assert_eq!(green, image::Rgb([0x52, 0xDB, 0x22]));
/// ```
pub const fn from_hex(hex: u32) -> Rgb<u8> {
    Rgb([((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8])
}

/// Check whether `pixel` is within `tolerance` of `target` on every channel.
///
/// The bound is inclusive: a channel difference of exactly `tolerance`
/// still matches, `tolerance + 1` does not.
pub fn within_tolerance(pixel: Rgb<u8>, target: Rgb<u8>, tolerance: u8) -> bool {
    pixel.0[0].abs_diff(target.0[0]) <= tolerance
        && pixel.0[1].abs_diff(target.0[1]) <= tolerance
        && pixel.0[2].abs_diff(target.0[2]) <= tolerance
}
