//! Overlay composition
//!
//! Builds a transparent canvas from an ordered list of sprite paths and
//! draws one unfilled rectangle per sprite around its overall hit extent,
//! colored by the character code in the sprite's filename. Later sprites
//! draw over earlier ones.

use std::path::PathBuf;

use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::geometry::BoundingBox;
use crate::mask::HitMask;
use crate::palette::HitPalette;
use crate::sprite::{self, CharacterCode, SpriteError, SpriteName};

/// Canvas size when composing from an empty sprite list.
pub const FALLBACK_SIZE: (u32, u32) = (95, 96);
/// Outline thickness in pixels.
pub const LINE_WIDTH: u32 = 3;
/// Alpha stored in outline pixels.
pub const OUTLINE_ALPHA: u8 = 200;

/// Outline styling for composed overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Outline thickness; rings grow inward from the box edge.
    pub line_width: u32,
    /// Alpha written into outline pixels.
    pub outline_alpha: u8,
    /// Canvas size used when there are no input sprites.
    pub fallback_size: (u32, u32),
    /// Outline color per character, indexed by `CharacterCode as usize`.
    pub character_colors: [Rgb<u8>; 4],
    /// Outline color when the filename has no recognizable character.
    pub fallback_color: Rgb<u8>,
}

impl OverlayStyle {
    /// Outline color, with alpha applied, for an optional character code.
    pub fn outline_color(&self, character: Option<CharacterCode>) -> Rgba<u8> {
        let Rgb([r, g, b]) = match character {
            Some(code) => self.character_colors[code as usize],
            None => self.fallback_color,
        };
        Rgba([r, g, b, self.outline_alpha])
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_width: LINE_WIDTH,
            outline_alpha: OUTLINE_ALPHA,
            fallback_size: FALLBACK_SIZE,
            character_colors: [
                Rgb([0x3F, 0xA7, 0xE0]), // Dustman
                Rgb([0xE0, 0x4F, 0x4F]), // Dustgirl
                Rgb([0xB4, 0x5F, 0xD6]), // Dustkid
                Rgb([0xE0, 0xA3, 0x3F]), // Dustworth
            ],
            fallback_color: Rgb([0, 0, 0]),
        }
    }
}

/// Compose an overlay from an ordered list of sprite paths.
///
/// The canvas takes the first sprite's dimensions and starts fully
/// transparent; later sprites are assumed, not verified, to match. Each
/// sprite with at least one hit pixel contributes one unfilled rectangle
/// around its overall hit extent. Outline pixels are written rather than
/// blended, so overlapping outlines keep the last writer's color.
///
/// An empty `paths` yields a fully transparent canvas of the style's
/// fallback size.
///
/// # Errors
///
/// Fails on the first sprite that cannot be loaded; no partial overlay
/// is returned.
pub fn compose_overlay(
    paths: &[PathBuf],
    palette: &HitPalette,
    style: &OverlayStyle,
) -> Result<RgbaImage, SpriteError> {
    let mut canvas: Option<RgbaImage> = None;

    for path in paths {
        let sprite = sprite::load_rgb(path)?;
        let canvas = canvas.get_or_insert_with(|| {
            let (width, height) = sprite.dimensions();
            RgbaImage::new(width, height)
        });

        let mask = HitMask::extract(&sprite, palette);
        if let Some(bbox) = mask.bounding_box() {
            let character = SpriteName::from_path(path).and_then(|name| name.character);
            draw_outline(canvas, bbox, style.line_width, style.outline_color(character));
        }
    }

    Ok(canvas.unwrap_or_else(|| {
        let (width, height) = style.fallback_size;
        RgbaImage::new(width, height)
    }))
}

/// Draw an unfilled rectangle over `bbox`, `width` pixels thick, growing
/// inward from the edge. Rings that no longer fit are skipped.
fn draw_outline(canvas: &mut RgbaImage, bbox: BoundingBox, width: u32, color: Rgba<u8>) {
    for inset in 0..width {
        let w = bbox.width().saturating_sub(inset * 2);
        let h = bbox.height().saturating_sub(inset * 2);
        if w == 0 || h == 0 {
            break;
        }
        let rect = Rect::at((bbox.x0 + inset) as i32, (bbox.y0 + inset) as i32).of_size(w, h);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}
