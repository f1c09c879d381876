//! Connected-region bounding boxes
//!
//! Reduces a hit mask to one tight box per connected region of set pixels.
//! Regions use 4-connectivity: pixels touching only at a corner belong to
//! separate regions and produce separate boxes.

use std::collections::HashMap;

use image::Luma;
use imageproc::region_labelling::{connected_components, Connectivity};

use crate::geometry::BoundingBox;
use crate::mask::HitMask;

/// Compute a tight bounding box for every connected region in `mask`.
///
/// Boxes are sorted by `(y0, x0)` so the same mask always yields the same
/// list. An empty mask yields an empty list; every returned box covers at
/// least one pixel.
pub fn component_boxes(mask: &HitMask) -> Vec<BoundingBox> {
    let binary = mask.to_binary_image();
    let labelled = connected_components(&binary, Connectivity::Four, Luma([0u8]));

    // Fold each labelled pixel into its region's box. Label 0 is background.
    let mut regions: HashMap<u32, BoundingBox> = HashMap::new();
    for (x, y, pixel) in labelled.enumerate_pixels() {
        let label = pixel.0[0];
        if label == 0 {
            continue;
        }
        regions
            .entry(label)
            .and_modify(|bbox| bbox.include(x, y))
            .or_insert_with(|| BoundingBox::pixel(x, y));
    }

    let mut boxes: Vec<BoundingBox> = regions.into_values().collect();
    boxes.sort_by_key(|b| (b.y0, b.x0, b.x1, b.y1));
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::HitPalette;
    use image::{Rgb, RgbImage};

    fn mask_from_hits(width: u32, height: u32, hits: &[(u32, u32)]) -> HitMask {
        let mut image = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
        for &(x, y) in hits {
            image.put_pixel(x, y, Rgb([0x52, 0xDB, 0x22]));
        }
        HitMask::extract(&image, &HitPalette::default())
    }

    #[test]
    fn test_empty_mask_no_boxes() {
        let mask = mask_from_hits(10, 10, &[]);
        assert!(component_boxes(&mask).is_empty());
    }

    #[test]
    fn test_single_pixel_region() {
        let mask = mask_from_hits(10, 10, &[(4, 5)]);
        assert_eq!(component_boxes(&mask), vec![BoundingBox { x0: 4, y0: 5, x1: 5, y1: 6 }]);
    }

    #[test]
    fn test_two_disjoint_blobs_two_boxes() {
        let mut hits = Vec::new();
        for y in 1..3 {
            for x in 1..4 {
                hits.push((x, y));
            }
        }
        for y in 6..9 {
            for x in 7..9 {
                hits.push((x, y));
            }
        }
        let mask = mask_from_hits(12, 12, &hits);
        assert_eq!(
            component_boxes(&mask),
            vec![
                BoundingBox { x0: 1, y0: 1, x1: 4, y1: 3 },
                BoundingBox { x0: 7, y0: 6, x1: 9, y1: 9 },
            ]
        );
    }

    #[test]
    fn test_diagonal_touch_is_two_regions() {
        // (2,2) and (3,3) share only a corner.
        let mask = mask_from_hits(6, 6, &[(2, 2), (3, 3)]);
        assert_eq!(
            component_boxes(&mask),
            vec![
                BoundingBox { x0: 2, y0: 2, x1: 3, y1: 3 },
                BoundingBox { x0: 3, y0: 3, x1: 4, y1: 4 },
            ]
        );
    }

    #[test]
    fn test_side_touch_is_one_region() {
        let mask = mask_from_hits(6, 6, &[(2, 2), (3, 2)]);
        assert_eq!(component_boxes(&mask), vec![BoundingBox { x0: 2, y0: 2, x1: 4, y1: 3 }]);
    }

    #[test]
    fn test_l_shaped_region_box_is_tight() {
        // Vertical bar plus a foot: the box covers the whole L.
        let mask = mask_from_hits(8, 8, &[(1, 1), (1, 2), (1, 3), (2, 3), (3, 3)]);
        assert_eq!(component_boxes(&mask), vec![BoundingBox { x0: 1, y0: 1, x1: 4, y1: 4 }]);
    }
}
