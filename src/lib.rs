//! Dustbox - Library for extracting and visualizing Dustforce hitboxes
//!
//! This library provides functionality to:
//! - Extract binary hit masks from sprite dumps by palette color matching
//! - Reduce masks to connected-region bounding rectangles
//! - Batch-scan a sprite directory into a JSON hitbox artifact
//! - Compose transparent overlay images with per-character outlines

pub mod batch;
pub mod cli;
pub mod color;
pub mod geometry;
pub mod mask;
pub mod output;
pub mod overlay;
pub mod palette;
pub mod regions;
pub mod report;
pub mod sprite;
