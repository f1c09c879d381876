//! Batch hitbox extraction over a sprite directory
//!
//! Scans the direct children of a directory for `.png` files (any case),
//! extracts each file's region boxes, and collects them into a report
//! keyed by filename. Files that fail to load are reported on stderr and
//! skipped; only a directory-level failure aborts the batch.

use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;

use crate::geometry::BoundingBox;
use crate::mask::HitMask;
use crate::palette::HitPalette;
use crate::regions;
use crate::report::HitboxReport;
use crate::sprite::{self, SpriteError};

/// Error type for batch extraction setup failures.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The sprite directory could not be listed
    #[error("cannot read sprite directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Extract hitbox rectangles for every `.png` file directly inside `dir`.
///
/// Every decodable file gets an entry, including files with no hit pixels
/// (their value is an empty list). Files that fail to load or decode are
/// logged to stderr and left out. Extraction runs per file in parallel;
/// files are taken in sorted name order so the report and the skip lines
/// are deterministic.
///
/// # Errors
///
/// Returns [`BatchError::ReadDir`] when the directory itself cannot be
/// listed. Per-file failures never abort the batch.
pub fn extract_all(dir: &Path, palette: &HitPalette) -> Result<HitboxReport, BatchError> {
    let names = png_names(dir)?;

    let results: Vec<(String, Result<Vec<BoundingBox>, SpriteError>)> = names
        .into_par_iter()
        .map(|name| {
            let boxes = sprite::load_rgb(&dir.join(&name))
                .map(|image| regions::component_boxes(&HitMask::extract(&image, palette)));
            (name, boxes)
        })
        .collect();

    let mut report = HitboxReport::new();
    for (name, result) in results {
        match result {
            Ok(boxes) => report.insert(name, boxes),
            Err(e) => eprintln!("Skipping {}: {}", name, e),
        }
    }
    Ok(report)
}

/// Names of `.png` entries (case-insensitive) directly inside `dir`, sorted.
fn png_names(dir: &Path) -> Result<Vec<String>, BatchError> {
    let read_dir = std::fs::read_dir(dir)
        .map_err(|source| BatchError::ReadDir { path: dir.to_path_buf(), source })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry =
            entry.map_err(|source| BatchError::ReadDir { path: dir.to_path_buf(), source })?;
        if let Some(name) = entry.file_name().to_str() {
            let is_png = Path::new(name)
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
            if is_png {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
