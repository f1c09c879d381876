//! CLI dispatch for the `dbx extract` command.
//!
//! Scans a sprite directory, prints each file's rectangles, and writes
//! the JSON artifact.

use std::path::Path;
use std::process::ExitCode;

use crate::batch;
use crate::palette::HitPalette;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the extract command.
pub fn run_extract(images: &Path, output: &Path, compact: bool) -> ExitCode {
    if !images.is_dir() {
        eprintln!("Error: '{}' is not a directory", images.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let palette = HitPalette::default();
    let report = match batch::extract_all(images, &palette) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for (name, boxes) in &report.entries {
        println!("{}: {}", name, serde_json::to_string(boxes).unwrap());
    }

    if let Err(e) = report.write_json(output, !compact) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved hitbox rectangles to {}", output.display());

    ExitCode::from(EXIT_SUCCESS)
}
