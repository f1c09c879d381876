//! CLI dispatch for the `dbx overlay` command.
//!
//! Loads the given sprites in order, composes the outline overlay, and
//! saves it as a PNG.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::output;
use crate::overlay::{self, OverlayStyle};
use crate::palette::HitPalette;
use crate::sprite::SpriteName;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the overlay command.
pub fn run_overlay(sprites: &[PathBuf], output_path: &Path) -> ExitCode {
    let palette = HitPalette::default();
    let style = OverlayStyle::default();

    let image = match overlay::compose_overlay(sprites, &palette, &style) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for path in sprites {
        println!("{}: {}", path.display(), describe(path));
    }

    if let Err(e) = output::save_png(&image, output_path) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    let (width, height) = image.dimensions();
    println!("Saved {}x{} overlay to {}", width, height, output_path.display());

    ExitCode::from(EXIT_SUCCESS)
}

/// Human-readable description of a sprite from its filename codes.
fn describe(path: &Path) -> String {
    match SpriteName::from_path(path) {
        Some(name) => {
            let character = name.character.map_or("unknown character", |c| c.label());
            let attack = name.attack.map_or("unknown attack", |a| a.label());
            format!("{}, {}", character, attack)
        }
        None => "unrecognized sprite name".to_string(),
    }
}
