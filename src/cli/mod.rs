//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod extract;
mod overlay;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Dustbox - extract hitbox rectangles from sprite dumps
#[derive(Parser)]
#[command(name = "dbx")]
#[command(about = "Dustbox - extract hitbox rectangles from sprite dumps and compose overlays")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a sprite directory and write the hitbox JSON artifact
    Extract {
        /// Directory containing hitbox sprite dumps (.png)
        images: PathBuf,

        /// Output path for the JSON artifact
        #[arg(short, long, default_value = "static/hitboxes.json")]
        output: PathBuf,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Compose a transparent overlay PNG from sprite files
    Overlay {
        /// Sprite files (attack_character.png) in draw order; later
        /// sprites draw over earlier ones. With no sprites, writes the
        /// fallback transparent canvas.
        sprites: Vec<PathBuf>,

        /// Output path for the overlay PNG
        #[arg(short, long, default_value = "overlay.png")]
        output: PathBuf,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { images, output, compact } => {
            extract::run_extract(&images, &output, compact)
        }
        Commands::Overlay { sprites, output } => overlay::run_overlay(&sprites, &output),
    }
}
