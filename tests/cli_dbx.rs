//! CLI integration tests for the `dbx` binary.
//!
//! Runs the compiled binary against synthetic sprite directories and
//! verifies stdout, exit codes, and the files it writes.

use std::path::{Path, PathBuf};
use std::process::Command;

use image::{Rgb, RgbImage, Rgba};
use tempfile::TempDir;

/// Get the path to the dbx binary.
fn dbx_binary() -> PathBuf {
    let release = Path::new("target/release/dbx");
    if release.exists() {
        return release.to_path_buf();
    }
    let debug = Path::new("target/debug/dbx");
    if debug.exists() {
        return debug.to_path_buf();
    }
    panic!("dbx binary not found. Run 'cargo build' first.");
}

/// Run dbx with the given arguments and return (stdout, stderr, exit code).
fn run_dbx(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(dbx_binary()).args(args).output().expect("Failed to execute dbx");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code())
}

/// Write a sprite with one solid hit-green rectangle (half-open coords).
fn write_sprite(dir: &Path, name: &str, size: (u32, u32), rect: Option<(u32, u32, u32, u32)>) {
    let mut image = RgbImage::from_pixel(size.0, size.1, Rgb([25, 25, 25]));
    if let Some((x0, y0, x1, y1)) = rect {
        for y in y0..y1 {
            for x in x0..x1 {
                image.put_pixel(x, y, Rgb([0x52, 0xDB, 0x22]));
            }
        }
    }
    image.save(dir.join(name)).unwrap();
}

// ============================================================================
// dbx extract
// ============================================================================

#[test]
fn test_extract_writes_artifact() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir(&images).unwrap();
    write_sprite(&images, "ul_dm.png", (16, 16), Some((2, 2, 5, 6)));

    let artifact = dir.path().join("static/hitboxes.json");
    let (stdout, _, code) =
        run_dbx(&["extract", images.to_str().unwrap(), "-o", artifact.to_str().unwrap()]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("ul_dm.png: [[2,2,5,6]]"), "got:\n{}", stdout);
    assert!(stdout.contains("Saved hitbox rectangles to"), "got:\n{}", stdout);

    let written = std::fs::read_to_string(&artifact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value, serde_json::json!({ "ul_dm.png": [[2, 2, 5, 6]] }));
}

#[test]
fn test_extract_skips_undecodable_files() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir(&images).unwrap();
    write_sprite(&images, "ul_dm.png", (12, 12), Some((1, 1, 4, 4)));
    std::fs::write(images.join("corrupt.png"), b"nope").unwrap();

    let artifact = dir.path().join("hitboxes.json");
    let (_, stderr, code) =
        run_dbx(&["extract", images.to_str().unwrap(), "-o", artifact.to_str().unwrap()]);

    assert_eq!(code, Some(0));
    assert!(stderr.contains("Skipping corrupt.png"), "got:\n{}", stderr);

    let written = std::fs::read_to_string(&artifact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(value.get("ul_dm.png").is_some());
    assert!(value.get("corrupt.png").is_none());
}

#[test]
fn test_extract_rejects_non_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent");

    let (_, stderr, code) = run_dbx(&["extract", missing.to_str().unwrap()]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("is not a directory"), "got:\n{}", stderr);
}

// ============================================================================
// dbx overlay
// ============================================================================

#[test]
fn test_overlay_writes_png() {
    let dir = TempDir::new().unwrap();
    write_sprite(dir.path(), "ul_dm.png", (30, 20), Some((5, 5, 15, 15)));
    let sprite = dir.path().join("ul_dm.png");
    let out = dir.path().join("overlay.png");

    let (stdout, _, code) =
        run_dbx(&["overlay", sprite.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Dustman, Grounded Up Light"), "got:\n{}", stdout);
    assert!(stdout.contains("Saved 30x20 overlay"), "got:\n{}", stdout);

    let overlay = image::open(&out).unwrap().to_rgba8();
    assert_eq!(overlay.dimensions(), (30, 20));
    assert_eq!(*overlay.get_pixel(5, 5), Rgba([0x3F, 0xA7, 0xE0, 200]));
}

#[test]
fn test_overlay_with_no_sprites_uses_fallback_canvas() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("empty.png");

    let (stdout, _, code) = run_dbx(&["overlay", "-o", out.to_str().unwrap()]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Saved 95x96 overlay"), "got:\n{}", stdout);

    let overlay = image::open(&out).unwrap().to_rgba8();
    assert_eq!(overlay.dimensions(), (95, 96));
    assert!(overlay.pixels().all(|&p| p == Rgba([0, 0, 0, 0])));
}

#[test]
fn test_overlay_missing_sprite_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("dl_dk.png");
    let out = dir.path().join("overlay.png");

    let (_, stderr, code) =
        run_dbx(&["overlay", missing.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error:"), "got:\n{}", stderr);
    assert!(!out.exists());
}
