//! Sprite loading and filename vocabulary
//!
//! Hitbox sprite dumps are named `<attack>_<character>.png`, e.g.
//! `ul_dm.png` for Dustman's grounded up light. The stem splits on the
//! first underscore; codes outside the known vocabulary parse as `None`
//! so callers decide how to fall back.

use std::io;
use std::path::{Path, PathBuf};

use image::RgbImage;
use thiserror::Error;

/// Error type for sprite loading failures.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// The path could not be opened at all
    #[error("cannot open sprite '{}': {source}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file exists but is not a decodable image
    #[error("cannot decode sprite '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Load a sprite and coerce it to RGB, discarding any alpha channel.
///
/// # Errors
///
/// Returns [`SpriteError::Missing`] when the path cannot be opened and
/// [`SpriteError::Decode`] when it opens but does not decode as an image.
pub fn load_rgb(path: &Path) -> Result<RgbImage, SpriteError> {
    let reader = image::io::Reader::open(path)
        .map_err(|source| SpriteError::Missing { path: path.to_path_buf(), source })?;
    let dynamic = reader
        .decode()
        .map_err(|source| SpriteError::Decode { path: path.to_path_buf(), source })?;
    Ok(dynamic.to_rgb8())
}

/// Attack slots appearing in sprite dump filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackCode {
    GroundedUpLight,
    GroundedSideLight,
    GroundedDownLight,
    GroundedUpHeavy,
    GroundedSideHeavy,
    GroundedDownHeavy,
    AerialUpLight,
    AerialSideLight,
    AerialDownLight,
    AerialUpHeavy,
    AerialSideHeavy,
    AerialDownHeavy,
}

impl AttackCode {
    pub const ALL: [AttackCode; 12] = [
        AttackCode::GroundedUpLight,
        AttackCode::GroundedSideLight,
        AttackCode::GroundedDownLight,
        AttackCode::GroundedUpHeavy,
        AttackCode::GroundedSideHeavy,
        AttackCode::GroundedDownHeavy,
        AttackCode::AerialUpLight,
        AttackCode::AerialSideLight,
        AttackCode::AerialDownLight,
        AttackCode::AerialUpHeavy,
        AttackCode::AerialSideHeavy,
        AttackCode::AerialDownHeavy,
    ];

    /// Parse a filename code like `ul` or `adh`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ul" => Some(Self::GroundedUpLight),
            "sl" => Some(Self::GroundedSideLight),
            "dl" => Some(Self::GroundedDownLight),
            "uh" => Some(Self::GroundedUpHeavy),
            "sh" => Some(Self::GroundedSideHeavy),
            "dh" => Some(Self::GroundedDownHeavy),
            "aul" => Some(Self::AerialUpLight),
            "asl" => Some(Self::AerialSideLight),
            "adl" => Some(Self::AerialDownLight),
            "auh" => Some(Self::AerialUpHeavy),
            "ash" => Some(Self::AerialSideHeavy),
            "adh" => Some(Self::AerialDownHeavy),
            _ => None,
        }
    }

    /// The filename code for this attack.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GroundedUpLight => "ul",
            Self::GroundedSideLight => "sl",
            Self::GroundedDownLight => "dl",
            Self::GroundedUpHeavy => "uh",
            Self::GroundedSideHeavy => "sh",
            Self::GroundedDownHeavy => "dh",
            Self::AerialUpLight => "aul",
            Self::AerialSideLight => "asl",
            Self::AerialDownLight => "adl",
            Self::AerialUpHeavy => "auh",
            Self::AerialSideHeavy => "ash",
            Self::AerialDownHeavy => "adh",
        }
    }

    /// Human-readable label, e.g. "Grounded Up Light".
    pub fn label(&self) -> &'static str {
        match self {
            Self::GroundedUpLight => "Grounded Up Light",
            Self::GroundedSideLight => "Grounded Side Light",
            Self::GroundedDownLight => "Grounded Down Light",
            Self::GroundedUpHeavy => "Grounded Up Heavy",
            Self::GroundedSideHeavy => "Grounded Side Heavy",
            Self::GroundedDownHeavy => "Grounded Down Heavy",
            Self::AerialUpLight => "Aerial Up Light",
            Self::AerialSideLight => "Aerial Side Light",
            Self::AerialDownLight => "Aerial Down Light",
            Self::AerialUpHeavy => "Aerial Up Heavy",
            Self::AerialSideHeavy => "Aerial Side Heavy",
            Self::AerialDownHeavy => "Aerial Down Heavy",
        }
    }
}

/// Playable characters appearing in sprite dump filenames.
///
/// Variant order is stable; overlay styling indexes colors by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCode {
    Dustman,
    Dustgirl,
    Dustkid,
    Dustworth,
}

impl CharacterCode {
    pub const ALL: [CharacterCode; 4] = [
        CharacterCode::Dustman,
        CharacterCode::Dustgirl,
        CharacterCode::Dustkid,
        CharacterCode::Dustworth,
    ];

    /// Parse a filename code like `dm`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dm" => Some(Self::Dustman),
            "dg" => Some(Self::Dustgirl),
            "dk" => Some(Self::Dustkid),
            "dw" => Some(Self::Dustworth),
            _ => None,
        }
    }

    /// The filename code for this character.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Dustman => "dm",
            Self::Dustgirl => "dg",
            Self::Dustkid => "dk",
            Self::Dustworth => "dw",
        }
    }

    /// Human-readable label, e.g. "Dustman".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dustman => "Dustman",
            Self::Dustgirl => "Dustgirl",
            Self::Dustkid => "Dustkid",
            Self::Dustworth => "Dustworth",
        }
    }
}

/// Parsed `<attack>_<character>` sprite name.
///
/// Either half can be `None` when its code is not in the vocabulary; the
/// whole parse is `None` only when the stem has no underscore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteName {
    pub attack: Option<AttackCode>,
    pub character: Option<CharacterCode>,
}

impl SpriteName {
    /// Split a filename stem on its first underscore.
    pub fn parse(stem: &str) -> Option<Self> {
        let (attack, character) = stem.split_once('_')?;
        Some(Self {
            attack: AttackCode::from_code(attack),
            character: CharacterCode::from_code(character),
        })
    }

    /// Parse the stem of a sprite path.
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::parse(path.file_stem()?.to_str()?)
    }
}
