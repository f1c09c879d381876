//! Hitbox record artifact
//!
//! The batch extractor's output: a JSON object mapping each sprite
//! filename to its list of `[x0, y0, x1, y1]` rectangles. Entries are
//! kept sorted by filename so the written artifact is deterministic.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::BoundingBox;

/// Error type for artifact serialization and writing.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Mapping from sprite filename to its hitbox rectangles.
///
/// Serializes transparently as the map itself, the shape the viewer
/// front-end loads. A filename with no hit regions maps to `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HitboxReport {
    pub entries: BTreeMap<String, Vec<BoundingBox>>,
}

impl HitboxReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filename: String, boxes: Vec<BoundingBox>) {
        self.entries.insert(filename, boxes);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to JSON, pretty-printed (2-space indent) unless compact.
    pub fn to_json(&self, pretty: bool) -> Result<String, ReportError> {
        let json =
            if pretty { serde_json::to_string_pretty(self)? } else { serde_json::to_string(self)? };
        Ok(json)
    }

    /// Write the JSON artifact, creating parent directories as needed.
    pub fn write_json(&self, path: &Path, pretty: bool) -> Result<(), ReportError> {
        let json = self.to_json(pretty)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
