//! Shared catalog types for the roster gallery
//!
//! This crate contains the serializable record types that are shared between
//! the catalog logic (roster-core), the WASM frontend (roster-ui) and the
//! terminal frontend (roster-cli).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Catalog Records
// ─────────────────────────────────────────────────────────────────────────────

/// One catalog entry, shown as a thumbnail in the gallery.
///
/// Every field defaults to empty when absent from the source document.
/// Malformed entries render with gaps instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub display_name: String,
    pub role: String,
    /// Full-body portrait shown in the thumbnail grid
    pub full_portrait: String,
    /// Small icon shown in the detail popup
    pub display_icon: String,
    pub description: String,
    /// External video id, interpolated into the embed URL as-is
    pub video: String,
    pub abilities: Vec<Ability>,
}

impl Character {
    /// Look up an ability by its position in the record's ability list.
    pub fn ability(&self, index: usize) -> Option<&Ability> {
        self.abilities.get(index)
    }

    /// Position of the first ability with the given display name (case-insensitive).
    pub fn ability_index(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.abilities
            .iter()
            .position(|a| a.display_name.to_lowercase() == needle)
    }
}

/// A sub-item of a [`Character`], shown only inside its detail popup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ability {
    pub display_name: String,
    pub display_icon: String,
    pub description: String,
}
