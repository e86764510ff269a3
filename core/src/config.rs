use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_CATALOG_URL: &str = "https://staging.ina17.com/data.json";
pub const DEFAULT_VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Where the catalog comes from and how record videos are embedded.
///
/// Read-only: frontends may load it from TOML but never write it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// JSON array of records, fetched once at startup
    pub catalog_url: String,
    /// Prefix the record's `video` id is appended to
    pub video_embed_base: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            video_embed_base: DEFAULT_VIDEO_EMBED_BASE.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Embed URL for a video id. The id is not validated.
    pub fn video_embed_url(&self, video_id: &str) -> String {
        format!("{}{}", self.video_embed_base, video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GalleryConfig::from_toml_str(r#"catalog_url = "http://localhost:8080/agents.json""#)
            .unwrap();
        assert_eq!(config.catalog_url, "http://localhost:8080/agents.json");
        assert_eq!(config.video_embed_base, DEFAULT_VIDEO_EMBED_BASE);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = GalleryConfig::from_toml_str("catalog_url = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = GalleryConfig::load(Path::new("/nonexistent/roster.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn embed_url_appends_id_verbatim() {
        let config = GalleryConfig::default();
        assert_eq!(
            config.video_embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(config.video_embed_url("a b"), "https://www.youtube.com/embed/a b");
    }
}
