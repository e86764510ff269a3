use roster_core::{GalleryConfig, GalleryState, load_catalog};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::http::HttpSource;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in roster-core's GalleryState.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<GalleryConfig>,
    pub gallery: Arc<RwLock<GalleryState>>,
}

impl CliContext {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            gallery: Arc::new(RwLock::new(GalleryState::new(config.clone()))),
            config: Arc::new(config),
        }
    }

    /// Fetch the catalog once and publish it. Failures leave the gallery empty.
    pub async fn load(&self) {
        let source = HttpSource::new(self.config.catalog_url.clone());
        let catalog = load_catalog(&source).await;
        self.gallery.write().await.load(catalog);
    }
}
