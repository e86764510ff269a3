//! Gallery view state shared by every frontend.
//!
//! Holds the loaded catalog, the active filter and the popup. All derived
//! output (visible records, count, selected record) is recomputed on demand.

use roster_types::{Ability, Character};

use crate::catalog::{Catalog, RecordId};
use crate::config::GalleryConfig;
use crate::filter::FilterView;
use crate::popup::{PointerTarget, Popup};

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    config: GalleryConfig,
    catalog: Catalog,
    filter: FilterView,
    popup: Popup,
}

/// The open record and its expanded ability, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub id: RecordId,
    pub record: &'a Character,
    pub active_ability: Option<(usize, &'a Ability)>,
}

impl GalleryState {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterView {
        &self.filter
    }

    pub fn popup(&self) -> Popup {
        self.popup
    }

    /// Replace the catalog wholesale. Record ids from the old catalog are
    /// invalid afterwards, so any open popup is closed.
    pub fn load(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.popup.close();
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.catalog.groups().iter().map(|g| g.key.as_str()).collect()
    }

    pub fn visible(&self) -> Vec<(RecordId, &Character)> {
        self.filter.visible(&self.catalog)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    pub fn select_group(&mut self, key: &str) {
        self.filter.select_group(key);
        tracing::debug!(group = key, role = ?self.filter.selected_role(), "Group selected");
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// The search button. Filtering is already live, so this only logs.
    pub fn search(&self) {
        tracing::info!(query = self.filter.query(), "Search query");
    }

    pub fn open(&mut self, id: RecordId) -> bool {
        if self.catalog.get(id).is_none() {
            return false;
        }
        let opened = self.popup.open(id);
        if opened {
            tracing::debug!(record = id.0, "Popup opened");
        }
        opened
    }

    /// Open the first visible record whose display name equals `name`
    /// (case-insensitive).
    pub fn open_by_name(&mut self, name: &str) -> bool {
        let needle = name.to_lowercase();
        let id = self
            .visible()
            .into_iter()
            .find(|(_, r)| r.display_name.to_lowercase() == needle)
            .map(|(id, _)| id);
        id.is_some_and(|id| self.open(id))
    }

    pub fn toggle_ability(&mut self, ability: usize) -> bool {
        self.popup.toggle_ability(&self.catalog, ability)
    }

    /// Toggle an ability of the open record by display name.
    pub fn toggle_ability_by_name(&mut self, name: &str) -> bool {
        let index = self.selected().and_then(|s| s.record.ability_index(name));
        index.is_some_and(|i| self.toggle_ability(i))
    }

    pub fn close(&mut self) {
        if self.popup.is_open() {
            tracing::debug!("Popup closed");
        }
        self.popup.close();
    }

    pub fn pointer_down(&mut self, target: PointerTarget) {
        self.popup.pointer_down(target);
    }

    pub fn selected(&self) -> Option<Selection<'_>> {
        let id = self.popup.record()?;
        let record = self.catalog.get(id)?;
        let active_ability = self
            .popup
            .active_ability()
            .and_then(|i| record.ability(i).map(|a| (i, a)));
        Some(Selection {
            id,
            record,
            active_ability,
        })
    }

    pub fn video_embed_url(&self, record: &Character) -> String {
        self.config.video_embed_url(&record.video)
    }
}
