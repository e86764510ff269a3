pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod loader;
pub mod popup;

// Re-exports for convenience
pub use catalog::{ALL_GROUP, Catalog, Group, RecordId, locale_cmp, sort_records};
pub use config::GalleryConfig;
pub use error::{ConfigError, LoadError};
pub use filter::FilterView;
pub use gallery::{GalleryState, Selection};
pub use loader::{CatalogSource, build_catalog, load_catalog, parse_records};
pub use popup::{PointerTarget, Popup};
pub use roster_types::{Ability, Character};
