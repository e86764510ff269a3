//! UI Components
//!
//! Gallery building blocks rendered by the root `App` component.

pub mod detail_popup;
pub mod group_nav;
pub mod outside_click;
pub mod search_bar;
pub mod thumbnail_grid;

pub use detail_popup::DetailPopup;
pub use group_nav::GroupNav;
pub use outside_click::use_outside_click;
pub use search_bar::SearchBar;
pub use thumbnail_grid::ThumbnailGrid;
