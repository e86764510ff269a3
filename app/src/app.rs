#![allow(non_snake_case)]

use dioxus::prelude::*;

use roster_core::{GalleryConfig, GalleryState, load_catalog};

use crate::api::BrowserFetch;
use crate::components::{DetailPopup, GroupNav, SearchBar, ThumbnailGrid, use_outside_click};

static CSS: Asset = asset!("/assets/styles.css");

// ─────────────────────────────────────────────────────────────────────────────
// App Component
// ─────────────────────────────────────────────────────────────────────────────

pub fn App() -> Element {
    let mut gallery = use_signal(|| GalleryState::new(GalleryConfig::default()));

    // Close the popup on pointer-downs outside it
    use_outside_click(gallery);

    // One-shot catalog fetch; the gallery renders empty until it resolves
    use_future(move || async move {
        let url = gallery.peek().config().catalog_url.clone();
        let catalog = load_catalog(&BrowserFetch::new(url)).await;
        gallery.write().load(catalog);
    });

    let total = gallery.read().visible_count();
    let popup_open = gallery.read().popup().is_open();

    rsx! {
        link { rel: "stylesheet", href: CSS }
        div { class: "body",
            header { class: "header" }
            GroupNav { gallery }
            SearchBar { gallery }
            div { class: "total-hero", "Total Hero: {total}" }
            ThumbnailGrid { gallery }
            if popup_open {
                DetailPopup { gallery }
            }
        }
    }
}
