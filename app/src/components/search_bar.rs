//! Name search box

use dioxus::prelude::*;
use roster_core::GalleryState;

/// Filtering reacts to every keystroke. The button is kept as an
/// affordance and only logs the current query.
#[component]
pub fn SearchBar(mut gallery: Signal<GalleryState>) -> Element {
    let query = gallery.read().filter().query().to_string();

    rsx! {
        div { class: "search-bar",
            input {
                r#type: "text",
                placeholder: "Search by name",
                value: "{query}",
                oninput: move |e| gallery.write().set_query(e.value()),
            }
            button { onclick: move |_| gallery.read().search(), "Search" }
        }
    }
}
