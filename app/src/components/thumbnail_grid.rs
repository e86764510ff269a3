//! Grid of visible record thumbnails

use dioxus::prelude::*;
use roster_core::{Character, GalleryState, RecordId};

#[component]
pub fn ThumbnailGrid(mut gallery: Signal<GalleryState>) -> Element {
    // Cloned out so the read guard is not held across event handlers
    let visible: Vec<(RecordId, Character)> = gallery
        .read()
        .visible()
        .into_iter()
        .map(|(id, r)| (id, r.clone()))
        .collect();

    rsx! {
        div { class: "thumbnails",
            for (id, record) in visible {
                div {
                    key: "{id.0}",
                    class: "thumbnail",
                    onclick: move |_| {
                        gallery.write().open(id);
                    },
                    img { src: "{record.full_portrait}", alt: "{record.display_name}" }
                    h3 { class: "display-name", "{record.display_name}" }
                }
            }
        }
    }
}
