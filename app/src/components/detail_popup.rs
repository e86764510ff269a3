//! Detail overlay for the open record
//!
//! Shows the record's icon, role, description, abilities and embedded
//! video. Clicking an ability expands its description; clicking it again
//! collapses it.

use dioxus::prelude::*;
use roster_core::{Ability, GalleryState};

/// DOM id of the popup's content box. Pointer-downs outside it close the popup.
pub const POPUP_CONTENT_ID: &str = "popup-content";

#[component]
pub fn DetailPopup(mut gallery: Signal<GalleryState>) -> Element {
    let state = gallery.read();
    let Some(selection) = state.selected() else {
        return rsx! {};
    };

    let record = selection.record.clone();
    let active = selection.active_ability.map(|(i, _)| i);
    let video_url = state.video_embed_url(&record);
    drop(state);

    rsx! {
        div { class: "popup-detail",
            div { class: "popup-content", id: POPUP_CONTENT_ID,
                span { class: "close", onclick: move |_| gallery.write().close(), "×" }
                div { class: "thumbnail-info",
                    img { src: "{record.display_icon}", alt: "{record.display_icon}" }
                    div { class: "text-info",
                        h2 { "{record.display_name}" }
                        h3 { "Role: {record.role}" }
                        p { "{record.description}" }
                    }
                }
                if !record.abilities.is_empty() {
                    ul { class: "abilities",
                        for (idx, ability) in record.abilities.iter().cloned().enumerate() {
                            AbilityRow {
                                key: "{idx}",
                                ability,
                                expanded: active == Some(idx),
                                on_toggle: move |_| {
                                    gallery.write().toggle_ability(idx);
                                },
                            }
                        }
                    }
                }
                div { class: "video-section",
                    iframe {
                        width: "500",
                        height: "200",
                        src: "{video_url}",
                        title: "YouTube video player",
                        allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                        allowfullscreen: true,
                    }
                }
            }
        }
    }
}

#[component]
fn AbilityRow(ability: Ability, expanded: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        li {
            class: if expanded { "ability ability-active" } else { "ability" },
            onclick: move |_| on_toggle.call(()),
            div { class: "ability-header",
                if !ability.display_icon.is_empty() {
                    img { class: "ability-icon", src: "{ability.display_icon}", alt: "" }
                }
                span { class: "ability-name", "{ability.display_name}" }
            }
            if expanded {
                p { class: "ability-description", "{ability.description}" }
            }
        }
    }
}
