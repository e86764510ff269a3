//! Role navigation bar

use dioxus::prelude::*;
use roster_core::GalleryState;

/// One entry per catalog group, "All" last. Clicking selects the group and
/// clears the search box.
#[component]
pub fn GroupNav(mut gallery: Signal<GalleryState>) -> Element {
    let state = gallery.read();
    let selected = state.filter().selected_role().map(str::to_string);
    let groups: Vec<String> = state.group_names().into_iter().map(String::from).collect();
    drop(state);

    rsx! {
        nav { class: "navbar navbar-dark bg-black",
            ul { class: "navbar-nav",
                for role in groups {
                    li {
                        key: "{role}",
                        class: if selected.as_deref() == Some(role.as_str()) { "nav-item active" } else { "nav-item" },
                        onclick: {
                            let role = role.clone();
                            move |_| gallery.write().select_group(&role)
                        },
                        "{role}"
                    }
                }
            }
        }
    }
}
