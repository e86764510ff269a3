//! Document-level pointer-down subscription
//!
//! Attached once when the gallery mounts and removed when it unmounts.
//! Every `mousedown` is classified against the popup's content box and
//! forwarded to the gallery state.

use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use roster_core::{GalleryState, PointerTarget};

use super::detail_popup::POPUP_CONTENT_ID;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Whether the event target lies inside the rendered popup
fn classify(event: &web_sys::MouseEvent) -> PointerTarget {
    let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    let popup = document().and_then(|d| d.get_element_by_id(POPUP_CONTENT_ID));

    match popup {
        Some(popup) if popup.contains(target.as_ref()) => PointerTarget::InsidePopup,
        _ => PointerTarget::Outside,
    }
}

pub fn use_outside_click(mut gallery: Signal<GalleryState>) {
    let listener = use_hook(|| {
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
            // Closed popups ignore pointer-downs; skip the write to avoid a re-render
            if !gallery.peek().popup().is_open() {
                return;
            }
            let target = classify(&event);
            let _ = gallery.try_write().map(|mut g| g.pointer_down(target));
        });

        if let Some(doc) = document()
            && let Err(e) = doc.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "Failed to attach mousedown listener");
        }
        Rc::new(closure)
    });

    use_drop(move || {
        let callback: &JsValue = (*listener).as_ref();
        if let Some(doc) = document() {
            let _ = doc.remove_event_listener_with_callback("mousedown", callback.unchecked_ref());
        }
    });
}
