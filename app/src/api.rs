//! Browser fetch client
//!
//! Wraps `window.fetch` so the catalog loader can run inside the WASM
//! frontend. This is the only place the UI performs I/O.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use roster_core::{CatalogSource, Character, LoadError, parse_records};

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Render a JS exception as a request error
fn js_error(url: &str, value: JsValue) -> LoadError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    LoadError::Request {
        url: url.to_string(),
        message,
    }
}

fn request_error(url: &str, message: &str) -> LoadError {
    LoadError::Request {
        url: url.to_string(),
        message: message.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog Source
// ─────────────────────────────────────────────────────────────────────────────

/// Fetches the catalog document with the browser's fetch API.
pub struct BrowserFetch {
    url: String,
}

impl BrowserFetch {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for BrowserFetch {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<Character>, LoadError> {
        let url = self.url.as_str();
        let window = web_sys::window().ok_or_else(|| request_error(url, "no window object"))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| js_error(url, e))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| request_error(url, "fetch did not return a Response"))?;

        if !response.ok() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let text = response.text().map_err(|e| js_error(url, e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| js_error(url, e))?
            .as_string()
            .ok_or_else(|| request_error(url, "response body is not text"))?;

        parse_records(&body)
    }
}
