//! Browser helpers for scrolling, alerts, and reading picked files.
//!
//! Requires a browser environment; native builds no-op or return an error so
//! page code can call these unconditionally.

#![allow(clippy::unused_async)]

use crate::state::editor::PendingUpload;
#[cfg(feature = "csr")]
use crate::util::format::PLACEHOLDER_IMAGE;

/// Scroll the window back to the top, optionally animated.
pub fn scroll_to_top(smooth: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            if smooth {
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
            }
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = smooth;
    }
}

/// Show a blocking alert for failures with no better place to go.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("{message}");
    }
}

/// `error` handler for cover images: swap in the placeholder once.
pub fn use_placeholder_image(ev: &leptos::ev::Event) {
    #[cfg(feature = "csr")]
    {
        let img: web_sys::HtmlImageElement = leptos::prelude::event_target(ev);
        if !img.src().ends_with(PLACEHOLDER_IMAGE) {
            img.set_src(PLACEHOLDER_IMAGE);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
    }
}

/// Read the first file of an `<input type="file">` change event.
///
/// Returns the file contents plus an object URL for previewing it, or
/// `Ok(None)` when no file was selected.
///
/// # Errors
///
/// Returns an error string when the file cannot be read.
pub async fn read_picked_file(ev: leptos::ev::Event) -> Result<Option<(PendingUpload, String)>, String> {
    #[cfg(feature = "csr")]
    {
        let input: web_sys::HtmlInputElement = leptos::prelude::event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return Ok(None);
        };
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| format!("{e:?}"))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        let preview = web_sys::Url::create_object_url_with_blob(&file).map_err(|e| format!("{e:?}"))?;
        let content_type = if file.type_().is_empty() {
            "application/octet-stream".to_owned()
        } else {
            file.type_()
        };
        Ok(Some((
            PendingUpload {
                filename: file.name(),
                content_type,
                bytes,
            },
            preview,
        )))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        Err("file input not available outside the browser".to_owned())
    }
}
