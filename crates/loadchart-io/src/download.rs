//! JPEG file download via Blob URLs.
//!
//! Dioxus has no built-in file download API, so the exported image is
//! delivered by wrapping the encoded bytes in a `Blob`, minting an
//! object URL for it, and programmatically clicking a temporary
//! `<a download>` element.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A required global (window, document, body) was missing.
    #[error("browser environment unavailable: no {0}")]
    MissingGlobal(&'static str),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Offer `data` to the user as a downloadable file named `filename`.
///
/// The bytes are copied into a `Blob` of the given MIME type; the
/// object URL minted for it is revoked once the click has been
/// dispatched, at which point the download is already under way.
///
/// # Errors
///
/// Returns [`DownloadError::MissingGlobal`] outside a browser and
/// [`DownloadError::JsError`] when Blob creation, URL minting, or
/// element handling fails.
pub fn trigger_download(data: &[u8], filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .ok_or(DownloadError::MissingGlobal("window"))?
        .document()
        .ok_or(DownloadError::MissingGlobal("document"))?;
    let body = document
        .body()
        .ok_or(DownloadError::MissingGlobal("document body"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(data));
    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup; the download is already initiated.
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
