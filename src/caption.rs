//! Best-effort caption loading for the detail view.
//!
//! Captions are optional text files (`captions/{id}.txt`). A missing file, a
//! non-2xx response or a network error all mean "no caption"; nothing is shown
//! to the visitor. No retries and no timeout.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use crate::console::clog;

/// Fetch the caption at `url`, collapsing every failure to `None`.
pub async fn fetch_caption(url: &str) -> Option<String> {
    let caption = match fetch_text(url).await {
        Ok(body) => body.as_deref().and_then(caption_from_body),
        Err(err) => {
            clog(&format!("caption fetch failed for {url}: {err:?}"));
            return None;
        }
    };
    if caption.is_none() {
        clog(&format!("no caption at {url}"));
    }
    caption
}

// Ok(None) for a non-success status.
async fn fetch_text(url: &str) -> Result<Option<String>, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: Response = JsFuture::from(win.fetch_with_str(url)).await?.dyn_into()?;
    if !resp.ok() {
        return Ok(None);
    }
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string())
}

/// Whitespace-only files count as no caption.
pub fn caption_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
