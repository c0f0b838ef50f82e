//! Tier two: asynchronous Clipboard API

use super::ClipboardBackend;
use crate::error::{CopyError, ModernFailure};
use crate::event::CopyOutcome;
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Clipboard;

/// Writes through `navigator.clipboard.writeText`.
///
/// May show a permission prompt; a refusal rejects with `NotAllowedError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernBackend;

impl ModernBackend {
    pub fn new() -> Self {
        Self
    }
}

/// `navigator.clipboard`, if this environment exposes it.
///
/// Insecure contexts and older browsers leave the property undefined, so it
/// is read reflectively instead of through the typed getter.
fn navigator_clipboard() -> Option<Clipboard> {
    let navigator = web_sys::window()?.navigator();
    let value = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.dyn_into::<Clipboard>().ok()
}

#[async_trait(?Send)]
impl ClipboardBackend for ModernBackend {
    fn name(&self) -> &'static str {
        "navigator.clipboard"
    }

    fn is_available(&self) -> bool {
        navigator_clipboard().is_some()
    }

    async fn attempt_copy(&self, text: &str) -> Result<CopyOutcome, CopyError> {
        let clipboard = navigator_clipboard().ok_or(CopyError::Unavailable)?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| CopyOutcome::Modern)
            .map_err(|e| CopyError::Modern(ModernFailure::from(e)))
    }
}
