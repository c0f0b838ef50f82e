//! JavaScript exports
//!
//! Named exports only: wasm-bindgen has no ES default export, so the module
//! carries no `export default` placeholder.

use crate::config::CopyConfig;
use crate::copier::ClipboardCopier;
use crate::dom;
use crate::error::CopyError;
use crate::event::CopyOutcome;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Route `log` records to the browser console and install the panic hook
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = level
        .as_deref()
        .and_then(|level| level.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
}

/// Resolves with `{ action, text }` after a legacy copy, or `undefined` after
/// a Clipboard API write. Rejects with the terminal tier's failure, or with a
/// `TypeError` if `text` holds an unpaired surrogate.
#[wasm_bindgen(js_name = copy)]
pub fn copy_js(text: js_sys::JsString) -> js_sys::Promise {
    future_to_promise(async move {
        let text = decode(&text)?;
        settle(ClipboardCopier::new().copy(&text).await)
    })
}

/// Same as `copy`, with an options object (`fallback`, `action`, `containerId`)
#[wasm_bindgen(js_name = copyWith)]
pub fn copy_with(text: js_sys::JsString, options: JsValue) -> js_sys::Promise {
    future_to_promise(async move {
        let text = decode(&text)?;
        let config = if options.is_undefined() || options.is_null() {
            CopyConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<CopyConfig>(options).map_err(|e| {
                JsValue::from(js_sys::Error::new(&format!("Invalid copy options: {}", e)))
            })?
        };
        settle(ClipboardCopier::from_config(&config).copy(&text).await)
    })
}

// wasm-bindgen's `String` conversion would swap lone surrogates for U+FFFD
fn decode(text: &js_sys::JsString) -> Result<String, CopyError> {
    let units: Vec<u16> = text.iter().collect();
    dom::text_from_utf16(&units)
}

fn settle(result: Result<CopyOutcome, CopyError>) -> Result<JsValue, JsValue> {
    match result? {
        CopyOutcome::Legacy(event) => serde_wasm_bindgen::to_value(&event).map_err(JsValue::from),
        CopyOutcome::Modern => Ok(JsValue::UNDEFINED),
    }
}
