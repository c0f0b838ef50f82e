//! Clipboard copy error types
//!
//! The two tiers fail with different shapes and the caller sees whichever
//! failure was terminal. A legacy failure is only surfaced when the modern
//! tier was never attempted.

use crate::event::Action;
use serde::Serialize;
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};

/// Failure event of the legacy `execCommand` mechanism
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyFailure {
    pub action: Action,
    pub text: String,
    pub reason: String,
}

impl LegacyFailure {
    pub fn new(action: Action, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            action,
            text: text.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LegacyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "execCommand('{}') failed: {}", self.action, self.reason)
    }
}

/// Rejection from `navigator.clipboard.writeText`
#[derive(Debug, Clone)]
pub struct ModernFailure {
    /// DOMException name, e.g. `NotAllowedError`
    pub name: String,
    pub message: String,
    /// The rejected value itself, handed back to JS callers untouched
    source: Option<JsValue>,
}

impl ModernFailure {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Permission was refused by the user or the browser
    pub fn is_permission_denied(&self) -> bool {
        self.name == "NotAllowedError"
    }

    pub fn source(&self) -> Option<&JsValue> {
        self.source.as_ref()
    }
}

// The JS source is identity, not content; two failures with the same name
// and message compare equal regardless of which exception object they came from
impl PartialEq for ModernFailure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.message == other.message
    }
}

impl Eq for ModernFailure {}

impl fmt::Display for ModernFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

/// Clipboard copy error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// Legacy tier failed and no modern tier was available
    Legacy(LegacyFailure),
    /// Legacy tier failed, then the modern tier failed as well
    Modern(ModernFailure),
    /// No tier could be attempted
    Unavailable,
    /// JS text holds an unpaired surrogate and cannot be copied unchanged
    InvalidText,
}

impl CopyError {
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    pub fn is_modern(&self) -> bool {
        matches!(self, Self::Modern(_))
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(failure) => write!(f, "Legacy clipboard copy failed: {}", failure),
            Self::Modern(failure) => write!(f, "Clipboard API write failed: {}", failure),
            Self::Unavailable => write!(f, "No clipboard mechanism available"),
            Self::InvalidText => write!(f, "Text contains an unpaired UTF-16 surrogate"),
        }
    }
}

impl std::error::Error for CopyError {}

impl From<LegacyFailure> for CopyError {
    fn from(failure: LegacyFailure) -> Self {
        Self::Legacy(failure)
    }
}

impl From<ModernFailure> for CopyError {
    fn from(failure: ModernFailure) -> Self {
        Self::Modern(failure)
    }
}

impl From<CopyError> for JsValue {
    fn from(err: CopyError) -> Self {
        match err {
            CopyError::Legacy(failure) => serde_wasm_bindgen::to_value(&failure)
                .unwrap_or_else(|_| JsValue::from_str(&failure.to_string())),
            CopyError::Modern(failure) => match failure.source {
                Some(source) => source,
                None => {
                    let js_err = js_sys::Error::new(&failure.message);
                    js_err.set_name(&failure.name);
                    js_err.into()
                }
            },
            CopyError::Unavailable => js_sys::Error::new("No clipboard mechanism available").into(),
            CopyError::InvalidText => {
                js_sys::TypeError::new("Text contains an unpaired UTF-16 surrogate").into()
            }
        }
    }
}

/// Best-effort human readable description of a thrown JS value
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for ModernFailure {
    fn from(value: JsValue) -> Self {
        let mut failure = if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
            Self::new(exception.name(), exception.message())
        } else if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            Self::new(String::from(err.name()), String::from(err.message()))
        } else {
            Self::new("Error", describe_js_error(&value))
        };
        failure.source = Some(value);
        failure
    }
}
