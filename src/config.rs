//! Copy options
//!
//! Decoded from a plain JS object on the wasm side, so every field has a
//! default and an empty object is valid.

use crate::event::Action;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CopyConfig {
    /// Try `navigator.clipboard.writeText` after a legacy failure
    pub fallback: bool,
    pub action: Action,
    /// Id of the element that hosts transient nodes; `document.body` if unset
    pub container_id: Option<String>,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            fallback: true,
            action: Action::Copy,
            container_id: None,
        }
    }
}
