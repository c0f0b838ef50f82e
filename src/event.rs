//! Copy events and outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Clipboard command run against the selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Copy,
    Cut,
}

impl Action {
    /// Command name as understood by `document.execCommand`
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Copy => "copy",
            Action::Cut => "cut",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emitted by the legacy mechanism when `execCommand` reports success
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyEvent {
    pub action: Action,
    pub text: String,
}

impl CopyEvent {
    pub fn new(action: Action, text: impl Into<String>) -> Self {
        Self {
            action,
            text: text.into(),
        }
    }
}

/// Which tier put the text on the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Legacy `execCommand` path succeeded
    Legacy(CopyEvent),
    /// `navigator.clipboard.writeText` succeeded; it resolves with no value
    Modern,
}

impl CopyOutcome {
    /// The success event, if the legacy tier produced one
    pub fn event(&self) -> Option<&CopyEvent> {
        match self {
            CopyOutcome::Legacy(event) => Some(event),
            CopyOutcome::Modern => None,
        }
    }
}
