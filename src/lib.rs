//! Copy text to the browser clipboard.
//!
//! Tries the legacy `document.execCommand('copy')` path first through a
//! transient trigger element, and falls back to `navigator.clipboard.writeText`
//! when that fails and the Clipboard API is present.
//!
//! ```no_run
//! # async fn demo() -> Result<(), webclip::CopyError> {
//! webclip::copy("hello world").await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod binding;
pub mod config;
pub mod copier;
pub mod dom;
pub mod error;
pub mod event;

#[cfg(target_arch = "wasm32")]
mod bindings;

pub use backend::{ClipboardBackend, LegacyBackend, ModernBackend};
pub use binding::{BindingOptions, ClipboardBinding};
pub use config::CopyConfig;
pub use copier::ClipboardCopier;
pub use error::{CopyError, LegacyFailure, ModernFailure};
pub use event::{Action, CopyEvent, CopyOutcome};

/// Copy `text` with the default browser tiers
pub async fn copy(text: &str) -> Result<CopyOutcome, CopyError> {
    ClipboardCopier::new().copy(text).await
}
