//! Clipboard tiers
//!
//! Each browser mechanism is one `ClipboardBackend`. The copier walks them in
//! order, so a tier only needs to know how to probe itself and how to try once.

mod legacy;
mod modern;

pub use legacy::LegacyBackend;
pub use modern::ModernBackend;

use crate::error::CopyError;
use crate::event::CopyOutcome;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait ClipboardBackend {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Capability probe; unavailable tiers are skipped without being attempted
    fn is_available(&self) -> bool;

    /// Try once to put `text` on the clipboard
    async fn attempt_copy(&self, text: &str) -> Result<CopyOutcome, CopyError>;
}
