//! Ordered fallback across clipboard tiers

use crate::backend::{ClipboardBackend, LegacyBackend, ModernBackend};
use crate::config::CopyConfig;
use crate::error::CopyError;
use crate::event::CopyOutcome;

/// Copies text through the first tier that succeeds.
///
/// Tiers run strictly in order and a tier is only attempted after every
/// earlier one failed or was unavailable. When all attempted tiers fail the
/// error of the last one is returned, so with the browser default a legacy
/// failure only surfaces when the Clipboard API is missing.
pub struct ClipboardCopier {
    tiers: Vec<Box<dyn ClipboardBackend>>,
}

impl ClipboardCopier {
    /// `execCommand` first, then `navigator.clipboard`
    pub fn new() -> Self {
        Self::from_config(&CopyConfig::default())
    }

    pub fn from_config(config: &CopyConfig) -> Self {
        let mut legacy = LegacyBackend::new().with_action(config.action);
        if let Some(id) = &config.container_id {
            legacy = legacy.with_container(id.clone());
        }

        let mut tiers: Vec<Box<dyn ClipboardBackend>> = vec![Box::new(legacy)];
        if config.fallback {
            tiers.push(Box::new(ModernBackend::new()));
        }
        Self { tiers }
    }

    pub fn with_backends(tiers: Vec<Box<dyn ClipboardBackend>>) -> Self {
        Self { tiers }
    }

    pub async fn copy(&self, text: &str) -> Result<CopyOutcome, CopyError> {
        let mut last_error = None;

        for tier in &self.tiers {
            if !tier.is_available() {
                log::debug!("Clipboard tier {} unavailable, skipping", tier.name());
                continue;
            }

            match tier.attempt_copy(text).await {
                Ok(outcome) => {
                    log::debug!("Copied {} bytes via {}", text.len(), tier.name());
                    return Ok(outcome);
                }
                Err(e) => {
                    log::warn!("Clipboard tier {} failed: {}", tier.name(), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(CopyError::Unavailable))
    }
}

impl Default for ClipboardCopier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LegacyFailure, ModernFailure};
    use crate::event::{Action, CopyEvent};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(&'static str, String)>>>;

    /// Stands in for a browser tier and records what it was asked to copy
    struct FakeTier {
        name: &'static str,
        available: bool,
        fails_with: Option<CopyError>,
        calls: Calls,
    }

    impl FakeTier {
        fn legacy(calls: &Calls, succeeds: bool) -> Box<Self> {
            Box::new(Self {
                name: "legacy",
                available: true,
                fails_with: (!succeeds).then(|| {
                    CopyError::Legacy(LegacyFailure::new(Action::Copy, "", "no selection"))
                }),
                calls: calls.clone(),
            })
        }

        fn modern(calls: &Calls, available: bool, succeeds: bool) -> Box<Self> {
            Box::new(Self {
                name: "modern",
                available,
                fails_with: (!succeeds).then(|| {
                    CopyError::Modern(ModernFailure::new("NotAllowedError", "Write permission denied."))
                }),
                calls: calls.clone(),
            })
        }
    }

    #[async_trait(?Send)]
    impl ClipboardBackend for FakeTier {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        async fn attempt_copy(&self, text: &str) -> Result<CopyOutcome, CopyError> {
            self.calls.borrow_mut().push((self.name, text.to_string()));
            match &self.fails_with {
                Some(err) => Err(err.clone()),
                None if self.name == "legacy" => {
                    Ok(CopyOutcome::Legacy(CopyEvent::new(Action::Copy, text)))
                }
                None => Ok(CopyOutcome::Modern),
            }
        }
    }

    fn copier(tiers: Vec<Box<FakeTier>>) -> ClipboardCopier {
        ClipboardCopier::with_backends(
            tiers
                .into_iter()
                .map(|t| t as Box<dyn ClipboardBackend>)
                .collect(),
        )
    }

    #[test]
    fn test_legacy_success_resolves_with_event() {
        for text in ["hello world", "", "line one\nline two", "emoji 🎉 ok", "nul\u{0}adjacent"] {
            let calls = Calls::default();
            let copier = copier(vec![
                FakeTier::legacy(&calls, true),
                FakeTier::modern(&calls, true, true),
            ]);

            let outcome = block_on(copier.copy(text)).unwrap();
            assert_eq!(outcome, CopyOutcome::Legacy(CopyEvent::new(Action::Copy, text)));
            // Modern tier never touched
            assert_eq!(*calls.borrow(), vec![("legacy", text.to_string())]);
        }
    }

    #[test]
    fn test_falls_back_with_identical_text() {
        let calls = Calls::default();
        let copier = copier(vec![
            FakeTier::legacy(&calls, false),
            FakeTier::modern(&calls, true, true),
        ]);

        let text = "  tabs\tand\r\nnewlines 🎉 ";
        let outcome = block_on(copier.copy(text)).unwrap();
        assert_eq!(outcome, CopyOutcome::Modern);
        assert_eq!(outcome.event(), None);
        assert_eq!(
            *calls.borrow(),
            vec![("legacy", text.to_string()), ("modern", text.to_string())]
        );
    }

    #[test]
    fn test_legacy_error_when_modern_absent() {
        let calls = Calls::default();
        let copier = copier(vec![
            FakeTier::legacy(&calls, false),
            FakeTier::modern(&calls, false, true),
        ]);

        let err = block_on(copier.copy("hello world")).unwrap_err();
        assert_eq!(
            err,
            CopyError::Legacy(LegacyFailure::new(Action::Copy, "", "no selection"))
        );
        // Unavailable tier is probed, never attempted
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_modern_error_wins_over_legacy() {
        let calls = Calls::default();
        let copier = copier(vec![
            FakeTier::legacy(&calls, false),
            FakeTier::modern(&calls, true, false),
        ]);

        match block_on(copier.copy("secret")) {
            Err(CopyError::Modern(failure)) => assert!(failure.is_permission_denied()),
            other => panic!("expected modern failure, got {:?}", other),
        }
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_no_available_tier() {
        let calls = Calls::default();
        let copier = copier(vec![FakeTier::modern(&calls, false, true)]);

        assert_eq!(block_on(copier.copy("x")), Err(CopyError::Unavailable));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_fallback_disabled_by_config() {
        let config = CopyConfig {
            fallback: false,
            ..Default::default()
        };
        let copier = ClipboardCopier::from_config(&config);
        assert_eq!(copier.tiers.len(), 1);
        assert_eq!(copier.tiers[0].name(), "execCommand");

        let copier = ClipboardCopier::new();
        let names: Vec<_> = copier.tiers.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["execCommand", "navigator.clipboard"]);
    }
}
