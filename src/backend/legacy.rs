//! Tier one: `execCommand` through a transient trigger element

use super::ClipboardBackend;
use crate::binding::{BindingOptions, ClipboardBinding};
use crate::dom::{self, Transient};
use crate::error::{CopyError, LegacyFailure};
use crate::event::{Action, CopyEvent, CopyOutcome};
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlElement;

type Settled = Rc<RefCell<Option<Result<CopyEvent, LegacyFailure>>>>;

/// Copies by binding a hidden `<button>` and clicking it.
///
/// The button lives in the body only for the duration of the click and the
/// hidden textarea lives in the container; the binding is destroyed before
/// the result is returned.
#[derive(Debug, Clone, Default)]
pub struct LegacyBackend {
    action: Action,
    container_id: Option<String>,
}

impl LegacyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Mount transient nodes under the element with this id instead of the body
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    fn copy_now(&self, text: &str) -> Result<CopyEvent, LegacyFailure> {
        let action = self.action;
        let fail = |reason: String| LegacyFailure::new(action, text, reason);

        let document = dom::html_document().map_err(fail)?;
        let body = dom::resolve_container(&document, None).map_err(fail)?;
        let container =
            dom::resolve_container(&document, self.container_id.as_deref()).map_err(fail)?;
        let trigger: HtmlElement = dom::create(&document, "button").map_err(fail)?;

        let payload = text.to_owned();
        let options = BindingOptions::new(container.clone(), move || payload.clone())
            .action(move || action);
        let binding = ClipboardBinding::bind(&trigger, options).map_err(fail)?;

        let settled: Settled = Rc::default();
        let on_success = settled.clone();
        let on_error = settled.clone();
        binding
            .on_success(move |event| *on_success.borrow_mut() = Some(Ok(event)))
            .on_error(move |failure| *on_error.borrow_mut() = Some(Err(failure)));

        {
            let _mounted = Transient::attach(&body, trigger.clone().into()).map_err(fail)?;
            trigger.click();
        }

        binding.destroy();

        let result = settled.borrow_mut().take();
        result.unwrap_or_else(|| Err(fail("click produced no copy event".to_string())))
    }
}

#[async_trait(?Send)]
impl ClipboardBackend for LegacyBackend {
    fn name(&self) -> &'static str {
        "execCommand"
    }

    // Always attempted; an unsupported command shows up as an error event
    fn is_available(&self) -> bool {
        true
    }

    async fn attempt_copy(&self, text: &str) -> Result<CopyOutcome, CopyError> {
        if !ClipboardBinding::is_supported(self.action) {
            log::debug!("execCommand('{}') not reported as supported, trying anyway", self.action);
        }

        self.copy_now(text)
            .map(CopyOutcome::Legacy)
            .map_err(CopyError::Legacy)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body() -> HtmlElement {
        dom::html_document().unwrap().body().unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_body_unchanged_after_copy() {
        let before = body().child_element_count();

        for text in ["hello world", "", "emoji 🎉\nline"] {
            // Headless runs may refuse execCommand; cleanup must hold either way
            let result = LegacyBackend::new().attempt_copy(text).await;
            if let Ok(outcome) = &result {
                assert_eq!(outcome.event().map(|e| e.text.as_str()), Some(text));
            }
            assert_eq!(body().child_element_count(), before);
        }
    }

    #[wasm_bindgen_test]
    async fn test_container_and_body_unchanged_after_copy() {
        let document = dom::html_document().unwrap();
        let container: HtmlElement = dom::create(&document, "div").unwrap();
        container.set_id("webclip-test-container");
        body().append_child(&container).unwrap();
        let before = body().child_element_count();

        let backend = LegacyBackend::new().with_container("webclip-test-container");
        let _ = backend.attempt_copy("inside container").await;

        assert_eq!(container.child_element_count(), 0);
        assert_eq!(body().child_element_count(), before);
        container.remove();
    }

    #[wasm_bindgen_test]
    async fn test_missing_container_fails_without_leaking() {
        let before = body().child_element_count();

        let err = LegacyBackend::new()
            .with_container("webclip-no-such-element")
            .attempt_copy("x")
            .await
            .unwrap_err();

        match err {
            CopyError::Legacy(failure) => {
                assert_eq!(failure.text, "x");
                assert!(failure.reason.contains("webclip-no-such-element"));
            }
            other => panic!("expected legacy failure, got {:?}", other),
        }
        assert_eq!(body().child_element_count(), before);
        let leftover = dom::html_document()
            .unwrap()
            .query_selector("textarea[readonly]")
            .unwrap();
        assert!(leftover.is_none());
    }
}
