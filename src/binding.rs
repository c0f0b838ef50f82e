//! Legacy clipboard binding
//!
//! Binds a trigger element so that clicking it copies text produced by a
//! callback. The copy itself goes through a hidden read-only `<textarea>`:
//! its contents are selected and `document.execCommand` runs against that
//! selection. Results are reported through `success` / `error` handlers.
//!
//! Following the listener cleanup rules used for WebSocket callbacks:
//! - No Closure::forget() - the click closure is owned by the binding
//! - destroy() (or drop) unregisters the listener before the closure is freed

use crate::dom::{self, Transient};
use crate::error::{describe_js_error, LegacyFailure};
use crate::event::{Action, CopyEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlDocument, HtmlElement, HtmlTextAreaElement};

type TextFn = Box<dyn Fn() -> String>;
type ActionFn = Box<dyn Fn() -> Action>;
type SuccessHandler = Box<dyn FnMut(CopyEvent)>;
type ErrorHandler = Box<dyn FnMut(LegacyFailure)>;

/// What to copy, how, and where the hidden textarea is mounted
pub struct BindingOptions {
    text: TextFn,
    action: ActionFn,
    container: HtmlElement,
}

impl BindingOptions {
    pub fn new(container: HtmlElement, text: impl Fn() -> String + 'static) -> Self {
        Self {
            text: Box::new(text),
            action: Box::new(Action::default),
            container,
        }
    }

    pub fn action(mut self, action: impl Fn() -> Action + 'static) -> Self {
        self.action = Box::new(action);
        self
    }
}

#[derive(Default)]
struct Handlers {
    success: Vec<SuccessHandler>,
    error: Vec<ErrorHandler>,
}

/// Run the matching handlers. Handlers are taken out of the cell while they
/// run, so one may register further handlers on the same binding.
fn emit(cell: &RefCell<Handlers>, result: Result<CopyEvent, LegacyFailure>) {
    let mut running = std::mem::take(&mut *cell.borrow_mut());
    match result {
        Ok(event) => {
            for handler in running.success.iter_mut() {
                handler(event.clone());
            }
        }
        Err(failure) => {
            for handler in running.error.iter_mut() {
                handler(failure.clone());
            }
        }
    }

    let mut handlers = cell.borrow_mut();
    let added = std::mem::replace(&mut *handlers, running);
    handlers.success.extend(added.success);
    handlers.error.extend(added.error);
}

pub struct ClipboardBinding {
    trigger: HtmlElement,
    handlers: Rc<RefCell<Handlers>>,
    listener: Option<Closure<dyn FnMut(Event)>>,
}

impl ClipboardBinding {
    /// Listen for clicks on `trigger` and copy on each one
    pub fn bind(trigger: &HtmlElement, options: BindingOptions) -> Result<Self, String> {
        let document = dom::html_document()?;
        let handlers = Rc::new(RefCell::new(Handlers::default()));

        let handlers_for_click = handlers.clone();
        let listener = Closure::wrap(Box::new(move |_: Event| {
            let action = (options.action)();
            let text = (options.text)();

            let result = match fake_copy(&document, &options.container, &text, action) {
                Ok(true) => Ok(CopyEvent::new(action, text)),
                Ok(false) => Err(LegacyFailure::new(action, text, "execCommand returned false")),
                Err(reason) => Err(LegacyFailure::new(action, text, reason)),
            };

            emit(&handlers_for_click, result);
        }) as Box<dyn FnMut(Event)>);

        trigger
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| describe_js_error(&e))?;

        Ok(Self {
            trigger: trigger.clone(),
            handlers,
            listener: Some(listener),
        })
    }

    pub fn on_success(&self, handler: impl FnMut(CopyEvent) + 'static) -> &Self {
        self.handlers.borrow_mut().success.push(Box::new(handler));
        self
    }

    pub fn on_error(&self, handler: impl FnMut(LegacyFailure) + 'static) -> &Self {
        self.handlers.borrow_mut().error.push(Box::new(handler));
        self
    }

    /// Unregister the click listener and drop all handlers
    pub fn destroy(mut self) {
        self.unbind();
    }

    fn unbind(&mut self) {
        if let Some(listener) = self.listener.take() {
            if let Err(e) = self
                .trigger
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove clipboard listener: {}", describe_js_error(&e));
            }
            let mut handlers = self.handlers.borrow_mut();
            handlers.success.clear();
            handlers.error.clear();
        }
    }

    /// Whether the browser claims to support `execCommand(action)`
    pub fn is_supported(action: Action) -> bool {
        dom::html_document()
            .ok()
            .map(|document| document.query_command_supported(action.as_str()))
            .unwrap_or(false)
    }
}

impl Drop for ClipboardBinding {
    fn drop(&mut self) {
        self.unbind();
    }
}

/// Select `text` in a hidden textarea and run the clipboard command on it.
/// The textarea is removed before this returns.
fn fake_copy(
    document: &HtmlDocument,
    container: &HtmlElement,
    text: &str,
    action: Action,
) -> Result<bool, String> {
    let fake: HtmlTextAreaElement = dom::create(document, "textarea")?;
    style_offscreen(document, &fake)?;
    fake.set_value(text);

    let _mounted = Transient::attach(container, fake.clone().into())?;

    fake.select();
    fake.set_selection_range(0, dom::utf16_len(text))
        .map_err(|e| describe_js_error(&e))?;

    document
        .exec_command(action.as_str())
        .map_err(|e| describe_js_error(&e))
}

/// Park the element off-screen on the side opposite the text direction,
/// level with the current scroll position so the page does not jump
fn style_offscreen(document: &HtmlDocument, element: &HtmlElement) -> Result<(), String> {
    let dir = document
        .document_element()
        .and_then(|root| root.get_attribute("dir"));
    let top = web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0);

    let style = element.style();
    let side = offscreen_side(dir.as_deref());
    let top = format!("{}px", top);
    for (property, value) in [
        ("font-size", "12pt"),
        ("border", "0"),
        ("padding", "0"),
        ("margin", "0"),
        ("position", "absolute"),
        (side, "-9999px"),
        ("top", top.as_str()),
    ] {
        style
            .set_property(property, value)
            .map_err(|e| describe_js_error(&e))?;
    }

    element
        .set_attribute("readonly", "")
        .map_err(|e| describe_js_error(&e))
}

/// Edge the hidden textarea is pushed past, given the root `dir` attribute
fn offscreen_side(dir: Option<&str>) -> &'static str {
    match dir {
        Some(dir) if dir.trim().eq_ignore_ascii_case("rtl") => "right",
        _ => "left",
    }
}
