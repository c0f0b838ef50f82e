//! DOM helpers and the transient element guard

use crate::error::{describe_js_error, CopyError};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement};

/// Something a node can be attached to and detached from
pub trait Host {
    type Node;
    type Error;

    fn attach(&self, node: &Self::Node) -> Result<(), Self::Error>;
    fn detach(&self, node: &Self::Node);
}

impl Host for HtmlElement {
    type Node = Element;
    type Error = String;

    fn attach(&self, node: &Element) -> Result<(), String> {
        self.append_child(node)
            .map(|_| ())
            .map_err(|e| describe_js_error(&e))
    }

    fn detach(&self, node: &Element) {
        if node.parent_node().is_some() {
            node.remove();
        }
    }
}

/// A node that stays attached to its host only while the guard lives.
///
/// Dropping the guard detaches the node, so early returns and error paths
/// clean up the same way as the success path.
pub struct Transient<'h, H: Host> {
    host: &'h H,
    node: H::Node,
}

impl<'h, H: Host> Transient<'h, H> {
    pub fn attach(host: &'h H, node: H::Node) -> Result<Self, H::Error> {
        host.attach(&node)?;
        Ok(Self { host, node })
    }

    pub fn node(&self) -> &H::Node {
        &self.node
    }
}

impl<H: Host> Drop for Transient<'_, H> {
    fn drop(&mut self) {
        self.host.detach(&self.node);
    }
}

/// The current document as an `HtmlDocument` (needed for `execCommand`)
pub fn html_document() -> Result<HtmlDocument, String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    document
        .dyn_into::<HtmlDocument>()
        .map_err(|_| "Document is not an HTML document".to_string())
}

/// Element hosting transient nodes: the element with `id`, or the body
pub fn resolve_container(document: &HtmlDocument, id: Option<&str>) -> Result<HtmlElement, String> {
    match id {
        Some(id) => document
            .get_element_by_id(id)
            .ok_or_else(|| format!("No element with id '{}'", id))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| format!("Element '{}' is not an HTML element", id)),
        None => document.body().ok_or_else(|| "Document has no body".to_string()),
    }
}

/// Create an element by tag name as an `HtmlElement` subtype
pub fn create<T: JsCast>(document: &HtmlDocument, tag: &str) -> Result<T, String> {
    document
        .create_element(tag)
        .map_err(|e| describe_js_error(&e))?
        .dyn_into::<T>()
        .map_err(|_| format!("<{}> has unexpected element type", tag))
}

/// Length of `text` in UTF-16 code units, the unit of DOM selection offsets
pub fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

/// Decode a JS string's code units, refusing unpaired surrogates instead of
/// replacing them
pub fn text_from_utf16(units: &[u16]) -> Result<String, CopyError> {
    String::from_utf16(units).map_err(|_| CopyError::InvalidText)
}
