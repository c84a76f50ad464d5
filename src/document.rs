//! Page document access.
//!
//! The dropzone behavior never touches a DOM directly. Everything it needs
//! from the hosting page goes through the object-safe [`Document`] trait:
//! selector based class manipulation, inserting the overlay element, binding
//! drag listeners and dispatching custom events.
//!
//! # Available backends
//!
//! - [`InMemoryDocument`] — a small element tree with event bubbling. Used by
//!   tests, the demo and any host that simulates a page.
//! - `WebDocument` (feature `web`) — the browser's `window.document` through `web-sys`.

use crate::config::Selector;
use crate::event::{DragEvent, DragEventKind, SignalEvent};
use std::rc::Rc;

/// In-memory document implementation.
pub mod in_memory;

/// Browser document implementation.
#[cfg(feature = "web")]
pub mod web;

pub use in_memory::InMemoryDocument;
#[cfg(feature = "web")]
pub use web::WebDocument;

/// Listener for drag-family events.
pub type DragListener = Rc<dyn Fn(&DragEvent)>;

/// Listener for custom signal events.
pub type SignalListener = Rc<dyn Fn(&SignalEvent)>;

/// Object-safe view on the hosting page (jQuery-like: selector operations apply to every match).
pub trait Document {
    /// Returns true when at least one element matches the selector.
    fn exists(&self, selector: &Selector) -> bool;

    /// Adds a single class name to every element matching the selector.
    fn add_class(&self, selector: &Selector, class: &str);

    /// Removes a single class name from every element matching the selector.
    fn remove_class(&self, selector: &Selector, class: &str);

    /// Returns true when the element with the given id carries the class.
    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Inserts an empty element with the given id as the body's first child.
    fn prepend_to_body(&self, id: &str);

    /// Registers a listener on the document itself. Receives every bubbling event.
    fn on_document(&self, kind: DragEventKind, listener: DragListener);

    /// Registers a listener on the element with the given id. Returns false if there is no such element.
    fn on_element(&self, id: &str, kind: DragEventKind, listener: DragListener) -> bool;

    /// Dispatches a custom event named `signal` on the element, carrying `event`.
    fn trigger(&self, id: &str, signal: &str, event: &DragEvent);
}
