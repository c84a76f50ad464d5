use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::Selector;
use crate::document::{Document, DragListener};
use crate::event::{DragEvent, DragEventKind};

/// The browser document, reached through `web-sys`.
///
/// Listeners are leaked into the page (`Closure::forget`): they live as long
/// as the page, like the bindings of a server-rendered widget.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if running in one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn select(&self, selector: &Selector) -> Vec<Element> {
        match selector {
            Selector::Id(id) => self.document.get_element_by_id(id).into_iter().collect(),
            Selector::Class(class) => {
                let list = self.document.get_elements_by_class_name(class);
                (0..list.length()).filter_map(|i| list.item(i)).collect()
            }
        }
    }

    fn listen(target: &web_sys::EventTarget, kind: DragEventKind, listener: DragListener) {
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
            listener(&DragEvent::from_native(kind, e));
        });
        if let Err(e) = target.add_event_listener_with_callback(kind.as_str(), cb.as_ref().unchecked_ref()) {
            log::error!("cannot add {} listener: {:?}", kind, e);
        }
        cb.forget();
    }
}

impl Document for WebDocument {
    fn exists(&self, selector: &Selector) -> bool {
        !self.select(selector).is_empty()
    }

    fn add_class(&self, selector: &Selector, class: &str) {
        for el in self.select(selector) {
            if let Err(e) = el.class_list().add_1(class) {
                log::warn!("cannot add class '{}' to {}: {:?}", class, selector, e);
            }
        }
    }

    fn remove_class(&self, selector: &Selector, class: &str) {
        for el in self.select(selector) {
            if let Err(e) = el.class_list().remove_1(class) {
                log::warn!("cannot remove class '{}' from {}: {:?}", class, selector, e);
            }
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn prepend_to_body(&self, id: &str) {
        let Some(body) = self.document.body() else {
            log::error!("document has no body, cannot insert #{}", id);
            return;
        };
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("cannot create #{}: {:?}", id, e);
                return;
            }
        };
        el.set_id(id);
        if let Err(e) = body.prepend_with_node_1(&el) {
            log::error!("cannot insert #{}: {:?}", id, e);
        }
    }

    fn on_document(&self, kind: DragEventKind, listener: DragListener) {
        Self::listen(&self.document, kind, listener);
    }

    fn on_element(&self, id: &str, kind: DragEventKind, listener: DragListener) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                Self::listen(&el, kind, listener);
                true
            }
            None => false,
        }
    }

    fn trigger(&self, id: &str, signal: &str, event: &DragEvent) {
        let Some(el) = self.document.get_element_by_id(id) else {
            return;
        };

        let init = web_sys::CustomEventInit::new();
        init.set_bubbles(true);
        let detail = event.native().map(|e| JsValue::from(e.clone())).unwrap_or(JsValue::NULL);
        init.set_detail(&detail);

        match web_sys::CustomEvent::new_with_event_init_dict(signal, &init) {
            Ok(custom) => {
                if let Err(e) = el.dispatch_event(&custom) {
                    log::warn!("signal '{}' on '{}' failed: {:?}", signal, id, e);
                }
            }
            Err(e) => log::warn!("cannot create signal '{}': {:?}", signal, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::page::PageContext;

    // Browser imports cannot be called off wasm, so these only pin the
    // signatures the page and the JS exports rely on.
    #[test]
    fn web_document_backs_a_page() {
        let _: fn(web_sys::Document) -> WebDocument = WebDocument::new;
        let _: fn() -> Option<WebDocument> = WebDocument::from_window;
        let _ = |doc: WebDocument| PageContext::new(Rc::new(doc));
    }

    #[test]
    fn js_exports_keep_their_signatures() {
        let _: fn(&str) -> Result<(), wasm_bindgen::JsError> = crate::ffi::configure_page;
        let _: fn(&str, &str) -> Result<(), wasm_bindgen::JsError> = crate::ffi::initialize_dropzone;
    }
}
