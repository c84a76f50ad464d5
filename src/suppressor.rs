use std::cell::Cell;
use std::rc::Rc;

use crate::document::Document;
use crate::event::{DragEvent, DragEventKind};

/// Document-wide listener cancelling the browser's default drag/drop action
/// (browsers open or navigate to dropped files otherwise). Only the default
/// action is prevented, events still propagate to zone handlers.
#[derive(Debug, Default)]
pub struct DragSuppressor {
    registered: Cell<bool>,
}

impl DragSuppressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the listener for every drag-family event. Returns false when
    /// this suppressor was already registered (nothing is added then).
    pub fn register(&self, doc: &dyn Document) -> bool {
        if self.registered.get() {
            log::trace!("drag suppressor already registered");
            return false;
        }

        let listener = Rc::new(|e: &DragEvent| e.prevent_default());
        for kind in DragEventKind::ALL {
            doc.on_document(kind, listener.clone());
        }
        self.registered.set(true);
        log::debug!("drag suppressor registered for {} event types", DragEventKind::ALL.len());
        true
    }

    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InMemoryDocument;

    #[test]
    fn prevents_default_for_all_drag_kinds() {
        let doc = InMemoryDocument::new();
        doc.append_element(None, "zone", "il-dropzone");
        let suppressor = DragSuppressor::new();
        assert!(suppressor.register(&doc));

        for kind in DragEventKind::ALL {
            assert!(doc.fire("zone", kind).default_prevented(), "{kind} not prevented");
            assert!(doc.fire_on_document(kind).default_prevented());
        }
    }

    #[test]
    fn registration_is_idempotent() {
        let doc = InMemoryDocument::new();
        doc.append_element(None, "zone", "");
        let suppressor = DragSuppressor::new();
        assert!(suppressor.register(&doc));
        assert!(!suppressor.register(&doc));
        assert!(suppressor.is_registered());

        for kind in DragEventKind::ALL {
            assert_eq!(doc.document_listener_count(kind), 1);
        }
    }

    #[test]
    fn does_not_stop_propagation_to_element_listeners() {
        let doc = InMemoryDocument::new();
        doc.append_element(None, "zone", "");
        DragSuppressor::new().register(&doc);

        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        doc.on_element("zone", DragEventKind::Drop, Rc::new(move |_: &DragEvent| h.set(h.get() + 1)));

        let ev = doc.fire("zone", DragEventKind::Drop);
        assert_eq!(hits.get(), 1);
        assert!(ev.default_prevented());
    }
}
