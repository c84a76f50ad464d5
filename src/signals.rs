use crate::document::Document;
use crate::event::DragEvent;

/// Dispatches one custom event per signal name on the element `id`, in list
/// order, each carrying `event`. Names nobody listens to are silently skipped
/// by the document. Returns the number of dispatches.
pub fn trigger_signals(doc: &dyn Document, id: &str, signals: &[String], event: &DragEvent) -> usize {
    for signal in signals {
        log::trace!("triggering signal '{}' on '{}'", signal, id);
        doc.trigger(id, signal, event);
    }
    signals.len()
}
