//! Drag events and the signal events emitted on drop.
//!
//! # Main Types
//!
//! - [`DragEventKind`]: The seven drag-family DOM event types.
//! - [`DataTransfer`]: What is being dragged, as far as the page can tell.
//! - [`DragEvent`]: A drag-family event delivered to a listener.
//! - [`SignalEvent`]: A named custom event carrying the drop event that caused it.

use std::cell::Cell;
use std::fmt::{Debug, Display};

/// Drag-family DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// Drag entered an element (`dragenter`)
    DragEnter,
    /// Drag started on a draggable source (`dragstart`)
    DragStart,
    /// Drag operation ended (`dragend`)
    DragEnd,
    /// Drag left an element (`dragleave`)
    DragLeave,
    /// Drag is moving over an element (`dragover`)
    DragOver,
    /// Source is being dragged (`drag`)
    Drag,
    /// Payload was dropped (`drop`)
    Drop,
}

impl DragEventKind {
    /// All drag-family kinds, in the order the document listener is registered.
    pub const ALL: [DragEventKind; 7] = [
        DragEventKind::DragEnter,
        DragEventKind::DragStart,
        DragEventKind::DragEnd,
        DragEventKind::DragLeave,
        DragEventKind::DragOver,
        DragEventKind::Drag,
        DragEventKind::Drop,
    ];

    /// DOM event type name
    pub fn as_str(&self) -> &'static str {
        match self {
            DragEventKind::DragEnter => "dragenter",
            DragEventKind::DragStart => "dragstart",
            DragEventKind::DragEnd => "dragend",
            DragEventKind::DragLeave => "dragleave",
            DragEventKind::DragOver => "dragover",
            DragEventKind::Drag => "drag",
            DragEventKind::Drop => "drop",
        }
    }

    pub fn from_name(name: &str) -> Option<DragEventKind> {
        DragEventKind::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl Display for DragEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of the dragged payload. Informational only, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    /// MIME types offered by the drag source
    pub types: Vec<String>,
    /// Names of the dragged files, if any
    pub files: Vec<String>,
}

impl DataTransfer {
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: vec!["Files".to_string()],
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// A drag-family event as seen by listeners.
#[derive(Clone)]
pub struct DragEvent {
    pub kind: DragEventKind,
    /// Id of the element the event was fired at, if it has one
    pub target: Option<String>,
    pub data: DataTransfer,
    default_prevented: Cell<bool>,
    #[cfg(feature = "web")]
    native: Option<web_sys::Event>,
}

impl DragEvent {
    pub fn new(kind: DragEventKind) -> Self {
        Self {
            kind,
            target: None,
            data: DataTransfer::default(),
            default_prevented: Cell::new(false),
            #[cfg(feature = "web")]
            native: None,
        }
    }

    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_data(mut self, data: DataTransfer) -> Self {
        self.data = data;
        self
    }

    /// Wraps a browser event so that `prevent_default` reaches the real DOM.
    #[cfg(feature = "web")]
    pub fn from_native(kind: DragEventKind, event: web_sys::Event) -> Self {
        use wasm_bindgen::JsCast;

        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.id())
            .filter(|id| !id.is_empty());

        let data = event
            .dyn_ref::<web_sys::DragEvent>()
            .and_then(|e| e.data_transfer())
            .map(|dt| {
                let types = dt.types().iter().filter_map(|v| v.as_string()).collect();
                let files = dt
                    .files()
                    .map(|list| {
                        (0..list.length())
                            .filter_map(|i| list.item(i))
                            .map(|f| f.name())
                            .collect()
                    })
                    .unwrap_or_default();
                DataTransfer { types, files }
            })
            .unwrap_or_default();

        Self {
            kind,
            target,
            data,
            default_prevented: Cell::new(event.default_prevented()),
            native: Some(event),
        }
    }

    #[cfg(feature = "web")]
    pub fn native(&self) -> Option<&web_sys::Event> {
        self.native.as_ref()
    }

    /// Cancels the browser's default action. Propagation is left untouched.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
        #[cfg(feature = "web")]
        if let Some(native) = &self.native {
            native.prevent_default();
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl Debug for DragEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragEvent")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("data", &self.data)
            .field("default_prevented", &self.default_prevented.get())
            .finish_non_exhaustive()
    }
}

impl PartialEq for DragEvent {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.target == other.target && self.data == other.data
    }
}

/// Custom event dispatched on a dropzone element for each registered signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalEvent {
    pub name: String,
    /// The drop event that triggered the signal
    pub detail: DragEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_roundtrip_through_lookup() {
        for kind in DragEventKind::ALL {
            assert_eq!(DragEventKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(DragEventKind::from_name("click"), None);
        assert_eq!(DragEventKind::DragOver.to_string(), "dragover");
    }

    #[test]
    fn prevent_default_is_shared_by_reference() {
        let ev = DragEvent::new(DragEventKind::Drop).with_target("drop1");
        assert!(!ev.default_prevented());

        let r = &ev;
        r.prevent_default();
        assert!(ev.default_prevented());
    }

    #[test]
    fn equality_ignores_default_prevented() {
        let a = DragEvent::new(DragEventKind::Drop).with_data(DataTransfer::with_files(["a.txt"]));
        let b = a.clone();
        b.prevent_default();
        assert_eq!(a, b);
        assert!(a.data.has_files());
    }

    #[test]
    fn debug_shows_kind_and_target() {
        let ev = DragEvent::new(DragEventKind::DragEnter).with_target("zone");
        let s = format!("{ev:?}");
        assert!(s.contains("DragEnter"));
        assert!(s.contains("zone"));
    }
}
