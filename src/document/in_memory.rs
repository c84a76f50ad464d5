use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::Selector;
use crate::document::{Document, DragListener, SignalListener};
use crate::event::{DragEvent, DragEventKind, SignalEvent};

const BODY: usize = 0;

#[derive(Default)]
struct Node {
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    listeners: HashMap<DragEventKind, Vec<DragListener>>,
    signal_listeners: HashMap<String, Vec<SignalListener>>,
}

impl Node {
    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
        }
    }
}

struct Tree {
    nodes: Vec<Node>,
    document_listeners: HashMap<DragEventKind, Vec<DragListener>>,
}

impl Tree {
    fn find(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id.as_deref() == Some(id))
    }

    /// Node indices from `start` up to and including the body.
    fn path(&self, start: usize) -> Vec<usize> {
        let mut path = vec![start];
        let mut cur = start;
        while let Some(parent) = self.nodes[cur].parent {
            path.push(parent);
            cur = parent;
        }
        path
    }
}

/// Element tree living in memory (no rendering). Events bubble from the target
/// through its ancestors up to the body, then reach document listeners.
pub struct InMemoryDocument {
    tree: RefCell<Tree>,
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocument {
    /// Creates a document holding only an empty body.
    pub fn new() -> Self {
        Self {
            tree: RefCell::new(Tree {
                nodes: vec![Node::default()],
                document_listeners: HashMap::new(),
            }),
        }
    }

    /// Appends an element with `id` and a space separated `classes` string to
    /// `parent` (or the body). Returns false if the parent does not exist or
    /// the id is already taken.
    pub fn append_element(&self, parent: Option<&str>, id: &str, classes: &str) -> bool {
        let mut tree = self.tree.borrow_mut();
        if tree.find(id).is_some() {
            return false;
        }
        let parent_idx = match parent {
            Some(p) => match tree.find(p) {
                Some(idx) => idx,
                None => return false,
            },
            None => BODY,
        };

        let idx = tree.nodes.len();
        tree.nodes.push(Node {
            id: Some(id.to_string()),
            classes: classes.split_whitespace().map(str::to_string).collect(),
            parent: Some(parent_idx),
            ..Node::default()
        });
        tree.nodes[parent_idx].children.push(idx);
        true
    }

    /// Class list of the element with `id`, in insertion order.
    pub fn classes(&self, id: &str) -> Vec<String> {
        let tree = self.tree.borrow();
        tree.find(id).map(|idx| tree.nodes[idx].classes.clone()).unwrap_or_default()
    }

    /// Number of elements matching the selector.
    pub fn count(&self, selector: &Selector) -> usize {
        self.tree.borrow().nodes.iter().filter(|n| n.matches(selector)).count()
    }

    /// Ids of the body's direct children, in document order.
    pub fn body_children(&self) -> Vec<Option<String>> {
        let tree = self.tree.borrow();
        tree.nodes[BODY].children.iter().map(|&c| tree.nodes[c].id.clone()).collect()
    }

    /// Listens for a custom event on an element. Returns false if there is no such element.
    pub fn on_signal(&self, id: &str, name: &str, listener: impl Fn(&SignalEvent) + 'static) -> bool {
        let mut tree = self.tree.borrow_mut();
        let Some(idx) = tree.find(id) else {
            return false;
        };
        tree.nodes[idx]
            .signal_listeners
            .entry(name.to_string())
            .or_default()
            .push(Rc::new(listener));
        true
    }

    /// Fires a drag event at the element with `target` and lets it bubble.
    /// The returned event reports whether some listener prevented its default.
    pub fn dispatch(&self, target: &str, event: DragEvent) -> DragEvent {
        let event = if event.target.is_none() { event.with_target(target) } else { event };

        let listeners: Vec<DragListener> = {
            let tree = self.tree.borrow();
            let Some(idx) = tree.find(target) else {
                log::trace!("dispatch: no element '{}', {} dropped", target, event.kind);
                return event;
            };

            let mut listeners = Vec::new();
            for node in tree.path(idx) {
                if let Some(ls) = tree.nodes[node].listeners.get(&event.kind) {
                    listeners.extend(ls.iter().cloned());
                }
            }
            if let Some(ls) = tree.document_listeners.get(&event.kind) {
                listeners.extend(ls.iter().cloned());
            }
            listeners
        };

        for listener in listeners {
            listener(&event);
        }
        event
    }

    /// Shorthand for [`dispatch`](Self::dispatch) with an empty payload.
    pub fn fire(&self, target: &str, kind: DragEventKind) -> DragEvent {
        self.dispatch(target, DragEvent::new(kind))
    }

    /// Number of listeners bound on the document for `kind`.
    pub fn document_listener_count(&self, kind: DragEventKind) -> usize {
        self.tree.borrow().document_listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Fires an event at the document itself (outside any element).
    pub fn fire_on_document(&self, kind: DragEventKind) -> DragEvent {
        let event = DragEvent::new(kind);
        let listeners: Vec<DragListener> = self
            .tree
            .borrow()
            .document_listeners
            .get(&kind)
            .map(|ls| ls.to_vec())
            .unwrap_or_default();

        for listener in listeners {
            listener(&event);
        }
        event
    }
}

impl Document for InMemoryDocument {
    fn exists(&self, selector: &Selector) -> bool {
        self.tree.borrow().nodes.iter().any(|n| n.matches(selector))
    }

    fn add_class(&self, selector: &Selector, class: &str) {
        let mut tree = self.tree.borrow_mut();
        for node in tree.nodes.iter_mut().filter(|n| n.matches(selector)) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&self, selector: &Selector, class: &str) {
        let mut tree = self.tree.borrow_mut();
        // Collect first: removing a class may change which nodes a class selector matches.
        let matched: Vec<usize> = (0..tree.nodes.len()).filter(|&i| tree.nodes[i].matches(selector)).collect();
        for idx in matched {
            tree.nodes[idx].classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        let tree = self.tree.borrow();
        tree.find(id).is_some_and(|idx| tree.nodes[idx].classes.iter().any(|c| c == class))
    }

    fn prepend_to_body(&self, id: &str) {
        let mut tree = self.tree.borrow_mut();
        let idx = tree.nodes.len();
        tree.nodes.push(Node {
            id: Some(id.to_string()),
            parent: Some(BODY),
            ..Node::default()
        });
        tree.nodes[BODY].children.insert(0, idx);
    }

    fn on_document(&self, kind: DragEventKind, listener: DragListener) {
        self.tree.borrow_mut().document_listeners.entry(kind).or_default().push(listener);
    }

    fn on_element(&self, id: &str, kind: DragEventKind, listener: DragListener) -> bool {
        let mut tree = self.tree.borrow_mut();
        let Some(idx) = tree.find(id) else {
            return false;
        };
        tree.nodes[idx].listeners.entry(kind).or_default().push(listener);
        true
    }

    fn trigger(&self, id: &str, signal: &str, event: &DragEvent) {
        let listeners: Vec<SignalListener> = {
            let tree = self.tree.borrow();
            let Some(idx) = tree.find(id) else {
                return;
            };
            tree.path(idx)
                .into_iter()
                .filter_map(|node| tree.nodes[node].signal_listeners.get(signal))
                .flat_map(|ls| ls.iter().cloned())
                .collect()
        };

        if listeners.is_empty() {
            log::trace!("signal '{}' on '{}' has no listeners", signal, id);
            return;
        }

        let signal_event = SignalEvent {
            name: signal.to_string(),
            detail: event.clone(),
        };
        for listener in listeners {
            listener(&signal_event);
        }
    }
}
