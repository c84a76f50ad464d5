//! Per-dropzone drag handling.
//!
//! A bound zone listens for `dragenter`, `dragleave` and `drop` on its element.
//! Raw enter/leave events also bubble up from the element's descendants, so
//! they are first run through a depth counter: the zone sees one logical
//! `enter` when a drag first reaches it and one logical `leave` when the drag
//! has left it and all of its children. Crossing from the zone into a child
//! (or back) therefore never ends the hover.
//!
//! ```text
//!   Idle --enter--> HoverActive --leave--> Idle
//!                   HoverActive --drop---> Idle  (signals emitted)
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{class_tokens, PageConfig, Selector};
use crate::document::Document;
use crate::event::{DragEvent, DragEventKind};
use crate::highlight::HighlightController;
use crate::options::{DropzoneSettings, DropzoneType};
use crate::signals::trigger_signals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneState {
    #[default]
    Idle,
    HoverActive,
}

/// What a zone has to do after an event was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Entered,
    Left,
    Dropped,
}

/// Hover state plus the enter/leave depth counter of one zone.
#[derive(Debug, Default)]
pub struct ZoneMachine {
    state: ZoneState,
    depth: u32,
}

impl ZoneMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ZoneState {
        self.state
    }

    /// Feeds one raw event seen on the zone element (or bubbled up from a descendant).
    pub fn handle(&mut self, kind: DragEventKind) -> Option<Transition> {
        match kind {
            DragEventKind::DragEnter => {
                self.depth += 1;
                if self.depth == 1 && self.state == ZoneState::Idle {
                    self.state = ZoneState::HoverActive;
                    return Some(Transition::Entered);
                }
                None
            }
            DragEventKind::DragLeave => {
                // a leave without a tracked enter is noise
                if self.depth == 0 {
                    return None;
                }
                self.depth -= 1;
                if self.depth == 0 && self.state == ZoneState::HoverActive {
                    self.state = ZoneState::Idle;
                    return Some(Transition::Left);
                }
                None
            }
            DragEventKind::Drop => {
                self.depth = 0;
                self.state = ZoneState::Idle;
                Some(Transition::Dropped)
            }
            _ => None,
        }
    }
}

/// Shared page services a zone works with.
#[derive(Clone)]
pub struct ZoneContext {
    pub doc: Rc<dyn Document>,
    pub highlight: Rc<HighlightController>,
    pub config: Rc<PageConfig>,
}

/// A dropzone bound to its element.
pub struct BoundZone {
    settings: DropzoneSettings,
    selector: Selector,
    machine: RefCell<ZoneMachine>,
    ctx: ZoneContext,
}

impl BoundZone {
    pub fn settings(&self) -> &DropzoneSettings {
        &self.settings
    }

    pub fn state(&self) -> ZoneState {
        self.machine.borrow().state()
    }

    /// Runs the state machine for `event` and applies the resulting transition.
    /// The machine is released before any effect runs, so signal listeners may
    /// fire further events at this zone.
    pub fn handle(&self, event: &DragEvent) {
        let transition = self.machine.borrow_mut().handle(event.kind);
        let Some(transition) = transition else {
            log::trace!("zone '{}': {} absorbed", self.settings.id, event.kind);
            return;
        };
        log::debug!("zone '{}': {:?}", self.settings.id, transition);

        match transition {
            Transition::Entered => {
                self.set_hover(true);
                self.ctx.highlight.enable_highlighting(self.settings.darkened_background);
            }
            Transition::Left => {
                self.set_hover(false);
                self.ctx.highlight.disable_highlighting();
            }
            Transition::Dropped => {
                self.set_hover(false);
                self.ctx.highlight.disable_highlighting();
                trigger_signals(self.ctx.doc.as_ref(), &self.settings.id, &self.settings.registered_signals, event);
            }
        }
    }

    /// Ends a hover still in progress when the zone is replaced by a new binding.
    pub fn release(&self) {
        let was_hovering = std::mem::take(&mut *self.machine.borrow_mut()).state() == ZoneState::HoverActive;
        if was_hovering {
            log::debug!("zone '{}': released while hovering", self.settings.id);
            self.set_hover(false);
            self.ctx.highlight.disable_highlighting();
        }
    }

    fn set_hover(&self, on: bool) {
        for class in class_tokens(&self.ctx.config.drag_hover_class) {
            if on {
                self.ctx.doc.add_class(&self.selector, class);
            } else {
                self.ctx.doc.remove_class(&self.selector, class);
            }
        }
    }
}

/// Initialization behavior of one [`DropzoneType`].
pub trait ZoneInitializer {
    /// Sets the zone up. Returns the bound zone, if the variant binds one.
    /// A missing element binds nothing.
    fn initialize(&self, ctx: &ZoneContext, settings: DropzoneSettings) -> Option<Rc<BoundZone>>;
}

pub struct StandardInitializer;

impl ZoneInitializer for StandardInitializer {
    fn initialize(&self, ctx: &ZoneContext, settings: DropzoneSettings) -> Option<Rc<BoundZone>> {
        let zone = Rc::new(BoundZone {
            selector: Selector::Id(settings.id.clone()),
            settings,
            machine: RefCell::new(ZoneMachine::new()),
            ctx: ctx.clone(),
        });

        for kind in [DragEventKind::DragEnter, DragEventKind::DragLeave, DragEventKind::Drop] {
            // Weak: the document owns the listener, the zone must not be kept alive through it.
            let weak = Rc::downgrade(&zone);
            let bound = ctx.doc.on_element(
                &zone.settings.id,
                kind,
                Rc::new(move |e: &DragEvent| {
                    if let Some(zone) = weak.upgrade() {
                        zone.handle(e);
                    }
                }),
            );
            if !bound {
                log::warn!("zone '{}': no such element, {} not bound", zone.settings.id, kind);
                return None;
            }
        }
        Some(zone)
    }
}

/// Reserved variant, accepted without doing anything.
pub struct WrapperInitializer;

impl ZoneInitializer for WrapperInitializer {
    fn initialize(&self, _ctx: &ZoneContext, settings: DropzoneSettings) -> Option<Rc<BoundZone>> {
        log::debug!("wrapper dropzone '{}' accepted, nothing to bind", settings.id);
        None
    }
}

pub fn initializer_for(kind: DropzoneType) -> &'static dyn ZoneInitializer {
    match kind {
        DropzoneType::Standard => &StandardInitializer,
        DropzoneType::Wrapper => &WrapperInitializer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InMemoryDocument;
    use crate::event::DragEventKind::{DragEnter, DragLeave, DragOver, Drop};

    #[test]
    fn machine_enter_leave() {
        let mut m = ZoneMachine::new();
        assert_eq!(m.handle(DragEnter), Some(Transition::Entered));
        assert_eq!(m.state(), ZoneState::HoverActive);
        assert_eq!(m.handle(DragOver), None);
        assert_eq!(m.handle(DragLeave), Some(Transition::Left));
        assert_eq!(m.state(), ZoneState::Idle);
    }

    #[test]
    fn machine_child_crossing_keeps_hover() {
        let mut m = ZoneMachine::new();
        m.handle(DragEnter);
        // browser order when moving into a child: enter(child) then leave(zone)
        assert_eq!(m.handle(DragEnter), None);
        assert_eq!(m.handle(DragLeave), None);
        assert_eq!(m.state(), ZoneState::HoverActive);
        // back out of the child, then out of the zone
        assert_eq!(m.handle(DragEnter), None);
        assert_eq!(m.handle(DragLeave), None);
        assert_eq!(m.handle(DragLeave), Some(Transition::Left));
    }

    #[test]
    fn machine_drop_resets_depth() {
        let mut m = ZoneMachine::new();
        m.handle(DragEnter);
        m.handle(DragEnter);
        assert_eq!(m.handle(Drop), Some(Transition::Dropped));
        assert_eq!(m.state(), ZoneState::Idle);
        // a fresh gesture starts from zero again
        assert_eq!(m.handle(DragEnter), Some(Transition::Entered));
    }

    #[test]
    fn machine_ignores_stray_leave() {
        let mut m = ZoneMachine::new();
        assert_eq!(m.handle(DragLeave), None);
        assert_eq!(m.handle(DragEnter), Some(Transition::Entered));
    }

    #[test]
    fn machine_drop_while_idle_still_drops() {
        let mut m = ZoneMachine::new();
        assert_eq!(m.handle(Drop), Some(Transition::Dropped));
        assert_eq!(m.state(), ZoneState::Idle);
    }

    fn ctx(doc: &Rc<InMemoryDocument>) -> ZoneContext {
        let config = Rc::new(PageConfig::default());
        ZoneContext {
            doc: doc.clone(),
            highlight: Rc::new(HighlightController::new(doc.clone(), config.clone())),
            config,
        }
    }

    fn settings(id: &str) -> DropzoneSettings {
        DropzoneSettings {
            id: id.to_string(),
            darkened_background: false,
            registered_signals: vec!["fileDropped".to_string()],
        }
    }

    #[test]
    fn standard_initializer_binds_listeners() {
        let doc = Rc::new(InMemoryDocument::new());
        doc.append_element(None, "drop1", "il-dropzone");
        doc.append_element(None, "drop2", "il-dropzone");
        let zone = initializer_for(DropzoneType::Standard)
            .initialize(&ctx(&doc), settings("drop1"))
            .expect("standard zone binds");

        doc.fire("drop1", DragEnter);
        assert_eq!(zone.state(), ZoneState::HoverActive);
        assert!(doc.has_class("drop1", "drag-hover"));
        assert!(!doc.has_class("drop2", "drag-hover"), "hover is per zone");
        assert!(doc.has_class("drop2", "default-highlight"), "highlight is page wide");

        doc.fire("drop1", DragLeave);
        assert_eq!(zone.state(), ZoneState::Idle);
        assert_eq!(doc.classes("drop1"), vec!["il-dropzone"]);
        assert_eq!(doc.classes("drop2"), vec!["il-dropzone"]);
    }

    #[test]
    fn standard_initializer_binds_nothing_without_element() {
        let doc = Rc::new(InMemoryDocument::new());
        assert!(StandardInitializer.initialize(&ctx(&doc), settings("ghost")).is_none());
    }

    #[test]
    fn wrapper_initializer_is_inert() {
        let doc = Rc::new(InMemoryDocument::new());
        doc.append_element(None, "w", "il-dropzone");
        assert!(initializer_for(DropzoneType::Wrapper).initialize(&ctx(&doc), settings("w")).is_none());

        doc.fire("w", DragEnter);
        assert_eq!(doc.classes("w"), vec!["il-dropzone"]);
    }

    #[test]
    fn listeners_do_not_keep_zone_alive() {
        let doc = Rc::new(InMemoryDocument::new());
        doc.append_element(None, "drop1", "il-dropzone");
        let zone = StandardInitializer.initialize(&ctx(&doc), settings("drop1")).unwrap();
        drop(zone);

        doc.fire("drop1", DragEnter);
        assert!(!doc.has_class("drop1", "drag-hover"));
    }

    #[test]
    fn release_clears_an_active_hover() {
        let doc = Rc::new(InMemoryDocument::new());
        doc.append_element(None, "drop1", "il-dropzone");
        let zone = StandardInitializer.initialize(&ctx(&doc), settings("drop1")).unwrap();

        doc.fire("drop1", DragEnter);
        zone.release();
        assert_eq!(zone.state(), ZoneState::Idle);
        assert_eq!(doc.classes("drop1"), vec!["il-dropzone"]);

        // releasing an idle zone changes nothing
        zone.release();
        assert_eq!(doc.classes("drop1"), vec!["il-dropzone"]);
    }

    #[test]
    fn signal_listener_may_fire_into_the_zone() {
        let doc = Rc::new(InMemoryDocument::new());
        doc.append_element(None, "drop1", "il-dropzone");
        let zone = StandardInitializer.initialize(&ctx(&doc), settings("drop1")).unwrap();

        let d = doc.clone();
        doc.on_signal("drop1", "fileDropped", move |_| {
            d.fire("drop1", DragEnter);
        });

        doc.fire("drop1", DragEnter);
        doc.fire("drop1", Drop);
        assert_eq!(zone.state(), ZoneState::HoverActive);
    }
}
