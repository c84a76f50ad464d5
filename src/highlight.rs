//! Page-wide highlighting of dropzones.
//!
//! Dragging over any dropzone highlights every dropzone on the page as a drop
//! candidate. Two styles exist and only one is applied at a time:
//!
//! - **default**: every dropzone gets the default highlight class.
//! - **darkened**: the shared overlay darkens the page and every dropzone gets
//!   the darkened highlight class.
//!
//! The [`HighlightController`] is the only writer of the overlay element and
//! of the darkened-background flag.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::{class_tokens, PageConfig};
use crate::document::Document;

pub struct HighlightController {
    doc: Rc<dyn Document>,
    config: Rc<PageConfig>,
    darkened_background: Cell<bool>,
}

impl HighlightController {
    pub fn new(doc: Rc<dyn Document>, config: Rc<PageConfig>) -> Self {
        Self {
            doc,
            config,
            darkened_background: Cell::new(false),
        }
    }

    /// Records whether the darkened background is available and creates the
    /// overlay element on first need. The last call wins for the flag; the
    /// overlay, once inserted, stays.
    pub fn configure_darkened_background(&self, enabled: bool) {
        self.darkened_background.set(enabled);
        if enabled && !self.doc.exists(&self.config.overlay) {
            self.doc.prepend_to_body(self.config.overlay_id());
            log::debug!("inserted darkened background overlay {}", self.config.overlay);
        }
    }

    pub fn darkened_background_available(&self) -> bool {
        self.darkened_background.get()
    }

    /// Highlights all dropzones. Does not touch the hover class of a single zone.
    pub fn enable_highlighting(&self, use_darkened: bool) {
        if use_darkened {
            for class in class_tokens(&self.config.darkened_background_class) {
                self.doc.add_class(&self.config.overlay, class);
            }
            self.add_to_dropzones(&self.config.darkened_highlight_class);
        } else {
            self.add_to_dropzones(&self.config.default_highlight_class);
        }
    }

    /// Removes every highlight, whichever style was active. Does not touch the hover class of a single zone.
    pub fn disable_highlighting(&self) {
        for class in class_tokens(&self.config.darkened_background_class) {
            self.doc.remove_class(&self.config.overlay, class);
        }
        for classes in [&self.config.darkened_highlight_class, &self.config.default_highlight_class] {
            for class in class_tokens(classes) {
                self.doc.remove_class(&self.config.dropzones, class);
            }
        }
    }

    fn add_to_dropzones(&self, classes: &str) {
        for class in class_tokens(classes) {
            self.doc.add_class(&self.config.dropzones, class);
        }
    }
}
