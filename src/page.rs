use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::document::Document;
use crate::errors::DropzoneError;
use crate::highlight::HighlightController;
use crate::options::{resolve, DropzoneOptions, DropzoneType};
use crate::suppressor::DragSuppressor;
use crate::zone::{initializer_for, BoundZone, ZoneContext, ZoneState};

/// Everything the dropzones of one page share: the document, the naming
/// vocabulary, the highlight controller (and with it the darkened-background
/// flag), the drag suppressor and the zones bound so far.
pub struct PageContext {
    ctx: ZoneContext,
    suppressor: DragSuppressor,
    zones: RefCell<BTreeMap<String, Rc<BoundZone>>>,
}

impl PageContext {
    /// Creates a page context using the default page configuration.
    pub fn new(doc: Rc<dyn Document>) -> Self {
        Self::with_config(doc, PageConfig::default())
    }

    pub fn with_config(doc: Rc<dyn Document>, config: PageConfig) -> Self {
        let config = Rc::new(config);
        let highlight = Rc::new(HighlightController::new(doc.clone(), config.clone()));
        Self {
            ctx: ZoneContext { doc, highlight, config },
            suppressor: DragSuppressor::new(),
            zones: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.ctx.config
    }

    pub fn highlight(&self) -> &HighlightController {
        &self.ctx.highlight
    }

    pub fn suppressor(&self) -> &DragSuppressor {
        &self.suppressor
    }

    /// Initializes the dropzone of type `identifier` with `options`.
    ///
    /// Everything is validated before the page is touched: a failing call
    /// leaves the document and the zones initialized earlier as they were.
    /// A `Standard` zone whose element is missing is accepted and binds nothing.
    pub fn initialize_dropzone(&self, identifier: &str, options: DropzoneOptions) -> Result<DropzoneType, DropzoneError> {
        let (kind, settings) = resolve(identifier, options, &self.ctx.config)?;

        self.suppressor.register(self.ctx.doc.as_ref());
        self.ctx.highlight.configure_darkened_background(settings.darkened_background);

        let id = settings.id.clone();
        log::debug!("initializing {} dropzone '{}'", kind, id);
        if let Some(zone) = initializer_for(kind).initialize(&self.ctx, settings) {
            let replaced = self.zones.borrow_mut().insert(id.clone(), zone);
            if let Some(old) = replaced {
                log::warn!("dropzone '{}' was already initialized, previous binding replaced", id);
                old.release();
            }
        }
        Ok(kind)
    }

    /// Same as [`initialize_dropzone`](Self::initialize_dropzone) with options given as JSON.
    pub fn initialize_dropzone_json(&self, identifier: &str, options: &str) -> Result<DropzoneType, DropzoneError> {
        let options = DropzoneOptions::from_json(options)?;
        self.initialize_dropzone(identifier, options)
    }

    /// Hover state of the zone bound to `id`, if any.
    pub fn zone_state(&self, id: &str) -> Option<ZoneState> {
        self.zones.borrow().get(id).map(|z| z.state())
    }

    /// Ids of all bound zones, sorted.
    pub fn zone_ids(&self) -> Vec<String> {
        self.zones.borrow().keys().cloned().collect()
    }
}
