//! JavaScript entry points for the hosting page (feature `web`).
//!
//! ```js
//! initializeDropzone("ILIASUIComponentDropzoneStandard",
//!     JSON.stringify({ id: "drop1", registeredSignals: ["fileDropped"] }));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::document::WebDocument;
use crate::page::PageContext;

thread_local! {
    static PAGE: RefCell<Option<Rc<PageContext>>> = const { RefCell::new(None) };
}

fn new_page(config: PageConfig) -> Result<Rc<PageContext>, JsError> {
    let doc = WebDocument::from_window().ok_or_else(|| JsError::new("no window document available"))?;
    Ok(Rc::new(PageContext::with_config(Rc::new(doc), config)))
}

fn page() -> Result<Rc<PageContext>, JsError> {
    if let Some(page) = PAGE.with(|p| p.borrow().clone()) {
        return Ok(page);
    }
    let page = new_page(PageConfig::default())?;
    PAGE.with(|p| *p.borrow_mut() = Some(page.clone()));
    Ok(page)
}

/// Sets the page vocabulary. Only allowed before the first dropzone is initialized.
#[wasm_bindgen(js_name = configureDropzonePage)]
pub fn configure_page(config_json: &str) -> Result<(), JsError> {
    if PAGE.with(|p| p.borrow().is_some()) {
        return Err(JsError::new("dropzone page is already configured"));
    }
    let page = new_page(PageConfig::from_json(config_json)?)?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

/// Initializes one dropzone. `options_json` is `{"id", "darkenedBackground", "registeredSignals"}`.
#[wasm_bindgen(js_name = initializeDropzone)]
pub fn initialize_dropzone(dropzone_type: &str, options_json: &str) -> Result<(), JsError> {
    page()?.initialize_dropzone_json(dropzone_type, options_json)?;
    Ok(())
}
