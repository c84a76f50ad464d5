//! Page configuration.
//!
//! `PageConfig` holds the naming vocabulary shared between the hosting page,
//! its stylesheet and the dropzone behavior: the CSS classes toggled on drag,
//! the selectors used to find the overlay and the dropzones, and the type
//! identifiers accepted by [`PageContext::initialize_dropzone`](crate::page::PageContext::initialize_dropzone).
//!
//! The defaults match the markup rendered by the server side. A page that
//! renames things can use the builder:
//!
//! ```rust
//! use dropzone::config::PageConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = PageConfig::builder()
//!     .dropzones(".upload-target")
//!     .drag_hover_class("is-hovered")
//!     .build()?; // returns Result<PageConfig, PageConfigError>
//! assert_eq!(cfg.dropzones.to_string(), ".upload-target");
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `darkened_background_class`: classes put on the overlay while it darkens the page.
//!   May hold several whitespace separated classes (default: `modal-backdrop in`).
//! - `darkened_highlight_class`: class put on every dropzone when the darkened style is used.
//! - `default_highlight_class`: class put on every dropzone when the default style is used.
//! - `drag_hover_class`: class put on the single dropzone a drag is currently over.
//! - `overlay`: id selector of the shared overlay element (default: `#il-dropzone-darkened`).
//! - `dropzones`: selector matching every dropzone on the page (default: `.il-dropzone`).
//! - `standard_type` / `wrapper_type`: the identifiers naming each [`DropzoneType`](crate::options::DropzoneType).
//!
//! # Errors
//!
//! Validation returns [`PageConfigError`] when a class is empty or starts with
//! a `.`, when the overlay selector is not an id selector, or when the type
//! identifiers are empty or identical.

use serde::Deserialize;
use std::fmt;

pub const DEFAULT_STANDARD_TYPE: &str = "ILIASUIComponentDropzoneStandard";
pub const DEFAULT_WRAPPER_TYPE: &str = "ILIASUIComponentDropzoneWrapper";

/// A CSS selector, limited to the two forms the page contract uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Selector {
    /// `#name`
    Id(String),
    /// `.name`
    Class(String),
}

impl Selector {
    pub fn parse(s: &str) -> Result<Self, PageConfigError> {
        let s = s.trim();
        let (head, name) = s.split_at(s.chars().next().map(char::len_utf8).unwrap_or(0));
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(PageConfigError::InvalidSelector(s.to_string()));
        }

        match head {
            "#" => Ok(Selector::Id(name.to_string())),
            "." => Ok(Selector::Class(name.to_string())),
            _ => Err(PageConfigError::InvalidSelector(s.to_string())),
        }
    }

    /// Name without the leading `#` or `.`.
    pub fn name(&self) -> &str {
        match self {
            Selector::Id(name) | Selector::Class(name) => name,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
        }
    }
}

impl TryFrom<String> for Selector {
    type Error = PageConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Selector::parse(&value)
    }
}

/// Splits a class attribute value into its individual class names.
pub fn class_tokens(classes: &str) -> impl Iterator<Item = &str> {
    classes.split_whitespace()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub darkened_background_class: String,
    pub darkened_highlight_class: String,
    pub default_highlight_class: String,
    pub drag_hover_class: String,
    pub overlay: Selector,
    pub dropzones: Selector,
    pub standard_type: String,
    pub wrapper_type: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            // bootstrap classes, the stylesheet relies on them
            darkened_background_class: "modal-backdrop in".to_string(),
            darkened_highlight_class: "darkened-highlight".to_string(),
            default_highlight_class: "default-highlight".to_string(),
            drag_hover_class: "drag-hover".to_string(),
            overlay: Selector::Id("il-dropzone-darkened".to_string()),
            dropzones: Selector::Class("il-dropzone".to_string()),
            standard_type: DEFAULT_STANDARD_TYPE.to_string(),
            wrapper_type: DEFAULT_WRAPPER_TYPE.to_string(),
        }
    }
}

impl PageConfig {
    pub fn builder() -> PageConfigBuilder {
        PageConfigBuilder::default()
    }

    /// Parses a JSON object with camelCase keys. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<PageConfig, PageConfigError> {
        let cfg: PageConfig =
            serde_json::from_str(json).map_err(|e| PageConfigError::Parse(e.to_string()))?;
        validate(&cfg)?;
        Ok(cfg)
    }

    /// The id the overlay element is created with.
    pub fn overlay_id(&self) -> &str {
        self.overlay.name()
    }
}

/// Builder for [`PageConfig`].
#[derive(Debug, Clone, Default)]
pub struct PageConfigBuilder {
    inner: PageConfig,
    selector_error: Option<PageConfigError>,
}

impl PageConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut PageConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    fn selector(mut self, s: &str, f: impl FnOnce(&mut PageConfig, Selector)) -> Self {
        match Selector::parse(s) {
            Ok(sel) => f(&mut self.inner, sel),
            Err(e) => {
                self.selector_error.get_or_insert(e);
            }
        }
        self
    }

    pub fn darkened_background_class<S: Into<String>>(self, c: S) -> Self { self.map(|cfg| cfg.darkened_background_class = c.into()) }
    pub fn darkened_highlight_class<S: Into<String>>(self, c: S) -> Self { self.map(|cfg| cfg.darkened_highlight_class = c.into()) }
    pub fn default_highlight_class<S: Into<String>>(self, c: S) -> Self { self.map(|cfg| cfg.default_highlight_class = c.into()) }
    pub fn drag_hover_class<S: Into<String>>(self, c: S) -> Self { self.map(|cfg| cfg.drag_hover_class = c.into()) }
    pub fn overlay(self, selector: &str) -> Self { self.selector(selector, |cfg, s| cfg.overlay = s) }
    pub fn dropzones(self, selector: &str) -> Self { self.selector(selector, |cfg, s| cfg.dropzones = s) }
    pub fn standard_type<S: Into<String>>(self, t: S) -> Self { self.map(|cfg| cfg.standard_type = t.into()) }
    pub fn wrapper_type<S: Into<String>>(self, t: S) -> Self { self.map(|cfg| cfg.wrapper_type = t.into()) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut PageConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<PageConfig, PageConfigError> {
        if let Some(e) = self.selector_error {
            return Err(e);
        }
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageConfigError {
    #[error("selector '{0}' must be '#id' or '.class'")]
    InvalidSelector(String),

    #[error("overlay selector '{0}' must be an id selector")]
    OverlayNotId(String),

    #[error("class '{value}' for {field} must be non-empty and written without a leading '.'")]
    InvalidClass { field: &'static str, value: String },

    #[error("type identifier for {0} must not be empty")]
    EmptyTypeIdentifier(&'static str),

    #[error("standard and wrapper type identifiers are both '{0}'")]
    DuplicateTypeIdentifier(String),

    #[error("cannot parse page config: {0}")]
    Parse(String),
}

fn validate_class(field: &'static str, value: &str) -> Result<(), PageConfigError> {
    let mut tokens = class_tokens(value).peekable();
    if tokens.peek().is_none() || tokens.any(|t| t.starts_with('.')) {
        return Err(PageConfigError::InvalidClass { field, value: value.to_string() });
    }
    Ok(())
}

fn validate(c: &PageConfig) -> Result<(), PageConfigError> {
    validate_class("darkened_background_class", &c.darkened_background_class)?;
    validate_class("darkened_highlight_class", &c.darkened_highlight_class)?;
    validate_class("default_highlight_class", &c.default_highlight_class)?;
    validate_class("drag_hover_class", &c.drag_hover_class)?;

    if !matches!(c.overlay, Selector::Id(_)) {
        return Err(PageConfigError::OverlayNotId(c.overlay.to_string()));
    }

    if c.standard_type.trim().is_empty() {
        return Err(PageConfigError::EmptyTypeIdentifier("standard_type"));
    }
    if c.wrapper_type.trim().is_empty() {
        return Err(PageConfigError::EmptyTypeIdentifier("wrapper_type"));
    }
    if c.standard_type == c.wrapper_type {
        return Err(PageConfigError::DuplicateTypeIdentifier(c.standard_type.clone()));
    }
    Ok(())
}
