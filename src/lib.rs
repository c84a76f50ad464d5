//! Drag and drop behavior of server-rendered dropzones.
//!
//! A page declares its dropzones in markup; this crate makes them react to
//! file drags. Dragging over a zone marks that zone as hovered and highlights
//! every dropzone of the page (optionally darkening the page behind them).
//! Dropping on a zone clears the highlight and fires the zone's registered
//! signals, custom events other widgets on the page listen for.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use dropzone::config::DEFAULT_STANDARD_TYPE;
//! use dropzone::document::{Document, InMemoryDocument};
//! use dropzone::event::DragEventKind;
//! use dropzone::options::DropzoneOptions;
//! use dropzone::page::PageContext;
//!
//! let doc = Rc::new(InMemoryDocument::new());
//! doc.append_element(None, "drop1", "il-dropzone");
//! doc.on_signal("drop1", "fileDropped", |e| println!("dropped: {:?}", e.detail.data.files));
//!
//! let page = PageContext::new(doc.clone());
//! page.initialize_dropzone(
//!     DEFAULT_STANDARD_TYPE,
//!     DropzoneOptions::new("drop1").signals(["fileDropped"]),
//! ).unwrap();
//!
//! doc.fire("drop1", DragEventKind::DragEnter);
//! assert!(doc.has_class("drop1", "drag-hover"));
//! doc.fire("drop1", DragEventKind::Drop);
//! assert!(!doc.has_class("drop1", "drag-hover"));
//! ```
//!
//! # Browser build
//!
//! The `web` feature adds the `web-sys` document and the JS entry points in
//! `ffi`. Check it with
//! `cargo check --features web --target wasm32-unknown-unknown`; its
//! signature tests run natively with `cargo test --features web`.

pub mod config;
pub mod document;
pub mod errors;
pub mod event;
pub mod highlight;
pub mod options;
pub mod page;
pub mod signals;
pub mod suppressor;
pub mod zone;

#[cfg(feature = "web")]
pub mod ffi;

pub use errors::{ConfigurationError, DropzoneError};
pub use options::{DropzoneOptions, DropzoneType};
pub use page::PageContext;
