//! Simulates a page with two dropzones and a drag gesture crossing them.
//!
//! Run with `RUST_LOG=debug` to see the zone transitions. The browser backend
//! is not used here; check it with
//! `cargo check --features web --target wasm32-unknown-unknown`.

use std::rc::Rc;

use dropzone::config::{Selector, DEFAULT_STANDARD_TYPE, DEFAULT_WRAPPER_TYPE};
use dropzone::document::{Document, InMemoryDocument};
use dropzone::event::{DataTransfer, DragEvent, DragEventKind};
use dropzone::{DropzoneOptions, PageContext};

fn print_page(doc: &InMemoryDocument, step: &str) {
    println!("-- {step}");
    for id in ["il-dropzone-darkened", "upload", "avatar"] {
        if doc.exists(&Selector::Id(id.to_string())) {
            println!("   #{id:<22} {}", doc.classes(id).join(" "));
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let doc = Rc::new(InMemoryDocument::new());
    doc.append_element(None, "upload", "il-dropzone");
    doc.append_element(Some("upload"), "upload-hint", "");
    doc.append_element(None, "avatar", "il-dropzone");

    doc.on_signal("upload", "fileDropped", |e| {
        println!("   signal '{}' received, files: {:?}", e.name, e.detail.data.files);
    });
    doc.on_signal("upload", "refreshList", |e| {
        println!("   signal '{}' received", e.name);
    });

    let page = PageContext::new(doc.clone());
    page.initialize_dropzone(
        DEFAULT_STANDARD_TYPE,
        DropzoneOptions::new("upload")
            .darkened_background(true)
            .signals(["fileDropped", "refreshList"]),
    )?;
    page.initialize_dropzone(DEFAULT_WRAPPER_TYPE, DropzoneOptions::new("avatar"))?;

    if let Err(e) = page.initialize_dropzone("ILIASUIComponentDropzoneFancy", DropzoneOptions::new("avatar")) {
        println!("rejected: {e}");
    }

    print_page(&doc, "initialized");

    doc.fire("upload", DragEventKind::DragEnter);
    print_page(&doc, "drag entered #upload");

    doc.fire("upload-hint", DragEventKind::DragEnter);
    doc.fire("upload", DragEventKind::DragLeave);
    print_page(&doc, "drag moved onto the hint inside #upload");

    let drop = DragEvent::new(DragEventKind::Drop).with_data(DataTransfer::with_files(["report.pdf", "photo.jpg"]));
    let drop = doc.dispatch("upload-hint", drop);
    print_page(&doc, "dropped");
    println!("browser default prevented: {}", drop.default_prevented());

    Ok(())
}
