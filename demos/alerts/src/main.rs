//! Headless walkthrough of the dialog registry: batch registration at
//! startup, two sessions, and the exclusivity policy in action.
//!
//! Run with `RUST_LOG=debug` to see the store's mount/unmount traces.

use std::cell::RefCell;
use std::rc::Rc;

use scrim::{DialogHost, DialogOptions, Exclusivity, HeadlessRuntime, Props, component};

// The headless runtime treats components as opaque; a real embedder
// would downcast these and render them.
#[allow(dead_code)]
struct AlertContent {
    message: String,
}

#[allow(dead_code)]
struct ConfirmContent {
    question: String,
}

fn main() {
    env_logger::init();

    let runtime = Rc::new(RefCell::new(HeadlessRuntime::new()));
    let host = DialogHost::new(runtime.clone());

    host.register_batch([
        ("alert".into(), component(AlertContent { message: String::new() })),
        ("confirm".into(), component(ConfirmContent { question: String::new() })),
    ])
    .expect("types are registered once, at startup");

    let alert = host
        .use_dialog(
            "alert",
            DialogOptions::new().props(Props::new("file saved".to_string())),
        )
        .expect("alert is registered");
    let confirm = host
        .use_dialog(
            "confirm",
            DialogOptions::new().closed(Exclusivity::CloseOthers),
        )
        .expect("confirm is registered");

    alert.open();
    log::info!(
        "alert open: {} tracked, {} mounted",
        host.store().len(),
        runtime.borrow().live_contexts()
    );

    // Opening the confirm dialog force-closes the alert first.
    confirm.open();
    log::info!(
        "confirm open: alert opened = {}, {} tracked",
        alert.is_open(),
        host.store().len()
    );

    confirm.close();
    log::info!(
        "all closed: {} tracked, {} mounts / {} unmounts total",
        host.store().len(),
        runtime.borrow().mount_count(),
        runtime.borrow().unmount_count()
    );
}
