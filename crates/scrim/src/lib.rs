//! # Dialog lifecycle registry
//!
//! Scrim manages modal/overlay surfaces for a component-based UI: a
//! call site declares "a dialog of type T is open" by flipping an
//! observable cell, and the registry mounts, tracks, and later unmounts
//! the corresponding surface without the call site touching containers
//! or contexts.
//!
//! Three pieces, leaf-first:
//!
//! - [`ComponentRegistry`] — dialog type → renderable component, with
//!   batch register/unregister and duplicate/unknown detection.
//! - [`InstanceStore`] — instance id → [`DialogInstance`], with mount
//!   embedded in `set` and unmount embedded in `delete`.
//! - [`DialogHost::use_dialog`] — the per-call-site session hook: a
//!   fresh id, an `opened` cell, and a transition effect that writes to
//!   or deletes from the store, applying the exclusivity policy first.
//!
//! Data flows one direction: session cell → store → [`UiRuntime`]. The
//! runtime never writes back.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use scrim::{DialogHost, DialogOptions, HeadlessRuntime, component};
//!
//! let runtime = Rc::new(RefCell::new(HeadlessRuntime::new()));
//! let host = DialogHost::new(runtime.clone());
//!
//! host.register_batch([("alert".into(), component(()))]).unwrap();
//!
//! let session = host.use_dialog("alert", DialogOptions::default()).unwrap();
//! session.open();
//! assert!(host.store().has(&session.id));
//! assert_eq!(runtime.borrow().mount_count(), 1);
//!
//! session.close();
//! assert!(host.store().is_empty());
//! ```
//!
//! Everything is single-threaded and synchronous: effects run
//! depth-first within the writing call, with no queuing or coalescing.

pub mod error;
pub mod registry;
pub mod render_api;
pub mod session;
pub mod store;
pub mod types;

pub use error::*;
pub use registry::*;
pub use render_api::*;
pub use session::*;
pub use store::*;
pub use types::*;
