//! # Cells and disposers
//!
//! Scrim's reactive substrate is deliberately small: an observable cell
//! and a one-shot cleanup guard. There is no dependency graph and no
//! implicit read tracking — a listener is attached with an explicit
//! `subscribe` call and detached by running the `Dispose` it returned.
//!
//! ```rust
//! use scrim_core::signal;
//!
//! let opened = signal(false);
//! let sub = opened.subscribe(|now| println!("opened = {now}"));
//!
//! opened.set(true);
//! opened.update(|v| *v = !*v);
//!
//! sub.run(); // detach; further writes are silent
//! opened.set(true);
//! ```
//!
//! Notification is synchronous and depth-first: `set` returns only after
//! every listener has run to completion, and a listener is allowed to
//! `set` this or any other cell while it runs. Writes are never
//! de-duplicated — setting a cell to the value it already holds still
//! notifies.

pub mod dispose;
pub mod signal;
pub mod tests;

pub use dispose::*;
pub use signal::*;
