//! The per-call-site session hook and its host service.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use scrim_core::{Dispose, Signal};

use crate::error::DialogError;
use crate::registry::ComponentRegistry;
use crate::render_api::{Component, UiRuntime};
use crate::store::InstanceStore;
use crate::types::{DialogInstance, DialogOptions, DialogType, Exclusivity, InstanceId, Placement};

/// Owns the component registry and the instance store, wired to one
/// rendering runtime. Explicitly constructed and passed by reference —
/// never a module-level global — so lifetime and test isolation stay
/// obvious.
pub struct DialogHost {
    registry: Rc<RefCell<ComponentRegistry>>,
    store: Rc<RefCell<InstanceStore>>,
    next_id: Cell<u64>,
}

impl DialogHost {
    pub fn new(runtime: Rc<RefCell<dyn UiRuntime>>) -> Self {
        let registry = Rc::new(RefCell::new(ComponentRegistry::new()));
        let store = Rc::new(RefCell::new(InstanceStore::new(registry.clone(), runtime)));
        Self {
            registry,
            store,
            next_id: Cell::new(1),
        }
    }

    /// See [`ComponentRegistry::register_batch`].
    pub fn register_batch<I>(&self, entries: I) -> Result<(), DialogError>
    where
        I: IntoIterator<Item = (DialogType, Component)>,
    {
        self.registry.borrow_mut().register_batch(entries)
    }

    /// See [`ComponentRegistry::unregister_batch`].
    pub fn unregister_batch<I>(&self, types: I) -> Result<(), DialogError>
    where
        I: IntoIterator<Item = DialogType>,
    {
        self.registry.borrow_mut().unregister_batch(types)
    }

    /// Read access to the tracked instances.
    pub fn store(&self) -> Ref<'_, InstanceStore> {
        self.store.borrow()
    }

    /// Creates a dialog session: a fresh id, a closed `opened` cell, and
    /// the transition effect that keeps the instance store in sync with
    /// that cell. Fails with [`DialogError::UnregisteredType`] when no
    /// component is registered for `ty`.
    ///
    /// On every cell change the effect runs, in order:
    /// 1. If now open, the exclusivity pass forces the configured other
    ///    dialogs closed — depth-first and synchronously, so their
    ///    unmounts complete before this dialog mounts. The session's own
    ///    instance is always excluded.
    /// 2. The instance record is written to the store (mounting it if
    ///    newly opened).
    /// 3. If now closed and the session has `destroyed = true`, the
    ///    record is deleted from the store (unmounting it).
    ///
    /// Redundant writes still run the effect: setting `opened` to the
    /// value it already holds is not a no-op.
    pub fn use_dialog(
        &self,
        ty: impl Into<DialogType>,
        options: DialogOptions,
    ) -> Result<DialogSession, DialogError> {
        let ty = ty.into();
        if !self.registry.borrow().is_registered(&ty) {
            return Err(DialogError::UnregisteredType(ty.to_string()));
        }

        let DialogOptions {
            closed,
            destroyed,
            append_to_body,
            props,
        } = options;
        let placement = if append_to_body {
            Placement::Body
        } else {
            Placement::AppRoot
        };

        let id = InstanceId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        let opened = Signal::new(false);

        let effect = {
            let store = self.store.clone();
            let opened = opened.clone();
            let ty = ty.clone();
            // Guards against exclusivity cycles (A closes B, B's
            // listener closes A): the re-entrant invocation is skipped
            // and the in-flight transition completes.
            let in_effect = Rc::new(Cell::new(false));
            move |now_open: &bool| {
                if in_effect.get() {
                    log::warn!("re-entrant transition on {id}; exclusivity cycle ignored");
                    return;
                }
                in_effect.set(true);

                if *now_open {
                    let targets: Vec<Signal<bool>> = {
                        let store = store.borrow();
                        match &closed {
                            Exclusivity::KeepOthers => Vec::new(),
                            Exclusivity::CloseOthers => store
                                .ids()
                                .into_iter()
                                .filter(|other| *other != id)
                                .filter_map(|other| {
                                    store.get(&other).map(|inst| inst.opened.clone())
                                })
                                .collect(),
                            Exclusivity::Close(ids) => ids
                                .iter()
                                .filter(|other| **other != id)
                                .filter_map(|other| store.get(other).map(|inst| inst.opened.clone()))
                                .collect(),
                        }
                    };
                    for cell in targets {
                        cell.set(false);
                    }
                }

                store.borrow_mut().set(DialogInstance::new(
                    id,
                    ty.clone(),
                    opened.clone(),
                    placement,
                    props.clone(),
                ));

                if !*now_open && destroyed {
                    store.borrow_mut().delete(&id);
                }

                in_effect.set(false);
            }
        };
        let effect = opened.subscribe(effect);

        Ok(DialogSession { id, opened, effect })
    }
}

/// A call site's handle on one dialog's lifecycle. Toggle `opened` (or
/// use [`open`](Self::open)/[`close`](Self::close)) and the transition
/// effect handles the rest.
pub struct DialogSession {
    pub id: InstanceId,
    pub opened: Signal<bool>,
    effect: Dispose,
}

impl std::fmt::Debug for DialogSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogSession")
            .field("id", &self.id)
            .field("opened", &self.opened.get())
            .finish_non_exhaustive()
    }
}

impl DialogSession {
    pub fn open(&self) {
        self.opened.set(true);
    }

    pub fn close(&self) {
        self.opened.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.opened.get()
    }

    /// Detaches the transition effect. The cell keeps working but no
    /// longer drives the instance store; any tracked instance stays
    /// tracked.
    pub fn dispose(self) {
        self.effect.run();
    }
}
