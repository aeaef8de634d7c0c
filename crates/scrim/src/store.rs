//! The intercepted instance store.
//!
//! Mount and unmount live directly inside `set` and `delete`, so the
//! session pipeline can express intent purely as state changes ("this
//! instance is now open/closed") without touching rendering concerns.
//! Reads (`get`, `has`, iteration) are pure pass-throughs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::registry::ComponentRegistry;
use crate::render_api::{ContainerTag, RenderProps, Surface, UiRuntime};
use crate::types::{DialogInstance, InstanceId};

pub struct InstanceStore {
    map: HashMap<InstanceId, DialogInstance>,
    registry: Rc<RefCell<ComponentRegistry>>,
    runtime: Rc<RefCell<dyn UiRuntime>>,
}

impl InstanceStore {
    pub(crate) fn new(
        registry: Rc<RefCell<ComponentRegistry>>,
        runtime: Rc<RefCell<dyn UiRuntime>>,
    ) -> Self {
        Self {
            map: HashMap::new(),
            registry,
            runtime,
        }
    }

    /// Writes `instance` into the store, mounting it first if it is
    /// opened and not yet mounted.
    ///
    /// An existing entry's surface carries over, so re-setting a mounted
    /// instance never double-mounts. Mount order: resolve component,
    /// create tagged container, create context with
    /// `{opened: true, ...props}`, attach, append at the instance's
    /// placement.
    ///
    /// # Panics
    ///
    /// If the instance's type has no registered component — a
    /// programming error, since the session hook validated registration
    /// at creation. An embedder failure inside the runtime also panics
    /// through here; mount is not retried and the container may already
    /// be appended when it happens.
    pub fn set(&mut self, mut instance: DialogInstance) {
        if let Some(existing) = self.map.get_mut(&instance.id) {
            instance.surface = existing.surface.take();
        }

        if instance.opened.get() && instance.surface.is_none() {
            let component = self
                .registry
                .borrow()
                .lookup(&instance.ty)
                .unwrap_or_else(|| {
                    panic!(
                        "dialog type `{}` has no component but instance {} is live",
                        instance.ty, instance.id
                    )
                });

            let mut runtime = self.runtime.borrow_mut();
            let tag = ContainerTag {
                id: instance.id,
                dialog_type: instance.ty.clone(),
            };
            let container = runtime.create_container(&tag);
            let context = runtime.create_context(
                &component,
                RenderProps {
                    opened: true,
                    props: instance.props.clone(),
                },
            );
            runtime.attach(context, container);
            runtime.append(container, instance.placement);
            instance.surface = Some(Surface { context, container });

            log::debug!("mounted {} ({})", instance.id, instance.ty);
        }

        self.map.insert(instance.id, instance);
    }

    /// Removes the entry, tearing down its render context first if it
    /// is mounted (destroy context, then remove container). Deleting an
    /// untracked id is a no-op returning `false`.
    pub fn delete(&mut self, id: &InstanceId) -> bool {
        let Some(instance) = self.map.remove(id) else {
            return false;
        };

        if let Some(surface) = instance.surface {
            let mut runtime = self.runtime.borrow_mut();
            runtime.destroy_context(surface.context);
            runtime.remove_container(surface.container);
            log::debug!("unmounted {} ({})", instance.id, instance.ty);
        }

        true
    }

    pub fn get(&self, id: &InstanceId) -> Option<&DialogInstance> {
        self.map.get(id)
    }

    pub fn has(&self, id: &InstanceId) -> bool {
        self.map.contains_key(id)
    }

    /// Ids of every tracked instance, in no particular order.
    pub fn ids(&self) -> Vec<InstanceId> {
        self.map.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
