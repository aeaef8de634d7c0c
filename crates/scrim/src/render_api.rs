//! The seam between the registry and the embedder's UI runtime.
//!
//! The instance store drives these primitives and nothing else; the
//! runtime never writes back into the store. All calls are synchronous:
//! after `destroy_context` returns, the surface is fully detached and
//! its resources released.

use std::any::Any;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

use crate::types::{DialogType, InstanceId, Placement, Props};

/// Opaque renderable handed over at registration; the runtime downcasts
/// it to whatever its component model needs.
pub type Component = Rc<dyn Any>;

/// Wraps a renderable as a [`Component`].
pub fn component<T: 'static>(renderable: T) -> Component {
    Rc::new(renderable)
}

/// What the rendered component receives: the visibility flag spliced in
/// front of the session's own props.
#[derive(Clone)]
pub struct RenderProps {
    pub opened: bool,
    pub props: Props,
}

/// Diagnostics tags carried by every dialog container node.
#[derive(Clone, Debug)]
pub struct ContainerTag {
    pub id: InstanceId,
    pub dialog_type: DialogType,
}

new_key_type! {
    /// Handle to an isolated rendering context.
    pub struct ContextKey;
    /// Handle to a container node.
    pub struct ContainerKey;
}

/// Render context record held by the instance store while a dialog is
/// mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surface {
    pub context: ContextKey,
    pub container: ContainerKey,
}

/// Rendering primitives supplied by the embedding UI framework.
///
/// Mount is not retried on failure: a panic out of any of these
/// propagates through the store's `set`, with no partial-state
/// recovery attempted.
pub trait UiRuntime {
    /// Creates a fresh container node carrying the diagnostics tags.
    fn create_container(&mut self, tag: &ContainerTag) -> ContainerKey;

    /// Creates an isolated rendering context rendering `component` with
    /// the given props.
    fn create_context(&mut self, component: &Component, props: RenderProps) -> ContextKey;

    /// Attaches the context's live surface under the container.
    fn attach(&mut self, context: ContextKey, container: ContainerKey);

    /// Appends the container to the document at `placement`.
    fn append(&mut self, container: ContainerKey, placement: Placement);

    /// Synchronously and completely detaches the surface, releasing all
    /// of its resources.
    fn destroy_context(&mut self, context: ContextKey);

    /// Removes the container node from the document.
    fn remove_container(&mut self, container: ContainerKey);
}

/// Observable step in a [`HeadlessRuntime`]'s life, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A container entered the document.
    Appended(InstanceId),
    /// A container left the document.
    Removed(InstanceId),
}

pub struct ContextRecord {
    pub props: RenderProps,
    pub attached_to: Option<ContainerKey>,
}

pub struct ContainerRecord {
    pub tag: ContainerTag,
    pub placement: Option<Placement>,
    pub in_document: bool,
}

/// In-memory runtime recording every call. Stands in for a real UI
/// framework in tests and headless embeddings.
#[derive(Default)]
pub struct HeadlessRuntime {
    contexts: SlotMap<ContextKey, ContextRecord>,
    containers: SlotMap<ContainerKey, ContainerRecord>,
    events: Vec<RuntimeEvent>,
    mounts: usize,
    unmounts: usize,
}

impl HeadlessRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total `create_context` calls so far.
    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    /// Total `destroy_context` calls so far.
    pub fn unmount_count(&self) -> usize {
        self.unmounts
    }

    pub fn events(&self) -> &[RuntimeEvent] {
        &self.events
    }

    pub fn context(&self, key: ContextKey) -> Option<&ContextRecord> {
        self.contexts.get(key)
    }

    pub fn container(&self, key: ContainerKey) -> Option<&ContainerRecord> {
        self.containers.get(key)
    }

    pub fn live_contexts(&self) -> usize {
        self.contexts.len()
    }

    pub fn live_containers(&self) -> usize {
        self.containers.len()
    }
}

impl UiRuntime for HeadlessRuntime {
    fn create_container(&mut self, tag: &ContainerTag) -> ContainerKey {
        self.containers.insert(ContainerRecord {
            tag: tag.clone(),
            placement: None,
            in_document: false,
        })
    }

    fn create_context(&mut self, _component: &Component, props: RenderProps) -> ContextKey {
        self.mounts += 1;
        self.contexts.insert(ContextRecord {
            props,
            attached_to: None,
        })
    }

    fn attach(&mut self, context: ContextKey, container: ContainerKey) {
        if let Some(ctx) = self.contexts.get_mut(context) {
            ctx.attached_to = Some(container);
        }
    }

    fn append(&mut self, container: ContainerKey, placement: Placement) {
        if let Some(node) = self.containers.get_mut(container) {
            node.placement = Some(placement);
            node.in_document = true;
            log::debug!("appended container {} at {:?}", node.tag.id, placement);
            self.events.push(RuntimeEvent::Appended(node.tag.id));
        }
    }

    fn destroy_context(&mut self, context: ContextKey) {
        self.unmounts += 1;
        self.contexts.remove(context);
    }

    fn remove_container(&mut self, container: ContainerKey) {
        if let Some(node) = self.containers.remove(container) {
            log::debug!("removed container {}", node.tag.id);
            self.events.push(RuntimeEvent::Removed(node.tag.id));
        }
    }
}
