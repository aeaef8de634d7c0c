use std::any::Any;
use std::fmt;
use std::rc::Rc;

use scrim_core::Signal;

use crate::render_api::Surface;

/// Identifier selecting which registered component a session renders.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DialogType(Rc<str>);

impl DialogType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DialogType {
    fn from(s: &str) -> Self {
        Self(Rc::from(s))
    }
}

impl From<String> for DialogType {
    fn from(s: String) -> Self {
        Self(Rc::from(s))
    }
}

impl fmt::Display for DialogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique session id, stable for the session's lifetime. Allocated by
/// the host; renders as `dialog-N` for container tagging.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn new(n: u64) -> Self {
        Self(n)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dialog-{}", self.0)
    }
}

/// Opaque configuration bag handed to the rendered component. Immutable
/// after session creation.
#[derive(Clone, Default)]
pub struct Props(Option<Rc<dyn Any>>);

impl Props {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn new<T: 'static>(value: T) -> Self {
        Self(Some(Rc::new(value)))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|any| any.downcast_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Where the dialog's container node is appended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    /// Under the document body.
    Body,
    /// Under the application's root mount point.
    AppRoot,
}

/// Which other dialogs to force closed when this one opens.
#[derive(Clone, Debug, Default)]
pub enum Exclusivity {
    /// Leave other dialogs alone.
    #[default]
    KeepOthers,
    /// Force every currently-tracked dialog closed.
    CloseOthers,
    /// Force only the named dialogs closed; ids with no tracked
    /// instance are skipped.
    Close(Vec<InstanceId>),
}

/// Per-session options, mirroring the open/close pipeline's knobs.
#[derive(Clone)]
pub struct DialogOptions {
    /// Close other dialogs before this one is shown.
    ///
    /// Default: [`Exclusivity::KeepOthers`].
    pub closed: Exclusivity,
    /// Destroy the instance after the dialog closes. With `false` the
    /// mounted context survives close/reopen cycles and only its
    /// visibility toggles.
    ///
    /// Default: `true`.
    pub destroyed: bool,
    /// Append the dialog's container to the document body; `false`
    /// appends it to the app root instead.
    ///
    /// Default: `true`.
    pub append_to_body: bool,
    /// Configuration bag passed through to the rendered component.
    pub props: Props,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogOptions {
    pub fn new() -> Self {
        Self {
            closed: Exclusivity::KeepOthers,
            destroyed: true,
            append_to_body: true,
            props: Props::none(),
        }
    }

    pub fn closed(mut self, exclusivity: Exclusivity) -> Self {
        self.closed = exclusivity;
        self
    }

    pub fn destroyed(mut self, destroyed: bool) -> Self {
        self.destroyed = destroyed;
        self
    }

    pub fn append_to_body(mut self, append_to_body: bool) -> Self {
        self.append_to_body = append_to_body;
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }
}

/// One live or pending dialog session, as tracked by the instance
/// store. The `surface` field is store-managed: it exists only while
/// the dialog is mounted.
pub struct DialogInstance {
    pub id: InstanceId,
    pub ty: DialogType,
    pub opened: Signal<bool>,
    pub placement: Placement,
    pub props: Props,
    pub(crate) surface: Option<Surface>,
}

impl DialogInstance {
    pub(crate) fn new(
        id: InstanceId,
        ty: DialogType,
        opened: Signal<bool>,
        placement: Placement,
        props: Props,
    ) -> Self {
        Self {
            id,
            ty,
            opened,
            placement,
            props,
            surface: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The render context record, while mounted.
    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }
}
