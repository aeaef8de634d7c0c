use thiserror::Error;

/// Raised synchronously at the offending call site; never recovered
/// internally — there is no retry logic anywhere in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    /// A batch registration named a type that is already registered.
    #[error("dialog type `{0}` has been registered")]
    DuplicateType(String),

    /// A batch unregistration named a type that was never registered.
    #[error("dialog type `{0}` has not been registered")]
    UnknownType(String),

    /// A session was requested for a type with no registered component.
    #[error("cannot open dialog of unregistered type `{0}`")]
    UnregisteredType(String),
}
