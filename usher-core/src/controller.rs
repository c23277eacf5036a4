//! The controller capability trait and argument-based construction.

use crate::args::RespondWith;
use crate::error::{ActionError, BoxError};
use serde_json::Value;

/// A named handler object whose actions are invoked by string name.
///
/// This is the terminal point of a dispatch: the dispatcher selects the
/// action from the `"key#action"` target and passes positional arguments.
/// Implementations answer the actions they know and return
/// [`ActionError::UnknownAction`] for anything else; the `actions!` macro in
/// the `usher` crate generates exactly that match.
///
/// # Example
///
/// ```rust,ignore
/// struct Hello;
///
/// impl Controller for Hello {
///     fn call(&mut self, action: &str, args: &[Value]) -> Result<Value, ActionError> {
///         match action {
///             "world" => Ok("Hello World".into()),
///             other => Err(ActionError::UnknownAction(other.to_string())),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be dispatched as a controller",
    label = "missing `Controller` implementation",
    note = "Implement `Controller` so actions can be invoked by name."
)]
pub trait Controller: Send + Sync {
    /// Invoke the named action with positional arguments.
    fn call(&mut self, action: &str, args: &[Value]) -> Result<Value, ActionError>;

    /// State this controller wants propagated into the caller's scope.
    ///
    /// Read once after the action returns. Empty by default; fields already
    /// bound in the caller's scope are never overwritten.
    fn responds_with(&self) -> RespondWith {
        RespondWith::new()
    }
}

/// Construction of a controller from a positional argument list.
///
/// Types implementing `FromArgs` can be registered as constructible
/// descriptors: a fresh instance is built per dispatch from the resolved
/// injection arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed from dispatch arguments",
    label = "missing `FromArgs` implementation",
    note = "Implement `FromArgs` to register `{Self}` as a constructible controller."
)]
pub trait FromArgs: Sized {
    /// Build an instance from the resolved constructor arguments.
    fn from_args(args: &[Value]) -> Result<Self, BoxError>;
}
