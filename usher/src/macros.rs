//! Registration and action-matching sugar.

/// Generate the body of [`Controller::call`] from `name => expr` arms.
///
/// Matches the action name against each arm, with `ActionError::UnknownAction`
/// as the fallthrough, which the dispatcher reports as `NoSuchAction`.
///
/// # Example
///
/// ```rust,ignore
/// impl Controller for Hello {
///     fn call(&mut self, action: &str, args: &[Value]) -> Result<Value, ActionError> {
///         usher::actions!(action, {
///             world => Ok(self.world().into()),
///             greet => self.greet(args),
///         })
///     }
/// }
/// ```
///
/// [`Controller::call`]: usher_core::Controller::call
#[macro_export]
macro_rules! actions {
    ($action:expr, { $($name:ident => $body:expr),* $(,)? }) => {
        match $action {
            $(stringify!($name) => $body,)*
            other => Err($crate::ActionError::UnknownAction(other.to_string())),
        }
    };
}

/// A [`ControllerDef`] for a constructible controller type.
///
/// The registry key is derived from the spelled type path, so
/// `controller!(admin::UsersController)` registers under `"admin/users"`.
///
/// # Example
///
/// ```rust,ignore
/// controllers.register(controller!(Hello));
/// ```
///
/// [`ControllerDef`]: crate::ControllerDef
#[macro_export]
macro_rules! controller {
    ($ty:ty) => {
        $crate::ControllerDef::new(stringify!($ty), || $crate::Descriptor::construct::<$ty>())
    };
}

/// A batch [`Registration`] of constructible controller types.
///
/// Equivalent to registering each type in turn.
///
/// # Example
///
/// ```rust,ignore
/// controllers.register(controllers![Hello, Ola]);
/// ```
///
/// [`Registration`]: crate::Registration
#[macro_export]
macro_rules! controllers {
    ($($ty:ty),* $(,)?) => {
        $crate::Registration::Batch(vec![
            $($crate::Registration::Controller($crate::controller!($ty))),*
        ])
    };
}
