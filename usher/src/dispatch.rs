//! The dispatcher: target parsing, injection, invocation, and respond-with
//! propagation.
//!
//! A dispatch runs the steps below in strict sequence; there is no retry and
//! no branching back:
//!
//! 1. Parse the `"key#action"` target at the first `#`.
//! 2. Resolve the key against the registry.
//! 3. Pick the injection source: per-dispatch override, else the configured
//!    default.
//! 4. Resolve constructor arguments (callables run against the caller's
//!    scope; results are list-coerced).
//! 5. Materialize the controller instance per its descriptor.
//! 6. Invoke the action with the list-coerced explicit arguments.
//! 7. Harvest the respond-with state.
//! 8. Merge it into the caller's scope, first-write-wins.
//! 9. Return the action's result.

use crate::config::Config;
use crate::inject::Inject;
use crate::registry::{Registration, Registry};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use usher_core::{ActionError, DispatchError, Renderer, Scope, Value, coerce_args};

/// Per-dispatch options: explicit action arguments and an injection override.
///
/// # Example
///
/// ```rust,ignore
/// controllers.dispatch_with(
///     "adder#add",
///     &mut scope,
///     Dispatch::new().args(json!([8])),
/// )?;
/// ```
#[derive(Default)]
pub struct Dispatch {
    /// Positional arguments for the action, list-coerced before invocation.
    pub args: Option<Value>,

    /// Injection source overriding the configured default.
    pub inject: Option<Inject>,
}

impl Dispatch {
    /// No explicit arguments, no injection override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action arguments.
    pub fn args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }

    /// Override the injection source for this dispatch.
    pub fn inject(mut self, inject: impl Into<Inject>) -> Self {
        self.inject = Some(inject.into());
        self
    }
}

/// The controller registry plus dispatch defaults.
///
/// Owned by the hosting application and shared into request handling;
/// registration typically happens at configure time but may race with
/// in-flight dispatches, so the registry sits behind an `RwLock`.
pub struct Controllers {
    registry: RwLock<Registry>,
    inject: Option<Inject>,
    args: Option<Value>,
}

impl Controllers {
    /// An empty dispatcher: no controllers, no default injection.
    pub fn new() -> Self {
        Self::configure(Config::default())
    }

    /// Build from configuration, applying any initial registration.
    pub fn configure(config: Config) -> Self {
        let controllers = Self {
            registry: RwLock::new(Registry::new()),
            inject: config.inject,
            args: config.args,
        };
        if let Some(registration) = config.controllers {
            controllers.register(registration);
        }
        controllers
    }

    /// Register controllers in any accepted [`Registration`] shape.
    pub fn register(&self, registration: impl Into<Registration>) {
        self.registry_mut().apply(registration.into());
    }

    /// Whether a controller is registered under the key.
    pub fn contains(&self, key: &str) -> bool {
        self.registry().contains(key)
    }

    /// The number of registered controllers.
    pub fn len(&self) -> usize {
        self.registry().len()
    }

    /// Whether no controller is registered.
    pub fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    /// The reserved default arguments from configuration.
    pub fn default_args(&self) -> Option<&Value> {
        self.args.as_ref()
    }

    /// Register every controller submitted via `submit_controller!`.
    #[cfg(feature = "inventory")]
    pub fn register_collected(&self) {
        for def in crate::collected::collect_controllers() {
            self.register(def);
        }
    }

    /// Dispatch a `"key#action"` target with default options.
    pub fn dispatch(&self, target: &str, scope: &mut dyn Scope) -> Result<Value, DispatchError> {
        self.dispatch_with(target, scope, Dispatch::new())
    }

    /// Dispatch a `"key#action"` target.
    ///
    /// Runs the full step sequence documented at module level. All failures
    /// surface synchronously; a missing controller never reaches the
    /// invocation step.
    pub fn dispatch_with(
        &self,
        target: &str,
        scope: &mut dyn Scope,
        options: Dispatch,
    ) -> Result<Value, DispatchError> {
        let (key, action) = split_target(target)?;

        let descriptor =
            self.registry()
                .resolve(key)
                .ok_or_else(|| DispatchError::UnresolvedController {
                    key: key.to_string(),
                })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, action = %action, "dispatching controller action");

        let inject = options.inject.as_ref().or(self.inject.as_ref());
        let ctor_args = inject.map(|source| source.resolve(&*scope)).unwrap_or_default();

        let mut instance = descriptor.materialize(&ctor_args)?;

        let action_args = options.args.map(coerce_args).unwrap_or_default();
        let response = instance.call(action, &action_args).map_err(|err| match err {
            ActionError::UnknownAction(name) => DispatchError::NoSuchAction {
                key: key.to_string(),
                action: name,
            },
            ActionError::Failed(source) => DispatchError::Action(source),
        })?;

        for (field, value) in instance.responds_with() {
            if !scope.contains(&field) {
                scope.set(&field, value);
            }
        }

        Ok(response)
    }

    /// Dispatch, then trigger the host renderer with `"key/action"`.
    ///
    /// The rendering trigger is the only coupling to the view layer; the
    /// dispatch contract itself is unchanged, and nothing is rendered when
    /// dispatch fails.
    pub fn controller_action(
        &self,
        target: &str,
        scope: &mut dyn Scope,
        renderer: &mut dyn Renderer,
        options: Dispatch,
    ) -> Result<Value, DispatchError> {
        let (key, action) = split_target(target)?;

        let response = self.dispatch_with(target, scope, options)?;

        renderer.render(&format!("{key}/{action}"));

        Ok(response)
    }

    fn registry(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Controllers {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a target at its first `#` into key and action.
///
/// The remainder after the first `#` is the action name verbatim, so extra
/// separators belong to the action.
fn split_target(target: &str) -> Result<(&str, &str), DispatchError> {
    match target.split_once('#') {
        Some((key, action)) if !key.is_empty() => Ok((key, action)),
        _ => Err(DispatchError::MalformedTarget {
            target: target.to_string(),
        }),
    }
}
