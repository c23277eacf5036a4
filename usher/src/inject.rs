//! Constructor-argument injection sources.

use std::fmt;
use std::sync::Arc;
use usher_core::{Args, Scope, Value, coerce_args};

/// A source of controller constructor arguments.
///
/// Either a plain value, or a callable resolved against the caller's scope
/// at dispatch time. Both forms are list-coerced after resolution: null
/// yields no arguments, an array is splatted, anything else becomes a single
/// argument.
///
/// # Example
///
/// ```rust,ignore
/// // Fixed arguments for every dispatch.
/// let inject = Inject::from(json!([42]));
///
/// // Arguments derived from caller state.
/// let inject = Inject::compute(|scope| {
///     scope.get("current_user").cloned().unwrap_or(Value::Null)
/// });
/// ```
#[derive(Clone)]
pub enum Inject {
    /// A fixed value, coerced to an argument list without invocation.
    Value(Value),

    /// A callable reading caller state to produce the argument value.
    Compute(Arc<dyn Fn(&dyn Scope) -> Value + Send + Sync>),
}

impl Inject {
    /// Wrap a callable injection source.
    pub fn compute<F>(f: F) -> Self
    where
        F: Fn(&dyn Scope) -> Value + Send + Sync + 'static,
    {
        Inject::Compute(Arc::new(f))
    }

    /// Resolve this source against the caller's scope into an argument list.
    pub fn resolve(&self, scope: &dyn Scope) -> Args {
        match self {
            Inject::Value(value) => coerce_args(value.clone()),
            Inject::Compute(f) => coerce_args(f(scope)),
        }
    }
}

impl fmt::Debug for Inject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inject::Value(value) => f.debug_tuple("Inject::Value").field(value).finish(),
            Inject::Compute(_) => f.write_str("Inject::Compute"),
        }
    }
}

impl From<Value> for Inject {
    fn from(value: Value) -> Self {
        Inject::Value(value)
    }
}
