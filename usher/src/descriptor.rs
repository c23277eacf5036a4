//! Controller descriptors and instance materialization.
//!
//! A [`Descriptor`] records how a registered key turns into a live
//! controller: construct a type, invoke a factory, or hand back a pre-built
//! value. [`Descriptor::materialize`] performs that step once per dispatch
//! and yields an [`Instance`] the dispatcher can invoke.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use usher_core::{ActionError, BoxError, Controller, DispatchError, FromArgs, RespondWith, Value};

/// Constructor function of a constructible descriptor.
pub type ConstructFn = fn(&[Value]) -> Result<Box<dyn Controller>, BoxError>;

/// Factory closure of a factory descriptor.
pub type FactoryFn = Arc<dyn Fn(&[Value]) -> Result<Box<dyn Controller>, BoxError> + Send + Sync>;

/// How a registered controller key turns into a live instance.
#[derive(Clone)]
pub enum Descriptor {
    /// A constructible type: a fresh instance is built per dispatch from the
    /// resolved injection arguments.
    Construct(ConstructFn),

    /// A factory closure invoked with the resolved injection arguments.
    Factory(FactoryFn),

    /// A pre-built instance used directly and shared across dispatches.
    Value(Arc<Mutex<dyn Controller>>),
}

impl Descriptor {
    /// Descriptor for a constructible controller type.
    pub fn construct<C>() -> Self
    where
        C: Controller + FromArgs + 'static,
    {
        Descriptor::Construct(|args| Ok(Box::new(C::from_args(args)?)))
    }

    /// Descriptor wrapping a factory closure.
    pub fn factory<F>(make: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Box<dyn Controller>, BoxError> + Send + Sync + 'static,
    {
        Descriptor::Factory(Arc::new(make))
    }

    /// Descriptor wrapping an already-built instance.
    pub fn value<C>(controller: C) -> Self
    where
        C: Controller + 'static,
    {
        Descriptor::Value(Arc::new(Mutex::new(controller)))
    }

    /// Materialize a live instance using the resolved constructor arguments.
    ///
    /// Constructor and factory failures surface as
    /// [`DispatchError::Instantiation`] with the source error unchanged.
    /// Plain values skip instantiation entirely.
    pub fn materialize(&self, args: &[Value]) -> Result<Instance, DispatchError> {
        match self {
            Descriptor::Construct(build) => build(args)
                .map(Instance::Owned)
                .map_err(DispatchError::Instantiation),
            Descriptor::Factory(make) => make(args)
                .map(Instance::Owned)
                .map_err(DispatchError::Instantiation),
            Descriptor::Value(shared) => Ok(Instance::Shared(Arc::clone(shared))),
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Construct(_) => f.write_str("Descriptor::Construct"),
            Descriptor::Factory(_) => f.write_str("Descriptor::Factory"),
            Descriptor::Value(_) => f.write_str("Descriptor::Value"),
        }
    }
}

/// A live controller for the duration of one dispatch.
pub enum Instance {
    /// Freshly built, owned by this dispatch.
    Owned(Box<dyn Controller>),

    /// A shared plain-value controller.
    Shared(Arc<Mutex<dyn Controller>>),
}

impl Instance {
    /// Invoke the named action with positional arguments.
    pub fn call(&mut self, action: &str, args: &[Value]) -> Result<Value, ActionError> {
        match self {
            Instance::Owned(controller) => controller.call(action, args),
            Instance::Shared(shared) => lock(shared).call(action, args),
        }
    }

    /// Read the respond-with state after the action has run.
    pub fn responds_with(&self) -> RespondWith {
        match self {
            Instance::Owned(controller) => controller.responds_with(),
            Instance::Shared(shared) => lock(shared).responds_with(),
        }
    }
}

fn lock(shared: &Arc<Mutex<dyn Controller>>) -> MutexGuard<'_, dyn Controller + 'static> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
