//! # usher - Named Controller Dispatch
//!
//! `usher` extends a routing host with a **controller** abstraction: named
//! handler objects registered under string keys derived from their type
//! names, dispatched by a `"key#action"` string, with constructor-argument
//! injection and respond-with state propagated back into the caller's
//! rendering scope.
//!
//! HTTP semantics, route matching, and template rendering stay with the
//! hosting framework; the host supplies a [`Scope`] (its view context) and a
//! [`Renderer`] (its view trigger), and `usher` supplies everything between
//! the route block and the controller action.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use usher::{Controllers, controller, actions};
//!
//! struct Hello;
//!
//! impl usher::FromArgs for Hello {
//!     fn from_args(_args: &[Value]) -> Result<Self, BoxError> {
//!         Ok(Hello)
//!     }
//! }
//!
//! impl usher::Controller for Hello {
//!     fn call(&mut self, action: &str, _args: &[Value]) -> Result<Value, ActionError> {
//!         actions!(action, {
//!             world => Ok("Hello World".into()),
//!         })
//!     }
//! }
//!
//! let controllers = Controllers::new();
//! controllers.register(controller!(Hello));
//!
//! let mut scope = std::collections::HashMap::new();
//! let body = controllers.dispatch("hello#world", &mut scope)?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use usher_core::{
    // Errors
    ActionError,
    // Value model
    Args,
    BoxError,
    // Capability and construction
    Controller,
    DispatchError,
    FromArgs,
    // Host collaborators
    Renderer,
    RespondWith,
    Scope,
    UsherError,
    Value,
    coerce_args,
};

pub mod config;
pub mod descriptor;
pub mod dispatch;
pub mod inject;
mod macros;
pub mod naming;
pub mod registry;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod collected;

pub use config::Config;
pub use descriptor::{ConstructFn, Descriptor, FactoryFn, Instance};
pub use dispatch::{Controllers, Dispatch};
pub use inject::Inject;
pub use naming::{underscore, underscore_with};
pub use registry::{ControllerDef, Registration, Registry};

#[cfg(feature = "inventory")]
pub use collected::{CollectedController, collect_controllers};

/// Prelude module - common imports for Usher.
///
/// # Usage
///
/// ```rust,ignore
/// use usher::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        ActionError,
        BoxError,
        Config,
        // Capability
        Controller,
        // Dispatch
        Controllers,
        // Registration
        Descriptor,
        Dispatch,
        DispatchError,
        FromArgs,
        Inject,
        Registration,
        // Host collaborators
        Renderer,
        RespondWith,
        Scope,
        // Value model
        Value,
    };
}

#[cfg(feature = "inventory")]
pub use inventory;
