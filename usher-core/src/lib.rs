//! # usher-core
//!
//! Core traits for the Usher controller dispatch framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! hosts and extensions that don't need the full `usher` implementation.
//!
//! # Seams
//!
//! Usher separates a dispatch into three seams, each owned by one trait:
//!
//! ## Capability ([`Controller`])
//!
//! The terminal point of a dispatch. A controller receives an action name
//! and positional arguments, runs its business logic, and may expose
//! respond-with state for the caller's rendering scope.
//!
//! - **Dynamic**: actions are selected by string name at dispatch time
//! - **Stateful**: [`Controller::responds_with`] is harvested after the
//!   action returns, never before
//!
//! ## Construction ([`FromArgs`])
//!
//! How a registered type turns into a live instance. Resolved injection
//! arguments are handed to [`FromArgs::from_args`] once per dispatch;
//! nothing is cached or pooled.
//!
//! ## Host collaborators ([`Scope`], [`Renderer`])
//!
//! Everything the hosting framework must supply: a readable/writable
//! key-value scope for injection and respond-with propagation, and a
//! rendering trigger for `"key/action"` view paths.
//!
//! # Error Types
//!
//! - [`UsherError`] - Top-level error type
//! - [`DispatchError`] - Dispatch-related errors
//! - [`ActionError`] - Action execution errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod controller;
mod error;
mod scope;

// Re-exports
pub use args::{Args, RespondWith, coerce_args};
pub use controller::{Controller, FromArgs};
pub use error::{ActionError, BoxError, DispatchError, UsherError};
pub use scope::{Renderer, Scope};

/// The dynamic value type flowing through dispatch: arguments, action
/// results, and respond-with state are all [`serde_json::Value`]s.
pub use serde_json::Value;
