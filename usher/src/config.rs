//! Dispatch configuration.

use crate::inject::Inject;
use crate::registry::Registration;
use usher_core::Value;

/// Configuration consumed once per application instance.
///
/// # Example
///
/// ```rust,ignore
/// let controllers = Controllers::configure(
///     Config::new()
///         .controllers(controllers![Hello, Ola])
///         .inject(Inject::from(json!([42]))),
/// );
/// ```
#[derive(Default)]
pub struct Config {
    /// Controllers to register at configure time.
    pub controllers: Option<Registration>,

    /// Default injection source, used when a dispatch passes none.
    pub inject: Option<Inject>,

    /// Reserved for future positional-argument defaults; stored, never read.
    pub args: Option<Value>,
}

impl Config {
    /// An empty configuration: nothing registered, no default injection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controllers registered at configure time.
    pub fn controllers(mut self, registration: impl Into<Registration>) -> Self {
        self.controllers = Some(registration.into());
        self
    }

    /// Set the default injection source.
    pub fn inject(mut self, inject: impl Into<Inject>) -> Self {
        self.inject = Some(inject.into());
        self
    }

    /// Set the reserved default arguments.
    pub fn args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }
}
