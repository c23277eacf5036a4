//! Error types for Usher.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`UsherError`] - Top-level error type for all Usher operations
//! - [`DispatchError`] - Errors while dispatching a `"key#action"` target
//! - [`ActionError`] - Errors from a single controller action

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Usher operations.
#[derive(Error, Debug)]
pub enum UsherError {
    /// An error occurred during controller dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while dispatching a `"key#action"` target.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The target string has no `#` separator, or the key before it is empty.
    #[error("malformed dispatch target: {target:?}")]
    MalformedTarget {
        /// The offending target string.
        target: String,
    },

    /// No controller is registered under the parsed key.
    #[error("no controller registered for key: {key}")]
    UnresolvedController {
        /// The controller key parsed from the target.
        key: String,
    },

    /// The resolved controller does not answer to the requested action.
    #[error("controller {key} has no action: {action}")]
    NoSuchAction {
        /// The controller key parsed from the target.
        key: String,
        /// The requested action name.
        action: String,
    },

    /// Constructing the controller instance failed.
    ///
    /// The underlying constructor or factory error is surfaced unchanged.
    #[error(transparent)]
    Instantiation(BoxError),

    /// The action ran and failed.
    ///
    /// The underlying action error is surfaced unchanged.
    #[error(transparent)]
    Action(BoxError),
}

/// Errors returned by [`Controller::call`].
///
/// [`Controller::call`]: crate::Controller::call
#[derive(Error, Debug)]
pub enum ActionError {
    /// The controller has no action by this name.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The action ran and failed.
    #[error(transparent)]
    Failed(BoxError),
}

// Convenience conversions
impl From<BoxError> for UsherError {
    fn from(err: BoxError) -> Self {
        UsherError::Custom(err)
    }
}

impl From<BoxError> for ActionError {
    fn from(err: BoxError) -> Self {
        ActionError::Failed(err)
    }
}
