//! Testing utilities for Usher.
//!
//! This module provides utilities to make testing controllers and host
//! integrations easier.
//!
//! # Features
//!
//! - [`TestScope`]: a map-backed scope that records every write
//! - [`RecordingRenderer`]: a renderer that records requested view paths
//! - [`StaticController`]: a controller answering any action with a fixed
//!   value

use usher_core::{ActionError, Controller, Renderer, Scope, Value};

// ============================================================================
// Test Scope
// ============================================================================

/// A map-backed [`Scope`] that records every write.
///
/// # Example
///
/// ```rust,ignore
/// let mut scope = TestScope::new().with("title", json!("kept"));
///
/// controllers.dispatch("widgets#index", &mut scope)?;
///
/// assert_eq!(scope.get("title"), Some(&json!("kept")));
/// assert_eq!(scope.writes(), vec!["items".to_string()]);
/// ```
#[derive(Default)]
pub struct TestScope {
    fields: std::collections::HashMap<String, Value>,
    writes: Vec<String>,
}

impl TestScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-bind a field, as if the caller had set it before dispatching.
    ///
    /// Not recorded as a write.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// The field names written through [`Scope::set`], in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.clone()
    }
}

impl Scope for TestScope {
    fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn set(&mut self, name: &str, value: Value) {
        self.writes.push(name.to_string());
        self.fields.insert(name.to_string(), value);
    }
}

// ============================================================================
// Recording Renderer
// ============================================================================

/// A [`Renderer`] that records every requested view path.
///
/// # Example
///
/// ```rust,ignore
/// let mut renderer = RecordingRenderer::new();
///
/// controllers.controller_action("widgets#index", &mut scope, &mut renderer, Dispatch::new())?;
///
/// assert_eq!(renderer.paths(), vec!["widgets/index".to_string()]);
/// ```
#[derive(Default)]
pub struct RecordingRenderer {
    paths: Vec<String>,
}

impl RecordingRenderer {
    /// Create a new recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The view paths rendered, in order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view_path: &str) {
        self.paths.push(view_path.to_string());
    }
}

// ============================================================================
// Static Controller
// ============================================================================

/// A controller answering any action with a fixed value.
///
/// Useful as a plain-value descriptor in registration tests.
pub struct StaticController {
    value: Value,
}

impl StaticController {
    /// Create a controller that returns `value` for every action.
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl Controller for StaticController {
    fn call(&mut self, _action: &str, _args: &[Value]) -> Result<Value, ActionError> {
        Ok(self.value.clone())
    }
}
