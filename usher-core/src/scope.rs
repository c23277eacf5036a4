//! Host collaborator traits: the caller's view scope and the render trigger.

use serde_json::Value;

/// Read/write access to named fields of the caller's rendering context.
///
/// Injection callables receive the scope read-only, so constructor arguments
/// can be derived from caller state. Respond-with propagation writes through
/// [`Scope::set`], guarded by [`Scope::contains`]: the first binding of a
/// field wins.
pub trait Scope {
    /// Look up a field by name.
    fn get(&self, name: &str) -> Option<&Value>;

    /// Whether the scope already binds the field.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Bind a field, overwriting any existing value.
    fn set(&mut self, name: &str, value: Value);
}

/// The rendering trigger of the hosting framework.
///
/// Only `controller_action` touches this seam, with the conventional
/// `"key/action"` view path; plain `dispatch` never renders.
pub trait Renderer {
    /// Render the view at the given path.
    fn render(&mut self, view_path: &str);
}

// Common Scope implementations

impl Scope for std::collections::HashMap<String, Value> {
    fn get(&self, name: &str) -> Option<&Value> {
        std::collections::HashMap::get(self, name)
    }

    fn set(&mut self, name: &str, value: Value) {
        self.insert(name.to_string(), value);
    }
}

impl Scope for serde_json::Map<String, Value> {
    fn get(&self, name: &str) -> Option<&Value> {
        serde_json::Map::get(self, name)
    }

    fn set(&mut self, name: &str, value: Value) {
        self.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn hashmap_scope_roundtrip() {
        let mut scope = HashMap::new();
        assert!(!scope.contains("title"));

        scope.set("title", json!("Widgets"));
        assert!(scope.contains("title"));
        assert_eq!(Scope::get(&scope, "title"), Some(&json!("Widgets")));
    }
}
