//! Positional arguments and the respond-with value model.

use serde_json::Value;

/// A positional argument list, as handed to constructors and actions.
pub type Args = Vec<Value>;

/// Controller-produced state destined for the caller's rendering scope.
///
/// Applied with fallback semantics: a field is only written when the scope
/// does not already bind it.
pub type RespondWith = serde_json::Map<String, Value>;

/// Coerce a value into a positional argument list.
///
/// The same rule covers injection results and explicit action arguments:
/// null becomes the empty list, an array is taken as-is, and any other value
/// becomes a single-element list.
pub fn coerce_args(value: Value) -> Args {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}
