//! The controller registry and registration merging.

use crate::descriptor::Descriptor;
use crate::naming::underscore;
use std::collections::HashMap;

/// A named source of a controller descriptor.
///
/// The registry key is derived from `name` by the normalizer, so
/// `"WidgetsController"` lands under `"widgets"` and `"Admin::Users"` under
/// `"admin/users"`. The `controller!` macro builds one of these from a type.
#[derive(Clone, Debug)]
pub struct ControllerDef {
    /// The type name the registry key is derived from.
    pub name: &'static str,

    /// Builds the descriptor to register.
    pub build: fn() -> Descriptor,
}

impl ControllerDef {
    /// Define a controller under the given type name.
    pub const fn new(name: &'static str, build: fn() -> Descriptor) -> Self {
        Self { name, build }
    }

    /// The registry key this definition registers under.
    pub fn key(&self) -> String {
        underscore(self.name)
    }
}

/// The shapes accepted by registration.
///
/// Mirrors the permissive registration contract: a keyed entry, a whole
/// table, a batch registered element by element, a named controller whose
/// key is derived from its type name, or nothing at all. Unrecognized
/// shapes map to [`Registration::Skip`] and are ignored by design rather
/// than rejected, so heterogeneous collections can be registered wholesale.
#[derive(Clone, Debug)]
pub enum Registration {
    /// Insert or overwrite a single keyed entry.
    Entry(String, Descriptor),

    /// Merge a whole table; same-key entries overwrite.
    Table(HashMap<String, Descriptor>),

    /// Register each element in turn.
    Batch(Vec<Registration>),

    /// Register a named controller under its derived key.
    Controller(ControllerDef),

    /// Deliberately register nothing.
    Skip,
}

impl From<(String, Descriptor)> for Registration {
    fn from((key, descriptor): (String, Descriptor)) -> Self {
        Registration::Entry(key, descriptor)
    }
}

impl From<(&str, Descriptor)> for Registration {
    fn from((key, descriptor): (&str, Descriptor)) -> Self {
        Registration::Entry(key.to_string(), descriptor)
    }
}

impl From<HashMap<String, Descriptor>> for Registration {
    fn from(table: HashMap<String, Descriptor>) -> Self {
        Registration::Table(table)
    }
}

impl From<Vec<Registration>> for Registration {
    fn from(batch: Vec<Registration>) -> Self {
        Registration::Batch(batch)
    }
}

impl From<ControllerDef> for Registration {
    fn from(def: ControllerDef) -> Self {
        Registration::Controller(def)
    }
}

impl From<Vec<ControllerDef>> for Registration {
    fn from(defs: Vec<ControllerDef>) -> Self {
        Registration::Batch(defs.into_iter().map(Registration::Controller).collect())
    }
}

impl From<()> for Registration {
    fn from(_: ()) -> Self {
        Registration::Skip
    }
}

/// The process-wide mapping from registry key to controller descriptor.
///
/// Keys are unique and re-registration overwrites; lookup is by key only.
/// Thread safety is the owner's concern: the dispatcher keeps a `Registry`
/// behind an `RwLock` so registration may race with in-flight dispatches.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, Descriptor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one entry.
    pub fn insert(&mut self, key: impl Into<String>, descriptor: Descriptor) {
        let key = key.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, descriptor = ?descriptor, "registering controller");

        self.entries.insert(key, descriptor);
    }

    /// Resolve a key to its descriptor.
    pub fn resolve(&self, key: &str) -> Option<Descriptor> {
        self.entries.get(key).cloned()
    }

    /// Whether a controller is registered under the key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Apply a registration shape, recursing through batches.
    pub fn apply(&mut self, registration: Registration) {
        match registration {
            Registration::Entry(key, descriptor) => self.insert(key, descriptor),
            Registration::Table(table) => {
                for (key, descriptor) in table {
                    self.insert(key, descriptor);
                }
            }
            Registration::Batch(batch) => {
                for each in batch {
                    self.apply(each);
                }
            }
            Registration::Controller(def) => self.insert(def.key(), (def.build)()),
            Registration::Skip => {}
        }
    }

    /// Get the number of registered controllers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
