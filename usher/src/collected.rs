//! Distributed controller registration via `inventory`.
//!
//! Controllers submitted anywhere in the dependency graph with
//! `submit_controller!` are gathered at runtime by
//! [`Controllers::register_collected`].
//!
//! [`Controllers::register_collected`]: crate::Controllers::register_collected

use crate::descriptor::Descriptor;
use crate::registry::ControllerDef;

/// A controller definition submitted to the distributed collection.
///
/// Inventory iterates submissions by reference, so the descriptor is built
/// through a factory function at collection time rather than stored.
pub struct CollectedController {
    /// The type name the registry key is derived from.
    pub name: &'static str,

    /// Builds a fresh descriptor for registration.
    pub build: fn() -> Descriptor,
}

impl CollectedController {
    /// Create a new collected controller entry.
    pub const fn new(name: &'static str, build: fn() -> Descriptor) -> Self {
        Self { name, build }
    }

    /// The controller definition this submission registers.
    pub fn def(&self) -> ControllerDef {
        ControllerDef::new(self.name, self.build)
    }
}

inventory::collect!(CollectedController);

/// Gather every submitted controller definition.
pub fn collect_controllers() -> Vec<ControllerDef> {
    inventory::iter::<CollectedController>
        .into_iter()
        .map(CollectedController::def)
        .collect()
}

/// Submit a constructible controller type to the distributed collection.
///
/// # Example
///
/// ```rust,ignore
/// struct HealthController;
/// // impl Controller + FromArgs ...
///
/// usher::submit_controller!(HealthController);
/// ```
#[macro_export]
macro_rules! submit_controller {
    ($ty:ty) => {
        $crate::inventory::submit! {
            $crate::CollectedController::new(stringify!($ty), || {
                $crate::Descriptor::construct::<$ty>()
            })
        }
    };
}
