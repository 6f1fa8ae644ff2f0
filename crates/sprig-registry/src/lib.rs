//! Module registry seam for Sprig
//!
//! The registry owns module definitions and answers name lookups. It is an
//! external collaborator from the resolver's point of view: the resolver only
//! ever calls [`ModuleRegistry::module`] and never mutates registry state.

pub mod memory;

// Re-export main types
pub use memory::MemoryRegistry;

use sprig_core::Module;

/// Synchronous, read-only module lookup.
///
/// Implementations must be pure per call: the same name yields the same
/// answer for the duration of one resolution.
pub trait ModuleRegistry {
    /// Look up a module by name
    fn module(&self, name: &str) -> Option<Module>;

    /// Check whether a module is registered
    fn contains(&self, name: &str) -> bool {
        self.module(name).is_some()
    }
}
