//! In-memory module registry
//!
//! Thread-safe name → module store. Suitable as the registry collaborator for
//! tests, benchmarks, and embedders that assemble module sets in code or load
//! them from a JSON module list.

use dashmap::DashMap;
use tracing::debug;

use sprig_core::Module;

use crate::ModuleRegistry;

/// In-memory, thread-safe module registry
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    /// Registered modules by name
    modules: DashMap<String, Module>,
}

impl MemoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            modules: DashMap::new(),
        }
    }

    /// Create a registry from an iterator of modules
    pub fn from_modules<I>(modules: I) -> Self
    where
        I: IntoIterator<Item = Module>,
    {
        let registry = Self::new();
        registry.extend(modules);
        registry
    }

    /// Create a registry from a JSON module list.
    ///
    /// The expected shape is an array of objects with `name` and an optional
    /// `requires` array, e.g. `[{"name": "module2", "requires": ["module1"]}]`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let modules: Vec<Module> = serde_json::from_str(json)?;
        debug!(count = modules.len(), "loaded module list from JSON");
        Ok(Self::from_modules(modules))
    }

    /// Register a module, replacing any existing module with the same name
    pub fn insert(&self, module: Module) {
        self.modules.insert(module.name.clone(), module);
    }

    /// Register every module in the iterator
    pub fn extend<I>(&self, modules: I)
    where
        I: IntoIterator<Item = Module>,
    {
        for module in modules {
            self.insert(module);
        }
    }

    /// Remove a module by name, returning it if it was registered
    pub fn remove(&self, name: &str) -> Option<Module> {
        self.modules.remove(name).map(|(_, module)| module)
    }

    /// Get number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Remove all registered modules
    pub fn clear(&self) {
        self.modules.clear();
    }
}

impl ModuleRegistry for MemoryRegistry {
    fn module(&self, name: &str) -> Option<Module> {
        self.modules.get(name).map(|entry| entry.value().clone())
    }

    fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }
}
