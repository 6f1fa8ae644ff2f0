//! Module identity and requirements.
//!
//! A module is a named unit together with the ordered list of module names it
//! requires. Modules are owned by the registry; the resolver only reads them.

use serde::{Deserialize, Serialize};

/// A named module and its direct requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Unique module name
    pub name: String,
    /// Names of modules this module depends on, in declared order.
    /// May be empty, and may reference names the registry does not know.
    #[serde(default)]
    pub requires: Vec<String>,
}

impl Module {
    /// Create a module with no requirements
    pub fn new(name: String) -> Self {
        Self {
            name,
            requires: Vec::new(),
        }
    }

    /// Create a module with the given requirements
    pub fn with_requires(name: String, requires: Vec<String>) -> Self {
        Self { name, requires }
    }

    /// Add a requirement to this module
    pub fn requiring(mut self, name: String) -> Self {
        self.requires.push(name);
        self
    }

    /// Check if this module directly requires `name`
    pub fn requires_module(&self, name: &str) -> bool {
        self.requires.iter().any(|r| r == name)
    }

    /// Check if this is a valid module name
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
            && !name.starts_with('-')
            && !name.ends_with('-')
    }
}
