//! Module host seam
//!
//! A host is the target installs land on: it reports the installed-set
//! snapshot and performs single-module installs. Hosts own all install state;
//! the sequencer only reads the snapshot once per run and issues ordered
//! install calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use indexmap::IndexSet;

use sprig_registry::ModuleRegistry;

/// Opaque error reported by a host; surfaced to callers verbatim
pub type HostError = sprig_core::BoxError;

/// Asynchronous install target.
///
/// `install_one` installs exactly one module and may assume its requirements
/// are already installed; the sequencer guarantees call order. Failures are
/// opaque to the core and stop the remaining plan.
#[async_trait]
pub trait ModuleHost: Send + Sync {
    /// Read a snapshot of currently installed module names
    async fn installed_module_names(&self) -> Result<Vec<String>, HostError>;

    /// Install exactly one module
    async fn install_one(&self, name: &str) -> Result<(), HostError>;
}

/// In-memory module host.
///
/// Preserves install order, counts `install_one` calls, and — when built with
/// [`MemoryHost::verifying`] — rejects installs that would double-install a
/// module or land it before one of its declared requirements.
#[derive(Default)]
pub struct MemoryHost {
    /// Installed names in install order
    installed: Mutex<IndexSet<String>>,
    /// Number of install_one calls received, failed ones included
    install_calls: AtomicUsize,
    /// Registry used to verify requirement presence on every install
    registry: Option<Arc<dyn ModuleRegistry + Send + Sync>>,
}

impl MemoryHost {
    /// Create an empty host with no verification
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty host that verifies every install against the registry:
    /// double installs and installs with missing requirements are rejected.
    pub fn verifying(registry: Arc<dyn ModuleRegistry + Send + Sync>) -> Self {
        Self {
            installed: Mutex::new(IndexSet::new()),
            install_calls: AtomicUsize::new(0),
            registry: Some(registry),
        }
    }

    /// Seed an installed module without counting an install call
    pub fn preinstall(&self, name: String) {
        if let Ok(mut installed) = self.installed.lock() {
            installed.insert(name);
        }
    }

    /// Get installed names in the order they were installed
    pub fn installed_names(&self) -> Vec<String> {
        self.installed
            .lock()
            .map(|installed| installed.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Check if a module is installed
    pub fn is_installed(&self, name: &str) -> bool {
        self.installed
            .lock()
            .map(|installed| installed.contains(name))
            .unwrap_or(false)
    }

    /// Get number of install_one calls received so far
    pub fn install_calls(&self) -> usize {
        self.install_calls.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHost")
            .field("installed", &self.installed_names())
            .field("install_calls", &self.install_calls())
            .field("verifying", &self.registry.is_some())
            .finish()
    }
}

#[async_trait]
impl ModuleHost for MemoryHost {
    async fn installed_module_names(&self) -> Result<Vec<String>, HostError> {
        Ok(self.installed_names())
    }

    async fn install_one(&self, name: &str) -> Result<(), HostError> {
        self.install_calls.fetch_add(1, Ordering::SeqCst);

        let mut installed = self
            .installed
            .lock()
            .map_err(|_| "installed-set lock poisoned")?;

        if installed.contains(name) {
            return Err(format!("module '{name}' is already installed").into());
        }

        if let Some(registry) = &self.registry {
            let module = registry
                .module(name)
                .ok_or_else(|| format!("module '{name}' is not registered"))?;
            for requirement in &module.requires {
                if !installed.contains(requirement.as_str()) {
                    return Err(format!(
                        "module '{name}' installed before its requirement '{requirement}'"
                    )
                    .into());
                }
            }
        }

        installed.insert(name.to_string());
        Ok(())
    }
}
