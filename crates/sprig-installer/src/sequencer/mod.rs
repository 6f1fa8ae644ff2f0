//! Install sequencing
//!
//! Drives one `install_module` invocation end to end: expand the requirement
//! closure, reject cycles, snapshot the host's installed set, plan, then issue
//! install calls strictly one at a time. Resolution failures happen before the
//! first install call; an install failure stops the run with completed steps
//! left in place.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use sprig_core::{SprigError, SprigResult};
use sprig_registry::ModuleRegistry;
use sprig_resolver::{InstallPlan, RequirementGraph};

use crate::host::ModuleHost;

/// Resolves a module's requirement closure and installs it onto hosts.
///
/// Holds only the registry; all install state lives with the host passed to
/// each call, so one installer can serve any number of hosts.
#[derive(Debug)]
pub struct Installer<R> {
    /// Registry the requirement closure is expanded against
    registry: Arc<R>,
}

/// Outcome of a successful `install_module` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Module the installation was requested for
    pub root: String,
    /// Names installed by this call, in install order
    pub installed: Vec<String>,
    /// Closure members that were already installed and were skipped
    pub skipped: usize,
    /// Wall-clock time of the whole call in milliseconds
    pub duration_ms: u64,
}

impl<R: ModuleRegistry> Installer<R> {
    /// Create a new installer over the given registry
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Install `module_name` and everything it transitively requires.
    ///
    /// Every requirement is installed before its dependents, nothing is
    /// installed twice, and install calls are strictly sequential: the next
    /// call is only issued once the previous one has completed successfully.
    /// The first host failure stops the run; completed installs are not
    /// rolled back. An empty plan succeeds with zero install calls.
    pub async fn install_module<H>(&self, host: &H, module_name: &str) -> SprigResult<InstallReport>
    where
        H: ModuleHost,
    {
        let start_time = Instant::now();

        // Resolution phase: pure validation, no side effects on the host
        let graph = RequirementGraph::expand(module_name, self.registry.as_ref())?;
        graph.validate_acyclic()?;

        let installed = self.snapshot(host).await?;
        let plan = graph.install_plan(&installed)?;
        let skipped = graph.module_count() - plan.len();

        info!(
            root = %module_name,
            steps = plan.len(),
            skipped,
            "installing module"
        );

        let mut installed_now = Vec::with_capacity(plan.len());
        for name in plan.steps() {
            debug!(module = %name, "installing");
            host.install_one(name)
                .await
                .map_err(|source| SprigError::InstallFailure {
                    name: name.clone(),
                    source,
                })?;
            installed_now.push(name.clone());
        }

        let duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            root = %module_name,
            installed = installed_now.len(),
            duration_ms,
            "install complete"
        );

        Ok(InstallReport {
            root: module_name.to_string(),
            installed: installed_now,
            skipped,
            duration_ms,
        })
    }

    /// Compute the install plan for `module_name` without installing anything.
    ///
    /// Runs the full resolution phase (expansion, cycle check, installed-set
    /// diff) and issues zero install calls.
    pub async fn plan_install<H>(&self, host: &H, module_name: &str) -> SprigResult<InstallPlan>
    where
        H: ModuleHost,
    {
        let graph = RequirementGraph::expand(module_name, self.registry.as_ref())?;
        graph.validate_acyclic()?;
        let installed = self.snapshot(host).await?;
        graph.install_plan(&installed)
    }

    async fn snapshot<H: ModuleHost>(&self, host: &H) -> SprigResult<HashSet<String>> {
        let names = host
            .installed_module_names()
            .await
            .map_err(|source| SprigError::SnapshotFailure { source })?;
        Ok(names.into_iter().collect())
    }
}
