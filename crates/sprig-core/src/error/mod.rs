//! Error types and result aliases for Sprig operations.
//!
//! Provides a unified error type that covers all possible error conditions
//! across the Sprig crates with actionable error messages.

use thiserror::Error;

/// Opaque error reported by an external collaborator (host or installer)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for all Sprig operations
#[derive(Error, Debug)]
pub enum SprigError {
    // Resolution errors
    #[error("Module '{name}' not found in registry")]
    ModuleUnknown { name: String },

    #[error("Module '{required_by}' requires '{name}', which is not in the registry")]
    UnresolvedRequirement { name: String, required_by: String },

    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    // Installation errors
    #[error("Failed to install module '{name}'")]
    InstallFailure {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to read installed module names from host")]
    SnapshotFailure {
        #[source]
        source: BoxError,
    },
}

/// Result type alias for Sprig operations
pub type SprigResult<T> = Result<T, SprigError>;

/// The closed set of error kinds surfaced to callers.
///
/// Resolution-phase kinds are detected before any install call is issued and
/// leave no partial state; `Install` may leave some modules installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested root module is not present in the registry
    ModuleUnknown,
    /// The dependency graph contains a cycle or an unresolvable requirement
    DependencyResolution,
    /// An external host call failed
    Install,
}

impl SprigError {
    /// Create an install failure from whatever the host reported
    pub fn install<E>(name: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InstallFailure {
            name,
            source: Box::new(source),
        }
    }

    /// Classify this error into the closed kind taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            SprigError::ModuleUnknown { .. } => ErrorKind::ModuleUnknown,
            SprigError::UnresolvedRequirement { .. } | SprigError::CircularDependency { .. } => {
                ErrorKind::DependencyResolution
            },
            SprigError::InstallFailure { .. } | SprigError::SnapshotFailure { .. } => {
                ErrorKind::Install
            },
        }
    }

    /// Check if retrying the whole operation can succeed without intervention.
    ///
    /// Install-phase failures are retryable: a retried resolution recomputes
    /// the plan against the new installed set and skips what already
    /// succeeded. Resolution-phase failures need the registry fixed first.
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::Install
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SprigError::ModuleUnknown { .. } => {
                Some("Check the module name spelling or register the module first")
            },
            SprigError::UnresolvedRequirement { .. } => {
                Some("Register the missing requirement or remove it from the module")
            },
            SprigError::CircularDependency { .. } => {
                Some("Remove circular requirements by restructuring your modules")
            },
            SprigError::InstallFailure { .. } | SprigError::SnapshotFailure { .. } => {
                Some("Check the host and retry; already-installed modules are skipped")
            },
        }
    }
}
