//! Module installation for Sprig
//!
//! Drives a resolved install plan onto a module host, one install call at a
//! time. The host is an external collaborator reached through the
//! [`ModuleHost`] trait; this crate also ships [`MemoryHost`], an in-memory
//! target used by tests and benchmarks.

pub mod host;
pub mod sequencer;

// Re-export main types
pub use host::{HostError, MemoryHost, ModuleHost};
pub use sequencer::{InstallReport, Installer};

pub use sprig_core::{SprigError, SprigResult};
