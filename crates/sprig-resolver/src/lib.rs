//! Dependency resolution engine for Sprig
//!
//! This crate expands a root module's transitive requirement closure against a
//! registry, rejects cyclic requirement graphs, and produces dependency-first
//! install plans. It performs no installation itself; driving the plan is the
//! installer crate's job.

pub mod graph;
pub mod order;

// Re-export main types
pub use graph::RequirementGraph;
pub use order::InstallPlan;

pub use sprig_core::{SprigError, SprigResult};
