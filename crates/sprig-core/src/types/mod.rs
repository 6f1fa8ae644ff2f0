//! Core data types.
//!
//! Defines the `Module` type shared by the registry, resolver, and installer.

mod module;

pub use module::Module;
