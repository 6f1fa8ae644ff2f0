//! # sprig-core
//!
//! Core types and utilities shared across all Sprig crates.
//!
//! This crate provides:
//! - The `Module` type: a named unit with an ordered list of required modules
//! - The `SprigError` enum for unified error handling, with the closed
//!   `ErrorKind` taxonomy surfaced to callers
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Module)
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{BoxError, ErrorKind, SprigError, SprigResult};
pub use types::Module;
