//! Graft Registry
//!
//! This crate provides the static schema table consulted during execution:
//! - Field definitions (resolver capability + declared result type)
//! - The immutable `Registry` with type/field lookup
//! - `RegistryBuilder` with build-time validation
//! - The resolver contract and its error vocabulary

mod builder;
mod error;
mod registry;
mod types;

pub use builder::*;
pub use error::*;
pub use registry::*;
pub use types::*;
