//! Graft Core Types
//!
//! This crate provides the foundational types used throughout the graft
//! engine:
//! - The `Value` enum (scalars, objects, lists) shared by backing data and
//!   result trees
//! - `ValueMap`, the ordered field-name-to-value mapping
//! - Argument types (`ArgValue`, `Arguments`) passed to resolvers

mod args;
mod map;
mod value;

pub use args::*;
pub use map::*;
pub use value::*;
