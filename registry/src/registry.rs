//! The Registry - immutable schema lookup.

use crate::{FieldDef, TypeDef};
use std::collections::HashMap;

/// The Registry provides runtime lookup of field definitions.
/// It is immutable after construction (use RegistryBuilder).
#[derive(Debug, Default)]
pub struct Registry {
    /// Type definitions by name.
    types: HashMap<String, TypeDef>,
}

impl Registry {
    /// Conventional execution root type name.
    pub const ROOT_TYPE: &'static str = "Query";

    pub(crate) fn new(types: HashMap<String, TypeDef>) -> Self {
        Self { types }
    }

    /// Get a type definition by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Check if a type is registered.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Look up a field definition under a type.
    ///
    /// Returns `None` when either the type or the field is unknown; callers
    /// decide what a miss means (the executor falls back to a property
    /// read).
    pub fn lookup(&self, type_name: &str, field_name: &str) -> Option<&FieldDef> {
        self.types
            .get(type_name)
            .and_then(|t| t.get_field(field_name))
    }

    /// Get the number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Get all type definitions.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }
}
