//! RegistryBuilder for constructing an immutable Registry.

use crate::{FieldDef, FieldType, Registry, ResolveError, TypeDef};
use graft_core::{Arguments, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("duplicate field name: {type_name}.{field}")]
    DuplicateFieldName { type_name: String, field: String },

    #[error("unknown result type {referenced} on field {type_name}.{field}")]
    UnknownResultType {
        type_name: String,
        field: String,
        referenced: String,
    },
}

/// Builder for constructing an immutable Registry.
///
/// Types are declared through scoped [`TypeBuilder`]s; `build()` validates
/// the whole table (no duplicate names, every object/list field referring to
/// a registered type) and freezes it.
#[derive(Default)]
pub struct RegistryBuilder {
    /// Types in declaration order, fields in declaration order.
    types: Vec<(String, Vec<(String, FieldDef)>)>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type definition.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        TypeBuilder {
            builder: self,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut types: HashMap<String, TypeDef> = HashMap::new();

        for (type_name, fields) in &self.types {
            if types.contains_key(type_name) {
                return Err(RegistryError::DuplicateTypeName(type_name.clone()));
            }
            let mut def = TypeDef::new(type_name.clone());
            for (field_name, field_def) in fields {
                if def.has_field(field_name) {
                    return Err(RegistryError::DuplicateFieldName {
                        type_name: type_name.clone(),
                        field: field_name.clone(),
                    });
                }
                def.fields.insert(field_name.clone(), field_def.clone());
            }
            types.insert(type_name.clone(), def);
        }

        // Every object/list field must point at a registered type.
        for (type_name, fields) in &self.types {
            for (field_name, field_def) in fields {
                if let Some(referenced) = field_def.field_type.type_name() {
                    if !types.contains_key(referenced) {
                        return Err(RegistryError::UnknownResultType {
                            type_name: type_name.clone(),
                            field: field_name.clone(),
                            referenced: referenced.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Registry::new(types))
    }
}

/// Scoped builder for one type's fields.
pub struct TypeBuilder<'b> {
    builder: &'b mut RegistryBuilder,
    name: String,
    fields: Vec<(String, FieldDef)>,
}

impl<'b> TypeBuilder<'b> {
    /// Add a scalar pass-through field (no resolver; read off the parent).
    pub fn passthrough(mut self, name: impl Into<String>) -> Self {
        self.fields.push((name.into(), FieldDef::passthrough()));
        self
    }

    /// Add a resolved field with the given declared result type.
    pub fn field<F>(mut self, name: impl Into<String>, field_type: FieldType, resolver: F) -> Self
    where
        F: Fn(&Value, &Arguments) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        self.fields
            .push((name.into(), FieldDef::resolved(field_type, resolver)));
        self
    }

    /// Finish this type and return to the registry builder.
    pub fn finish(self) {
        self.builder.types.push((self.name, self.fields));
    }
}
