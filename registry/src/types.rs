//! Schema definition types.

use crate::ResolveError;
use graft_core::{Arguments, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Declared result type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Plain scalar value.
    Scalar,
    /// A single object of the named type.
    Object(String),
    /// A list of objects of the named type.
    List(String),
}

impl FieldType {
    pub fn object(name: impl Into<String>) -> Self {
        FieldType::Object(name.into())
    }

    pub fn list(name: impl Into<String>) -> Self {
        FieldType::List(name.into())
    }

    /// Returns true for list-shaped fields.
    pub fn is_list(&self) -> bool {
        matches!(self, FieldType::List(_))
    }

    /// The named type, if any.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            FieldType::Scalar => None,
            FieldType::Object(name) | FieldType::List(name) => Some(name),
        }
    }

    /// Type name child selections are interpreted against.
    ///
    /// Scalar fields have no inner type; children looked up under the empty
    /// name miss the registry and fall back to property reads.
    pub fn inner_name(&self) -> &str {
        self.type_name().unwrap_or("")
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar => write!(f, "scalar"),
            FieldType::Object(name) => write!(f, "{}", name),
            FieldType::List(name) => write!(f, "[{}]", name),
        }
    }
}

/// Resolver capability: computes a field's value from its parent object and
/// arguments. The executor never inspects a resolver beyond its return
/// shape, and always hands it the immediate parent of the field being
/// resolved.
pub type Resolver = Arc<dyn Fn(&Value, &Arguments) -> Result<Value, ResolveError> + Send + Sync>;

/// A field definition: optional resolver plus declared result type.
///
/// Absence of a resolver marks a scalar pass-through field, read directly
/// off the parent object's same-named property.
#[derive(Clone)]
pub struct FieldDef {
    pub resolver: Option<Resolver>,
    pub field_type: FieldType,
}

impl FieldDef {
    /// A pass-through field: no resolver, scalar result.
    pub fn passthrough() -> Self {
        Self {
            resolver: None,
            field_type: FieldType::Scalar,
        }
    }

    /// A resolved field with the given declared result type.
    pub fn resolved<F>(field_type: FieldType, resolver: F) -> Self
    where
        F: Fn(&Value, &Arguments) -> Result<Value, ResolveError> + Send + Sync + 'static,
    {
        Self {
            resolver: Some(Arc::new(resolver)),
            field_type,
        }
    }

    /// Returns true if this field reads straight off the parent.
    pub fn is_passthrough(&self) -> bool {
        self.resolver.is_none()
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("resolver", &self.resolver.is_some())
            .field("field_type", &self.field_type)
            .finish()
    }
}

/// A schema type: a named set of field definitions.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Type name.
    pub name: String,
    /// Field definitions by name.
    pub fields: HashMap<String, FieldDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Check if this type has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|s| s.as_str())
    }
}
