//! Selection execution.

use graft_core::{Value, ValueMap};
use graft_parser::Field;
use graft_registry::Registry;

use crate::ExecResult;

/// Walks a parsed selection against the registry, resolving each field from
/// its immediate parent value.
///
/// Recursion is driven by the finite selection tree, so execution
/// terminates even when the schema graph is cyclic; depth equals the
/// nesting depth of the query text.
pub struct Executor<'r> {
    registry: &'r Registry,
}

impl<'r> Executor<'r> {
    /// Create a new executor over a shared registry.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Execute a selection set against a root value of the given type.
    ///
    /// The result holds exactly the requested field names, in request
    /// order, at every nesting level.
    pub fn execute(
        &self,
        selection: &[Field],
        root_type: &str,
        root: &Value,
    ) -> ExecResult<ValueMap> {
        tracing::debug!(fields = selection.len(), root_type, "executing selection");
        self.execute_selection(selection, root_type, root)
    }

    fn execute_selection(
        &self,
        selection: &[Field],
        type_name: &str,
        parent: &Value,
    ) -> ExecResult<ValueMap> {
        let mut out = ValueMap::with_capacity(selection.len());
        for field in selection {
            let value = self.execute_field(field, type_name, parent)?;
            out.insert(field.name.clone(), value);
        }
        Ok(out)
    }

    /// Resolve a single field, recursing into its sub-selection when the
    /// resolved value is composite.
    fn execute_field(&self, field: &Field, type_name: &str, parent: &Value) -> ExecResult<Value> {
        let Some(def) = self.registry.lookup(type_name, &field.name) else {
            // Unknown fields read through to the parent rather than failing.
            return Ok(property_of(parent, &field.name));
        };

        let Some(resolver) = def.resolver.as_ref() else {
            // Pass-through: the value lives on the parent object.
            return Ok(property_of(parent, &field.name));
        };

        tracing::trace!(field = %field.name, parent_type = type_name, "invoking resolver");
        let resolved = resolver(parent, &field.arguments)?;

        if field.selection.is_empty() {
            // No sub-selection: the raw result is returned unchanged, even
            // when composite.
            return Ok(resolved);
        }

        let inner = def.field_type.inner_name();
        match resolved {
            Value::List(items) if def.field_type.is_list() => {
                let mut rows = Vec::with_capacity(items.len());
                for item in &items {
                    let row = self.execute_selection(&field.selection, inner, item)?;
                    rows.push(Value::Object(row));
                }
                Ok(Value::List(rows))
            }
            Value::Object(map) => {
                let object = Value::Object(map);
                let row = self.execute_selection(&field.selection, inner, &object)?;
                Ok(Value::Object(row))
            }
            other => Ok(other),
        }
    }
}

/// Same-named property off an object parent; `Null` when the parent is not
/// an object or lacks the property.
fn property_of(parent: &Value, name: &str) -> Value {
    match parent.as_object() {
        Some(map) => map.get(name).cloned().unwrap_or(Value::Null),
        None => Value::Null,
    }
}
