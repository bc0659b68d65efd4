//! Schema validation utilities.
//!
//! Checks that would otherwise surface as broken IDL rather than as a
//! resolution failure.

use crate::error::SchemaError;
use crate::registry::TypeRegistry;
use crate::structs::StructDef;
use crate::types::Schema;
use std::collections::HashSet;

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError::Validation` for empty names, duplicate field names
/// within one struct, or a struct that extends itself.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    for struct_def in &schema.structs {
        validate_struct(&struct_def.name, struct_def)?;
    }

    for namespace in &schema.namespaces {
        if namespace.name.is_empty() {
            return Err(SchemaError::Validation {
                message: "Namespace with empty name".to_string(),
            });
        }
        for struct_def in &namespace.structs {
            validate_struct(&namespace.qualify(&struct_def.name), struct_def)?;
        }
    }

    Ok(())
}

/// Validates a single struct declaration.
fn validate_struct(qualified_name: &str, struct_def: &StructDef) -> Result<(), SchemaError> {
    if struct_def.name.is_empty() {
        return Err(SchemaError::Validation {
            message: "Struct with empty name".to_string(),
        });
    }

    if struct_def.extends.as_deref() == Some(qualified_name) {
        return Err(SchemaError::Validation {
            message: format!("Struct '{}' extends itself", qualified_name),
        });
    }

    let mut seen = HashSet::new();
    for field in struct_def.declared_fields() {
        if field.name.is_empty() || field.type_name.is_empty() {
            return Err(SchemaError::Validation {
                message: format!("Field with empty name or type in struct '{}'", qualified_name),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::Validation {
                message: format!(
                    "Duplicate field '{}' in struct '{}'",
                    field.name, qualified_name
                ),
            });
        }
    }

    Ok(())
}

/// Validates the structs selected for emission after inheritance has been
/// flattened: no two fields of a struct may project to the same property.
///
/// # Errors
/// Returns `SchemaError::Validation` naming the struct and property.
pub fn validate_worklist(registry: &TypeRegistry) -> Result<(), SchemaError> {
    for st in registry.worklist() {
        let mut seen = HashSet::new();
        for field in &st.fields {
            if !seen.insert(field.property_name.as_str()) {
                return Err(SchemaError::Validation {
                    message: format!(
                        "Property '{}' appears more than once in struct '{}'",
                        field.property_name, st.qualified_name
                    ),
                });
            }
        }
    }

    Ok(())
}
