//! Projection strategy selection.

use crate::error::CodegenError;
use idlgen_schema::{Struct, TypeRegistry};

/// How a struct is exposed to IDL consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Reference-counted runtime class with property accessors.
    Class,
    /// Plain IDL struct passed by value.
    ValueType,
}

/// Selects the projection of `st`.
///
/// A struct needs a class projection as soon as one of its fields holds a
/// reference type; otherwise it is a value type. Takes the built registry,
/// so every field type is already registered.
///
/// # Errors
/// Returns `CodegenError::Schema` if a field type cannot be resolved.
pub fn select_projection(st: &Struct, registry: &TypeRegistry) -> Result<Projection, CodegenError> {
    for field in &st.fields {
        if registry.resolve_field(st, field)?.is_reference() {
            return Ok(Projection::Class);
        }
    }

    Ok(Projection::ValueType)
}
