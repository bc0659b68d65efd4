//! Emitters for the two projection strategies.

pub mod class;
pub mod value;

pub use class::ClassProjectionGenerator;
pub use value::ValueTypeGenerator;

use idlgen_schema::{ProjectableType, SchemaError, Struct, StructField, TypeRegistry};

/// Version placeholder substituted by downstream IDL tooling.
pub const VERSION_MACRO: &str = "VERSION";

/// Pairs each field of `st`, in order, with its resolved type.
pub(crate) fn resolve_fields<'a>(
    st: &'a Struct,
    registry: &'a TypeRegistry,
) -> Result<Vec<(&'a StructField, &'a ProjectableType)>, SchemaError> {
    st.fields
        .iter()
        .map(|field| Ok((field, registry.resolve_field(st, field)?)))
        .collect()
}
