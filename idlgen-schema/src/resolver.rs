//! Load phase: turns schema declarations into registered type descriptors.

use crate::error::SchemaError;
use crate::ir::{Enum, Interface, Primitive, ProjectableType, Struct, StructField};
use crate::naming::NameStylizer;
use crate::overrides::{Overrides, StructOverride};
use crate::registry::{TypeRegistry, TypeRegistryBuilder};
use crate::structs::StructDef;
use crate::types::{NamespaceDef, Schema};
use tracing::{info, warn};

/// Loads every declaration of `schema` into a type registry.
///
/// Declarations are registered grouped by kind: primitives, global structs,
/// then for each namespace its structs, interfaces and enums. Within a group
/// the document order is kept, so the worklist follows the order in which
/// structs are declared.
///
/// # Arguments
/// * `schema` - Parsed type schema
/// * `overrides` - Override records keyed by qualified name
/// * `stylizer` - Stylizer carrying the standard prefix
///
/// # Returns
/// The built, immutable type registry.
///
/// # Errors
/// Returns `SchemaError` on duplicate names or invalid inheritance.
pub fn load_schema(
    schema: &Schema,
    overrides: &Overrides,
    stylizer: &NameStylizer,
) -> Result<TypeRegistry, SchemaError> {
    let mut builder = TypeRegistryBuilder::new();

    for primitive in &schema.primitives {
        let data = overrides.get_type(&primitive.name);
        builder.register(
            primitive.name.clone(),
            ProjectableType::Primitive(Primitive {
                name: primitive.name.clone(),
                projected_name: data
                    .and_then(|o| o.projected_name_override.clone())
                    .unwrap_or_else(|| primitive.name.clone()),
                idl_type_name_qualifier: data.and_then(|o| o.idl_namespace_qualifier.clone()),
            }),
        )?;
    }

    for struct_def in &schema.structs {
        let resolved = resolve_struct(
            None,
            struct_def,
            overrides.get_struct(&struct_def.name),
            stylizer,
        );
        builder.register(resolved.qualified_name.clone(), ProjectableType::Struct(resolved))?;
    }

    for namespace in &schema.namespaces {
        load_namespace(&mut builder, namespace, overrides, stylizer)?;
    }

    let registry = builder.build()?;
    info!(
        types = registry.len(),
        worklist = registry.worklist().len(),
        "type registry loaded"
    );
    Ok(registry)
}

fn load_namespace(
    builder: &mut TypeRegistryBuilder,
    namespace: &NamespaceDef,
    overrides: &Overrides,
    stylizer: &NameStylizer,
) -> Result<(), SchemaError> {
    for struct_def in &namespace.structs {
        let key = namespace.qualify(&struct_def.name);
        let resolved = resolve_struct(
            Some(namespace),
            struct_def,
            overrides.get_struct(&key),
            stylizer,
        );
        builder.register(key, ProjectableType::Struct(resolved))?;
    }

    for interface in &namespace.interfaces {
        let key = namespace.qualify(&interface.name);
        let data = overrides.get_type(&key);
        builder.register(
            key,
            ProjectableType::Interface(Interface {
                native_name: namespace.native_name(&interface.name),
                projected_name: data
                    .and_then(|o| o.projected_name_override.clone())
                    .unwrap_or_else(|| interface.name.clone()),
                idl_type_name_qualifier: data.and_then(|o| o.idl_namespace_qualifier.clone()),
            }),
        )?;
    }

    for enum_def in &namespace.enums {
        let key = namespace.qualify(&enum_def.name);
        let data = overrides.get_type(&key);
        builder.register(
            key,
            ProjectableType::Enum(Enum {
                native_name: namespace.native_name(&enum_def.name),
                projected_name: data
                    .and_then(|o| o.projected_name_override.clone())
                    .unwrap_or_else(|| stylizer.projected_type_name(&enum_def.name)),
                idl_type_name_qualifier: data.and_then(|o| o.idl_namespace_qualifier.clone()),
            }),
        )?;
    }

    Ok(())
}

/// Builds the descriptor of one struct.
///
/// The returned field list is the declared one; inheritance is flattened
/// when the registry is built. A struct is included in the worklist only if
/// it lives in a namespace, is not a union, and its override asks for it.
#[must_use]
pub fn resolve_struct(
    namespace: Option<&NamespaceDef>,
    def: &StructDef,
    override_data: Option<&StructOverride>,
    stylizer: &NameStylizer,
) -> Struct {
    let (qualified_name, native_name) = match namespace {
        Some(ns) => (ns.qualify(&def.name), ns.native_name(&def.name)),
        None => (def.name.clone(), def.name.clone()),
    };

    let projected_name = match override_data {
        Some(StructOverride {
            projected_name_override: Some(rename),
            should_project,
            ..
        }) => {
            if *should_project {
                stylizer.prefixed(rename)
            } else {
                rename.clone()
            }
        }
        _ => stylizer.projected_type_name(&def.name),
    };

    let declared_fields: Vec<StructField> = def
        .declared_fields()
        .iter()
        .map(StructField::from_field_def)
        .collect();

    let uses_unions = def.uses_unions();
    if uses_unions {
        warn!(name = %qualified_name, "struct has no field list, treating as union");
    }

    let included = namespace.is_some()
        && !uses_unions
        && override_data.is_some_and(|o| o.should_project);

    Struct {
        interface_name: format!("I{projected_name}"),
        qualified_name,
        native_name,
        projected_name,
        fields: declared_fields.clone(),
        declared_fields,
        extends: def.extends.clone(),
        guid: override_data.and_then(|o| o.guid.clone()),
        idl_type_name_qualifier: override_data.and_then(|o| o.idl_namespace_qualifier.clone()),
        uses_unions,
        included,
    }
}
