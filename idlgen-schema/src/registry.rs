//! The type dictionary.
//!
//! Loading happens against a [`TypeRegistryBuilder`]; [`TypeRegistryBuilder::build`]
//! flattens struct inheritance and returns an immutable [`TypeRegistry`].
//! Code generation only ever sees the built registry, so it cannot observe a
//! partially populated dictionary.

use crate::error::SchemaError;
use crate::ir::{ProjectableType, Struct, StructField};
use std::collections::HashMap;
use tracing::debug;

/// Mutable type dictionary used during the load phase.
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    types: Vec<ProjectableType>,
    index: HashMap<String, usize>,
}

impl TypeRegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type under its qualified name.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateType` if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        ty: ProjectableType,
    ) -> Result<(), SchemaError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(SchemaError::DuplicateType { name });
        }

        debug!(name = %name, projected = ty.projected_name(), "registered type");
        self.index.insert(name, self.types.len());
        self.types.push(ty);
        Ok(())
    }

    /// Returns true if a type is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Ends the load phase.
    ///
    /// Every struct's field list is replaced with its flattened form.
    ///
    /// # Errors
    /// Returns the first inheritance error found: unknown parent, parent that
    /// is not a struct, or a parent that has a parent of its own.
    pub fn build(self) -> Result<TypeRegistry, SchemaError> {
        let mut registry = TypeRegistry {
            types: self.types,
            index: self.index,
        };

        let mut flattened = Vec::new();
        for (position, ty) in registry.types.iter().enumerate() {
            if let Some(st) = ty.as_struct() {
                if st.has_parent() {
                    flattened.push((position, registry.flatten(st)?));
                }
            }
        }

        for (position, fields) in flattened {
            if let Some(st) = registry.types[position].as_struct_mut() {
                st.fields = fields;
            }
        }

        Ok(registry)
    }
}

/// Immutable, fully resolved type dictionary.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: Vec<ProjectableType>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Looks up a type by qualified name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProjectableType> {
        self.index.get(name).map(|&idx| &self.types[idx])
    }

    /// Looks up a type by qualified name.
    ///
    /// # Errors
    /// Returns `SchemaError::TypeNotFound` if the name was never registered.
    pub fn resolve(&self, name: &str) -> Result<&ProjectableType, SchemaError> {
        self.get(name).ok_or_else(|| SchemaError::TypeNotFound {
            name: name.to_string(),
        })
    }

    /// Resolves the type of one field of `owner`.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownFieldType` naming the field and struct.
    pub fn resolve_field(
        &self,
        owner: &Struct,
        field: &StructField,
    ) -> Result<&ProjectableType, SchemaError> {
        self.get(&field.type_name)
            .ok_or_else(|| SchemaError::UnknownFieldType {
                type_name: field.type_name.clone(),
                field: field.name.clone(),
                owner: owner.qualified_name.clone(),
            })
    }

    /// Computes the flattened field list of `st`: the parent's fields in
    /// order, followed by the struct's own declared fields.
    ///
    /// # Errors
    /// Fails if the parent is unknown, is not a struct, or has a parent.
    pub fn flatten(&self, st: &Struct) -> Result<Vec<StructField>, SchemaError> {
        let Some(parent_name) = st.extends.as_deref() else {
            return Ok(st.declared_fields.clone());
        };

        let parent = self
            .resolve(parent_name)?
            .as_struct()
            .ok_or_else(|| SchemaError::InvalidParent {
                name: st.qualified_name.clone(),
                parent: parent_name.to_string(),
            })?;

        if let Some(grandparent) = &parent.extends {
            return Err(SchemaError::MultiLevelInheritance {
                name: st.qualified_name.clone(),
                parent: parent_name.to_string(),
                grandparent: grandparent.clone(),
            });
        }

        let mut fields = Vec::with_capacity(parent.declared_fields.len() + st.declared_fields.len());
        fields.extend(parent.declared_fields.iter().cloned());
        fields.extend(st.declared_fields.iter().cloned());
        Ok(fields)
    }

    /// Returns every struct in registration order.
    pub fn structs(&self) -> impl Iterator<Item = &Struct> {
        self.types.iter().filter_map(ProjectableType::as_struct)
    }

    /// Returns the structs selected for emission, in registration order.
    #[must_use]
    pub fn worklist(&self) -> Vec<&Struct> {
        self.structs().filter(|st| st.included).collect()
    }

    /// Returns all types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectableType> {
        self.types.iter()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
