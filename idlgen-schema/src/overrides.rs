//! Per-type customization records read from an override document.
//!
//! Overrides are keyed by the same qualified names as the type dictionary.

use crate::error::ParseError;
use std::collections::HashMap;

/// Customization of a struct's projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructOverride {
    /// Interface identifier, required for class-projected structs.
    pub guid: Option<String>,
    /// Replacement for the stylized projected name.
    pub projected_name_override: Option<String>,
    /// Whether the struct is emitted at all. Also controls whether the
    /// standard prefix is applied to `projected_name_override`.
    pub should_project: bool,
    /// Namespace prefix used when the type appears in IDL.
    pub idl_namespace_qualifier: Option<String>,
}

/// Customization of a primitive, interface or enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeOverride {
    /// Replacement for the default projected name.
    pub projected_name_override: Option<String>,
    /// Namespace prefix used when the type appears in IDL.
    pub idl_namespace_qualifier: Option<String>,
}

/// Lookup of override records by qualified type name.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    structs: HashMap<String, StructOverride>,
    types: HashMap<String, TypeOverride>,
}

impl Overrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a struct override.
    ///
    /// # Errors
    /// Returns `ParseError::DuplicateDefinition` if the key is already present.
    pub fn add_struct(
        &mut self,
        key: impl Into<String>,
        data: StructOverride,
    ) -> Result<(), ParseError> {
        let key = key.into();
        if self.structs.contains_key(&key) {
            return Err(ParseError::duplicate("struct override", key));
        }
        self.structs.insert(key, data);
        Ok(())
    }

    /// Adds a primitive, interface or enum override.
    ///
    /// # Errors
    /// Returns `ParseError::DuplicateDefinition` if the key is already present.
    pub fn add_type(&mut self, key: impl Into<String>, data: TypeOverride) -> Result<(), ParseError> {
        let key = key.into();
        if self.types.contains_key(&key) {
            return Err(ParseError::duplicate("type override", key));
        }
        self.types.insert(key, data);
        Ok(())
    }

    /// Looks up the override for a struct.
    #[must_use]
    pub fn get_struct(&self, key: &str) -> Option<&StructOverride> {
        self.structs.get(key)
    }

    /// Looks up the override for a primitive, interface or enum.
    #[must_use]
    pub fn get_type(&self, key: &str) -> Option<&TypeOverride> {
        self.types.get(key)
    }

    /// Returns the number of override records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structs.len() + self.types.len()
    }

    /// Returns true if there are no override records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut overrides = Overrides::new();
        overrides
            .add_struct(
                "Geo::Point",
                StructOverride {
                    should_project: true,
                    ..Default::default()
                },
            )
            .expect("add struct");
        overrides
            .add_type(
                "FLOAT",
                TypeOverride {
                    projected_name_override: Some("float".to_string()),
                    ..Default::default()
                },
            )
            .expect("add type");

        assert_eq!(overrides.len(), 2);
        assert!(overrides.get_struct("Geo::Point").is_some_and(|o| o.should_project));
        assert!(overrides.get_struct("FLOAT").is_none());
        assert_eq!(
            overrides
                .get_type("FLOAT")
                .and_then(|o| o.projected_name_override.as_deref()),
            Some("float")
        );
    }

    #[test]
    fn test_duplicate_struct_override_rejected() {
        let mut overrides = Overrides::new();
        overrides
            .add_struct("Geo::Point", StructOverride::default())
            .expect("first insert");
        let err = overrides
            .add_struct("Geo::Point", StructOverride::default())
            .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateDefinition { .. }));
    }
}
