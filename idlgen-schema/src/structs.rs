//! Struct declarations for type schemas.
//!
//! A struct is an ordered list of named, typed fields, optionally extending
//! one parent struct. Structs without any field list are unions, which are
//! loaded but never emitted.

/// Struct declaration.
#[derive(Debug, Clone)]
pub struct StructDef {
    /// Struct name as written in the document.
    pub name: String,
    /// Qualified name of the parent struct, if any.
    pub extends: Option<String>,
    /// Ordered fields. `None` when the document supplied no field list.
    pub fields: Option<Vec<FieldDef>>,
}

impl StructDef {
    /// Creates a new struct declaration with no field list.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            fields: None,
        }
    }

    /// Sets the parent struct.
    #[must_use]
    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Replaces the field list, making it present even when empty.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldDef>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Appends a field, creating the field list on first use.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.get_or_insert_with(Vec::new).push(field);
    }

    /// Returns true if the struct has no field list at all.
    #[must_use]
    pub fn uses_unions(&self) -> bool {
        self.fields.is_none()
    }

    /// Returns the declared fields, empty for unions.
    #[must_use]
    pub fn declared_fields(&self) -> &[FieldDef] {
        self.fields.as_deref().unwrap_or(&[])
    }
}

/// Field declaration within a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Qualified type name of the field's value.
    pub type_name: String,
}

impl FieldDef {
    /// Creates a new field declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_struct_is_union_until_a_field_is_added() {
        let mut def = StructDef::new("Point");
        assert!(def.uses_unions());
        assert!(def.declared_fields().is_empty());

        def.add_field(FieldDef::new("x", "FLOAT"));
        assert!(!def.uses_unions());
        assert_eq!(def.declared_fields().len(), 1);
    }

    #[test]
    fn test_empty_field_list_is_not_a_union() {
        let def = StructDef::new("Empty").with_fields(Vec::new());
        assert!(!def.uses_unions());
        assert!(def.declared_fields().is_empty());
    }

    #[test]
    fn test_extending() {
        let def = StructDef::new("Shape").extending("Geo::Point");
        assert_eq!(def.extends.as_deref(), Some("Geo::Point"));
    }
}
