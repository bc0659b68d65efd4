//! Resolved type descriptors.
//!
//! Every declaration in a type schema resolves to one [`ProjectableType`]
//! variant. The set is closed: code generation asks a type for its
//! [`TypeKind`] instead of inspecting which variant it is.

use crate::naming::stylize_with_capital_leading_letter;
use crate::structs::FieldDef;

/// Whether a type is passed by value or held through a counted reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Plain value, copied by assignment.
    Value,
    /// Reference-counted interface pointer.
    Reference,
}

/// A resolved type that can appear in generated IDL and native code.
#[derive(Debug, Clone)]
pub enum ProjectableType {
    /// Primitive alias.
    Primitive(Primitive),
    /// Enumeration.
    Enum(Enum),
    /// Struct.
    Struct(Struct),
    /// Interface.
    Interface(Interface),
}

impl ProjectableType {
    /// Public-facing identifier.
    #[must_use]
    pub fn projected_name(&self) -> &str {
        match self {
            Self::Primitive(p) => &p.projected_name,
            Self::Enum(e) => &e.projected_name,
            Self::Struct(s) => &s.projected_name,
            Self::Interface(i) => &i.projected_name,
        }
    }

    /// Qualified internal identifier.
    #[must_use]
    pub fn native_name(&self) -> &str {
        match self {
            Self::Primitive(p) => &p.name,
            Self::Enum(e) => &e.native_name,
            Self::Struct(s) => &s.native_name,
            Self::Interface(i) => &i.native_name,
        }
    }

    /// Name as written in a field or parameter position.
    #[must_use]
    pub fn projected_name_including_indirection(&self) -> String {
        match self.kind() {
            TypeKind::Value => self.projected_name().to_string(),
            TypeKind::Reference => format!("{}*", self.projected_name()),
        }
    }

    /// Namespace prefix required when the type is named in IDL.
    #[must_use]
    pub fn idl_type_name_qualifier(&self) -> &str {
        let qualifier = match self {
            Self::Primitive(p) => p.idl_type_name_qualifier.as_deref(),
            Self::Enum(e) => e.idl_type_name_qualifier.as_deref(),
            Self::Struct(s) => s.idl_type_name_qualifier.as_deref(),
            Self::Interface(i) => i.idl_type_name_qualifier.as_deref(),
        };
        qualifier.unwrap_or("")
    }

    /// Suffix applied when reading a private member of this type.
    #[must_use]
    pub fn accessor_suffix(&self) -> &'static str {
        match self.kind() {
            TypeKind::Value => "",
            TypeKind::Reference => ".Get()",
        }
    }

    /// Storage type of a runtime-class private member holding this type.
    #[must_use]
    pub fn runtime_class_member_type_name(&self) -> String {
        match self.kind() {
            TypeKind::Value => self.projected_name().to_string(),
            TypeKind::Reference => format!("ComPtr<{}>", self.projected_name()),
        }
    }

    /// Value or reference classification.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Interface(_) => TypeKind::Reference,
            Self::Primitive(_) | Self::Enum(_) | Self::Struct(_) => TypeKind::Value,
        }
    }

    /// Returns true for reference-counted types.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.kind() == TypeKind::Reference
    }

    /// Returns the struct descriptor if this is a struct.
    #[must_use]
    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn as_struct_mut(&mut self) -> Option<&mut Struct> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }
}

/// Primitive alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    /// Name as declared.
    pub name: String,
    /// Projected name, the declared name unless overridden.
    pub projected_name: String,
    /// IDL namespace qualifier from the override, if any.
    pub idl_type_name_qualifier: Option<String>,
}

/// Enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    /// Native identifier.
    pub native_name: String,
    /// Projected name.
    pub projected_name: String,
    /// IDL namespace qualifier override.
    pub idl_type_name_qualifier: Option<String>,
}

/// Interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Native identifier.
    pub native_name: String,
    /// Projected name.
    pub projected_name: String,
    /// IDL namespace qualifier override.
    pub idl_type_name_qualifier: Option<String>,
}

/// Field of a resolved struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// Name as declared.
    pub name: String,
    /// Qualified type name, looked up when code is emitted.
    pub type_name: String,
    /// Private member holding the value in the runtime class.
    pub private_member_name: String,
    /// Public property name.
    pub property_name: String,
}

impl StructField {
    /// Derives member and property names from a field declaration.
    ///
    /// Names already starting with `_` get an `m` marker, others `m_`.
    #[must_use]
    pub fn from_field_def(field: &FieldDef) -> Self {
        let private_member_name = if field.name.starts_with('_') {
            format!("m{}", field.name)
        } else {
            format!("m_{}", field.name)
        };

        Self {
            name: field.name.clone(),
            type_name: field.type_name.clone(),
            private_member_name,
            property_name: stylize_with_capital_leading_letter(&field.name),
        }
    }
}

/// Resolved struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    /// Qualified name used as the type dictionary key.
    pub qualified_name: String,
    /// Native identifier (`ApiName_Name` inside a namespace).
    pub native_name: String,
    /// Projected name.
    pub projected_name: String,
    /// Generated interface name (`I` + projected name).
    pub interface_name: String,
    /// Fields declared by the struct itself.
    pub declared_fields: Vec<StructField>,
    /// Fields in emission order. Once the registry is built this is the
    /// flattened list: parent fields first, then the declared ones.
    pub fields: Vec<StructField>,
    /// Qualified name of the parent struct.
    pub extends: Option<String>,
    /// Interface identifier.
    pub guid: Option<String>,
    /// IDL namespace qualifier override.
    pub idl_type_name_qualifier: Option<String>,
    /// True when the schema supplied no field list.
    pub uses_unions: bool,
    /// True when the struct belongs on the emission worklist.
    pub included: bool,
}

impl Struct {
    /// Returns true if the struct declares a parent.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.extends.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(name: &str) -> ProjectableType {
        ProjectableType::Interface(Interface {
            native_name: name.to_string(),
            projected_name: name.to_string(),
            idl_type_name_qualifier: Some("Brushes.".to_string()),
        })
    }

    fn primitive(name: &str, projected: &str) -> ProjectableType {
        ProjectableType::Primitive(Primitive {
            name: name.to_string(),
            projected_name: projected.to_string(),
            idl_type_name_qualifier: None,
        })
    }

    #[test]
    fn test_struct_field_private_member_names() {
        let plain = StructField::from_field_def(&FieldDef::new("foo", "FLOAT"));
        assert_eq!(plain.private_member_name, "m_foo");
        assert_eq!(plain.property_name, "Foo");

        let underscored = StructField::from_field_def(&FieldDef::new("_foo", "FLOAT"));
        assert_eq!(underscored.private_member_name, "m_foo");
        assert_eq!(underscored.property_name, "Foo");
        assert_eq!(underscored.name, "_foo");
    }

    #[test]
    fn test_value_type_queries() {
        let float = primitive("FLOAT", "float");
        assert_eq!(float.kind(), TypeKind::Value);
        assert!(!float.is_reference());
        assert_eq!(float.projected_name(), "float");
        assert_eq!(float.native_name(), "FLOAT");
        assert_eq!(float.projected_name_including_indirection(), "float");
        assert_eq!(float.idl_type_name_qualifier(), "");
        assert_eq!(float.accessor_suffix(), "");
        assert_eq!(float.runtime_class_member_type_name(), "float");
        assert!(float.as_struct().is_none());
    }

    #[test]
    fn test_reference_type_queries() {
        let brush = interface("ICanvasBrush");
        assert_eq!(brush.kind(), TypeKind::Reference);
        assert!(brush.is_reference());
        assert_eq!(brush.projected_name_including_indirection(), "ICanvasBrush*");
        assert_eq!(brush.idl_type_name_qualifier(), "Brushes.");
        assert_eq!(brush.accessor_suffix(), ".Get()");
        assert_eq!(
            brush.runtime_class_member_type_name(),
            "ComPtr<ICanvasBrush>"
        );
    }

    #[test]
    fn test_struct_is_a_value_type() {
        let s = ProjectableType::Struct(Struct {
            qualified_name: "Geo::Point".to_string(),
            native_name: "Geo_Point".to_string(),
            projected_name: "CanvasPoint".to_string(),
            interface_name: "ICanvasPoint".to_string(),
            declared_fields: Vec::new(),
            fields: Vec::new(),
            extends: None,
            guid: None,
            idl_type_name_qualifier: None,
            uses_unions: false,
            included: true,
        });
        assert_eq!(s.kind(), TypeKind::Value);
        assert_eq!(s.native_name(), "Geo_Point");
        assert!(s.as_struct().is_some_and(|st| !st.has_parent()));
    }
}
