//! Declarations read from a type schema document.
//!
//! These are the raw records handed to the resolver: names are exactly as
//! written in the document, nothing is stylized or looked up yet.

use crate::structs::StructDef;

/// Separator between a namespace name and a declaration name in qualified
/// type names (`D2D1::POINT_2F`).
pub const QUALIFIER_SEPARATOR: &str = "::";

/// A complete type schema document.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Global primitive aliases.
    pub primitives: Vec<PrimitiveDef>,
    /// Structs declared in the global namespace (aliases only, never emitted).
    pub structs: Vec<StructDef>,
    /// Namespaces in document order.
    pub namespaces: Vec<NamespaceDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a primitive alias.
    pub fn add_primitive(&mut self, primitive: PrimitiveDef) {
        self.primitives.push(primitive);
    }

    /// Adds a struct declared in the global namespace.
    pub fn add_struct(&mut self, struct_def: StructDef) {
        self.structs.push(struct_def);
    }

    /// Adds a namespace.
    pub fn add_namespace(&mut self, namespace: NamespaceDef) {
        self.namespaces.push(namespace);
    }

    /// Looks up a namespace by name.
    #[must_use]
    pub fn get_namespace(&self, name: &str) -> Option<&NamespaceDef> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    /// Returns the total number of declarations in the document.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.primitives.len()
            + self.structs.len()
            + self
                .namespaces
                .iter()
                .map(NamespaceDef::declaration_count)
                .sum::<usize>()
    }
}

/// Primitive alias (`FLOAT`, `UINT32`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveDef {
    /// Primitive name.
    pub name: String,
}

impl PrimitiveDef {
    /// Creates a new primitive declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Namespace grouping related declarations.
#[derive(Debug, Clone)]
pub struct NamespaceDef {
    /// Namespace name as used in qualified type names.
    pub name: String,
    /// Name used as prefix for native identifiers.
    pub api_name: String,
    /// Struct declarations in document order.
    pub structs: Vec<StructDef>,
    /// Interface declarations.
    pub interfaces: Vec<InterfaceDef>,
    /// Enum declarations.
    pub enums: Vec<EnumDef>,
}

impl NamespaceDef {
    /// Creates a new namespace. The api name defaults to the namespace name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            api_name: name.clone(),
            name,
            structs: Vec::new(),
            interfaces: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Returns the qualified type name for a declaration in this namespace.
    #[must_use]
    pub fn qualify(&self, name: &str) -> String {
        format!("{}{}{}", self.name, QUALIFIER_SEPARATOR, name)
    }

    /// Returns the native identifier for a declaration in this namespace.
    #[must_use]
    pub fn native_name(&self, name: &str) -> String {
        format!("{}_{}", self.api_name, name)
    }

    /// Adds a struct declaration.
    pub fn add_struct(&mut self, struct_def: StructDef) {
        self.structs.push(struct_def);
    }

    /// Adds an interface declaration.
    pub fn add_interface(&mut self, interface: InterfaceDef) {
        self.interfaces.push(interface);
    }

    /// Adds an enum declaration.
    pub fn add_enum(&mut self, enum_def: EnumDef) {
        self.enums.push(enum_def);
    }

    /// Returns the number of declarations in this namespace.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.structs.len() + self.interfaces.len() + self.enums.len()
    }
}

/// Interface declaration. Fields holding an interface need reference
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDef {
    /// Interface name.
    pub name: String,
}

impl InterfaceDef {
    /// Creates a new interface declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Enum declaration. Only the name matters for field resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
}

impl EnumDef {
    /// Creates a new enum declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
