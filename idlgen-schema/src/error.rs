//! Error types for schema loading and type resolution.

use thiserror::Error;

/// Error type for XML loading of type and override schemas.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (struct override, primitive override, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Invalid document structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for type registration and resolution.
///
/// Every variant is a schema integrity failure: the generation run stops at
/// the first one.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two declarations share the same qualified name.
    #[error("type '{name}' is declared more than once")]
    DuplicateType {
        /// Qualified type name.
        name: String,
    },

    /// Type not found.
    #[error("type '{name}' not found")]
    TypeNotFound {
        /// Qualified type name.
        name: String,
    },

    /// A struct field references a type that was never declared.
    #[error("unknown type '{type_name}' in field '{field}' of struct '{owner}'")]
    UnknownFieldType {
        /// Referenced type name.
        type_name: String,
        /// Field name.
        field: String,
        /// Owning struct.
        owner: String,
    },

    /// A struct extends something that is not a struct.
    #[error("struct '{name}' extends '{parent}', which is not a struct")]
    InvalidParent {
        /// Struct name.
        name: String,
        /// Declared parent.
        parent: String,
    },

    /// The parent of a struct has a parent of its own.
    #[error(
        "struct '{name}' extends '{parent}', which itself extends '{grandparent}': only one level of inheritance is supported"
    )]
    MultiLevelInheritance {
        /// Struct name.
        name: String,
        /// Declared parent.
        parent: String,
        /// Parent's own parent.
        grandparent: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
