//! # idlgen Schema
//!
//! Type schema loading and resolution.
//!
//! This crate provides:
//! - XML loading of type schemas and override documents
//! - Name stylization for projected identifiers
//! - The type dictionary, split into a load-phase builder and an immutable
//!   registry
//! - Struct resolution with single-level inheritance flattening
//! - Schema validation

pub mod error;
pub mod ir;
pub mod naming;
pub mod overrides;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod structs;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{Enum, Interface, Primitive, ProjectableType, Struct, StructField, TypeKind};
pub use naming::NameStylizer;
pub use overrides::{Overrides, StructOverride, TypeOverride};
pub use parser::{parse_overrides, parse_schema};
pub use registry::{TypeRegistry, TypeRegistryBuilder};
pub use resolver::{load_schema, resolve_struct};
pub use structs::{FieldDef, StructDef};
pub use types::{EnumDef, InterfaceDef, NamespaceDef, PrimitiveDef, Schema};
pub use validation::{validate_schema, validate_worklist};
