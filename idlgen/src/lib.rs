//! # idlgen
//!
//! Schema-driven generator of IDL declarations and native wrapper classes.
//!
//! A type schema lists primitives, namespaces, structs, interfaces and
//! enums. An overrides document selects which structs are projected and
//! how they are renamed. Every selected struct becomes either a plain IDL
//! value type or, when one of its fields holds an interface, a runtime class
//! with property accessors backed by a native wrapper.
//!
//! ## Quick Start
//!
//! ```ignore
//! use idlgen::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let output = generate_from_xml(types_xml, Some(overrides_xml), &config)?;
//! output.write_to_dir(Path::new("out"), "Structs")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XML loading, type dictionary, struct resolution
//! - [`codegen`] - Projection selection and emission

pub mod prelude;

/// Schema loading, resolution and validation.
pub mod schema {
    pub use idlgen_schema::*;
}

/// IDL and native code generation.
pub mod codegen {
    pub use idlgen_codegen::*;
}
