//! Prelude module for convenient imports.
//!
//! ```ignore
//! use idlgen::prelude::*;
//! ```

// Schema types
pub use idlgen_schema::{
    NameStylizer, Overrides, ParseError, ProjectableType, Schema, SchemaError, Struct,
    StructField, TypeKind, TypeRegistry, TypeRegistryBuilder, load_schema, parse_overrides,
    parse_schema,
};

// Generation
pub use idlgen_codegen::{
    CodegenError, Generator, GeneratorConfig, OutputFiles, Projection, generate_from_files,
    generate_from_xml, select_projection,
};
