//! # idlgen Codegen
//!
//! IDL and native wrapper generation from resolved type schemas.
//!
//! This crate provides:
//! - Projection strategy selection (class or value type)
//! - Class projection emission (IDL interface, runtime class, native wrapper)
//! - Value-type emission (IDL struct)
//! - Indented output sinks and file output

pub mod config;
pub mod error;
pub mod generator;
pub mod projection;
pub mod strategy;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use strategy::{Projection, select_projection};
pub use writer::{IndentedWriter, OutputFiles, WrittenFiles};

use idlgen_schema::{
    Overrides, load_schema, parse_overrides, parse_schema, validate_schema, validate_worklist,
};
use std::path::Path;

/// Generates IDL and native text from a type schema and an optional
/// overrides document.
///
/// # Arguments
/// * `types_xml` - Type schema XML content
/// * `overrides_xml` - Overrides XML content, if any
/// * `config` - Prefix and runtime class sub-namespace
///
/// # Returns
/// The IDL and native output sinks.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution, validation, or emission
/// fails.
pub fn generate_from_xml(
    types_xml: &str,
    overrides_xml: Option<&str>,
    config: &GeneratorConfig,
) -> Result<OutputFiles, CodegenError> {
    let schema = parse_schema(types_xml)?;
    validate_schema(&schema)?;

    let overrides = match overrides_xml {
        Some(xml) => parse_overrides(xml)?,
        None => Overrides::new(),
    };

    let registry = load_schema(&schema, &overrides, &config.stylizer())?;
    validate_worklist(&registry)?;

    Generator::new(&registry, config).generate()
}

/// Generates IDL and native text from schema files on disk.
///
/// # Arguments
/// * `schema_path` - Path to the type schema XML file
/// * `overrides_path` - Path to the overrides XML file, if any
/// * `config` - Prefix and runtime class sub-namespace
///
/// # Returns
/// The IDL and native output sinks.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_files(
    schema_path: &Path,
    overrides_path: Option<&Path>,
    config: &GeneratorConfig,
) -> Result<OutputFiles, CodegenError> {
    let types_xml = std::fs::read_to_string(schema_path)?;
    let overrides_xml = overrides_path.map(std::fs::read_to_string).transpose()?;
    generate_from_xml(&types_xml, overrides_xml.as_deref(), config)
}
