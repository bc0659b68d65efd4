//! Value-type projection: a plain versioned IDL struct, no native code.

use super::{VERSION_MACRO, resolve_fields};
use crate::error::CodegenError;
use crate::writer::OutputFiles;
use idlgen_schema::{Struct, TypeRegistry};

/// Generator for value-type structs.
pub struct ValueTypeGenerator<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> ValueTypeGenerator<'a> {
    /// Creates a new value-type generator.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Emits the IDL typedef of `st`. The native sink is left untouched.
    ///
    /// # Errors
    /// Fails if a field type cannot be resolved.
    pub fn generate(&self, st: &Struct, output: &mut OutputFiles) -> Result<(), CodegenError> {
        let fields = resolve_fields(st, self.registry)?;
        let idl = &mut output.idl;

        idl.write_line(format!("[version({VERSION_MACRO})]"));
        idl.write_line(format!("typedef struct {}", st.projected_name));
        idl.write_line("{");
        idl.indent();
        for (field, ty) in &fields {
            idl.write_line(format!(
                "{}{} {};",
                ty.idl_type_name_qualifier(),
                ty.projected_name(),
                field.property_name
            ));
        }
        idl.unindent();
        idl.write_line(format!("}} {};", st.projected_name));
        idl.blank_line();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idlgen_schema::{NameStylizer, load_schema, parse_overrides, parse_schema};

    fn registry() -> TypeRegistry {
        let schema = parse_schema(
            r#"<Settings>
    <Primitive Name="Float"/>
    <Namespace Name="Geo">
        <Struct Name="Point">
            <Field Name="X" Type="Float"/>
            <Field Name="Y" Type="Float"/>
        </Struct>
        <Struct Name="Fill">
            <Field Name="mode" Type="Geo::FILL_MODE"/>
            <Field Name="_origin" Type="Geo::Point"/>
        </Struct>
        <Enum Name="FILL_MODE"/>
    </Namespace>
</Settings>"#,
        )
        .expect("Failed to parse");
        let overrides = parse_overrides(
            r#"<Overrides>
    <Primitive Name="Float" ProjectedNameOverride="float"/>
    <Namespace Name="Geo">
        <Struct Name="Point" ShouldProject="true" IdlNamespaceQualifier="Geometry."/>
        <Struct Name="Fill" ShouldProject="true"/>
    </Namespace>
</Overrides>"#,
        )
        .expect("Failed to parse overrides");
        load_schema(&schema, &overrides, &NameStylizer::default()).expect("load")
    }

    fn get<'a>(registry: &'a TypeRegistry, name: &str) -> &'a Struct {
        registry
            .resolve(name)
            .expect("resolve")
            .as_struct()
            .expect("struct")
    }

    #[test]
    fn test_generate_point() {
        let registry = registry();
        let mut output = OutputFiles::new();
        ValueTypeGenerator::new(&registry)
            .generate(get(&registry, "Geo::Point"), &mut output)
            .expect("generate");

        let expected = concat!(
            "[version(VERSION)]\n",
            "typedef struct CanvasPoint\n",
            "{\n",
            "    float X;\n",
            "    float Y;\n",
            "} CanvasPoint;\n",
            "\n",
        );
        assert_eq!(output.idl.as_str(), expected);
        assert!(output.native.is_empty());
    }

    #[test]
    fn test_enum_and_nested_struct_fields() {
        let registry = registry();
        let mut output = OutputFiles::new();
        ValueTypeGenerator::new(&registry)
            .generate(get(&registry, "Geo::Fill"), &mut output)
            .expect("generate");

        assert!(output.idl.as_str().contains("    CanvasFillMode Mode;\n"));
        assert!(output.idl.as_str().contains("    Geometry.CanvasPoint Origin;\n"));
        assert!(output.native.is_empty());
    }
}
