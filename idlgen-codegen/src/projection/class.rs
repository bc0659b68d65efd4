//! Class projection: a versioned interface plus runtime class in IDL and a
//! reference-counted wrapper class in native code.

use super::{VERSION_MACRO, resolve_fields};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::writer::{IndentedWriter, OutputFiles};
use idlgen_schema::{ProjectableType, Struct, StructField, TypeRegistry};

/// Result returned by a generated accessor when the output pointer is null.
pub const INVALID_ARGUMENT: &str = "E_INVALIDARG";

/// Result returned by a generated accessor on success.
pub const SUCCESS: &str = "S_OK";

/// Generator for class-projected structs.
pub struct ClassProjectionGenerator<'a> {
    registry: &'a TypeRegistry,
    config: &'a GeneratorConfig,
}

impl<'a> ClassProjectionGenerator<'a> {
    /// Creates a new class projection generator.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry, config: &'a GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Emits the IDL and native declarations of `st`.
    ///
    /// # Errors
    /// Fails if the struct has no Guid or a field type cannot be resolved.
    pub fn generate(&self, st: &Struct, output: &mut OutputFiles) -> Result<(), CodegenError> {
        let guid = st
            .guid
            .as_deref()
            .ok_or_else(|| CodegenError::MissingGuid {
                name: st.qualified_name.clone(),
            })?;
        let fields = resolve_fields(st, self.registry)?;

        self.generate_idl(st, guid, &fields, &mut output.idl);
        self.generate_native(st, &fields, &mut output.native);
        Ok(())
    }

    /// Writes the interface and runtime class blocks.
    fn generate_idl(
        &self,
        st: &Struct,
        guid: &str,
        fields: &[(&StructField, &ProjectableType)],
        idl: &mut IndentedWriter,
    ) {
        idl.write_line(format!("interface {};", st.interface_name));
        idl.write_line(format!("runtimeclass {};", st.projected_name));
        idl.blank_line();

        idl.write_line(format!(
            "[uuid({}), version({VERSION_MACRO}), exclusiveto({})]",
            guid.to_uppercase(),
            st.projected_name
        ));
        idl.write_line(format!("interface {} : IInspectable", st.interface_name));
        idl.write_line("{");
        idl.indent();

        for (i, (field, ty)) in fields.iter().enumerate() {
            let idl_type = format!(
                "{}{}",
                ty.idl_type_name_qualifier(),
                ty.projected_name_including_indirection()
            );
            idl.write_line(format!(
                "[propget] HRESULT {}([out, retval] {idl_type}* value);",
                field.property_name
            ));
            idl.write_line(format!(
                "[propput] HRESULT {}([in] {idl_type} value);",
                field.property_name
            ));

            if i + 1 < fields.len() {
                idl.blank_line();
            }
        }

        idl.unindent();
        idl.write_line("}");
        idl.blank_line();

        idl.write_line(format!(
            "[version({VERSION_MACRO}), activatable({VERSION_MACRO})]"
        ));
        idl.write_line(format!("runtimeclass {}", st.projected_name));
        idl.write_line("{");
        idl.indent();
        idl.write_line(format!("[default] interface {};", st.interface_name));
        idl.unindent();
        idl.write_line("}");
        idl.blank_line();
    }

    /// Writes the wrapper class with one get/put pair per field.
    fn generate_native(
        &self,
        st: &Struct,
        fields: &[(&StructField, &ProjectableType)],
        native: &mut IndentedWriter,
    ) {
        native.write_line(format!(
            "class {} : public Microsoft::WRL::RuntimeClass<{}>",
            st.projected_name, st.interface_name
        ));
        native.write_line("{");

        native.indent();
        native.write_line(format!(
            "InspectableClass(L\"{}\", BaseTrust);",
            self.config.runtime_class_name(&st.projected_name)
        ));
        native.blank_line();
        native.unindent();

        native.write_line("public:");
        native.indent();
        for (field, ty) in fields {
            Self::generate_getter(field, ty, native);
            native.blank_line();
            Self::generate_putter(field, ty, native);
            native.blank_line();
        }
        native.unindent();

        native.write_line("private:");
        native.indent();
        for (field, ty) in fields {
            native.write_line(format!(
                "{} {};",
                ty.runtime_class_member_type_name(),
                field.private_member_name
            ));
        }
        native.unindent();
        native.write_line("};");
        native.blank_line();
    }

    fn generate_getter(field: &StructField, ty: &ProjectableType, native: &mut IndentedWriter) {
        native.write_line(format!(
            "IFACEMETHOD(get_{})(_Out_ {}* value) override",
            field.property_name,
            ty.projected_name_including_indirection()
        ));
        native.write_line("{");
        native.indent();

        native.write_line("if (!value)");
        native.indent();
        native.write_line(format!("return {INVALID_ARGUMENT};"));
        native.blank_line();
        native.unindent();

        // Reference types hand out an extra reference instead of the raw pointer.
        if ty.is_reference() {
            native.write_line(format!("{}.CopyTo(value);", field.private_member_name));
        } else {
            native.write_line(format!(
                "*value = {}{};",
                field.private_member_name,
                ty.accessor_suffix()
            ));
        }
        native.write_line(format!("return {SUCCESS};"));
        native.unindent();
        native.write_line("}");
    }

    fn generate_putter(field: &StructField, ty: &ProjectableType, native: &mut IndentedWriter) {
        native.write_line(format!(
            "IFACEMETHOD(put_{})({} value) override",
            field.property_name,
            ty.projected_name_including_indirection()
        ));
        native.write_line("{");
        native.indent();
        native.write_line(format!("{} = value;", field.private_member_name));
        native.write_line(format!("return {SUCCESS};"));
        native.unindent();
        native.write_line("}");
    }
}
