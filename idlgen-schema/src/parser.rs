//! XML loaders for type schemas and override documents.
//!
//! A type schema looks like:
//!
//! ```xml
//! <Settings>
//!     <Primitive Name="FLOAT"/>
//!     <Namespace Name="D2D1" ApiName="D2D1">
//!         <Struct Name="POINT_2F">
//!             <Field Name="x" Type="FLOAT"/>
//!             <Field Name="y" Type="FLOAT"/>
//!         </Struct>
//!         <Interface Name="ID2D1Brush"/>
//!     </Namespace>
//! </Settings>
//! ```
//!
//! An override document mirrors it with `<Overrides>` as root and per-type
//! customization attributes.

use crate::error::ParseError;
use crate::overrides::{Overrides, StructOverride, TypeOverride};
use crate::structs::{FieldDef, StructDef};
use crate::types::{EnumDef, InterfaceDef, NamespaceDef, PrimitiveDef, Schema};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses a type schema from a string.
///
/// # Arguments
/// * `xml` - Type schema XML content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, required attributes are
/// missing, or there is no `Settings` root element.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut schema: Option<Schema> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "Settings" => schema = Some(Schema::new()),
                    "Primitive" => {
                        let primitive = parse_primitive(e)?;
                        open_schema(&mut schema)?.add_primitive(primitive);
                        skip_element(&mut reader)?;
                    }
                    "Struct" => {
                        let struct_def = parse_struct(&mut reader, e)?;
                        open_schema(&mut schema)?.add_struct(struct_def);
                    }
                    "Namespace" => {
                        let namespace = parse_namespace(&mut reader, e)?;
                        open_schema(&mut schema)?.add_namespace(namespace);
                    }
                    _ if schema.is_some() => skip_element(&mut reader)?,
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "Settings" => schema = Some(Schema::new()),
                    "Primitive" => {
                        let primitive = parse_primitive(e)?;
                        open_schema(&mut schema)?.add_primitive(primitive);
                    }
                    "Struct" => {
                        let struct_def = parse_struct_header(e)?;
                        open_schema(&mut schema)?.add_struct(struct_def);
                    }
                    "Namespace" => {
                        let namespace = parse_namespace_header(e)?;
                        open_schema(&mut schema)?.add_namespace(namespace);
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    schema.ok_or_else(|| ParseError::structure("No Settings element found"))
}

/// Parses an override document from a string.
///
/// # Arguments
/// * `xml` - Overrides XML content
///
/// # Returns
/// Override records keyed by qualified name, or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, an override is declared
/// twice, or there is no `Overrides` root element.
pub fn parse_overrides(xml: &str) -> Result<Overrides, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut overrides: Option<Overrides> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "Overrides" => overrides = Some(Overrides::new()),
                    "Primitive" => {
                        let (key, data) = parse_type_override(e, None)?;
                        open_overrides(&mut overrides)?.add_type(key, data)?;
                        skip_element(&mut reader)?;
                    }
                    "Struct" => {
                        let (key, data) = parse_struct_override(e, None)?;
                        open_overrides(&mut overrides)?.add_struct(key, data)?;
                        skip_element(&mut reader)?;
                    }
                    "Namespace" => {
                        let target = open_overrides(&mut overrides)?;
                        parse_namespace_overrides(&mut reader, e, target)?;
                    }
                    _ if overrides.is_some() => skip_element(&mut reader)?,
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "Overrides" => overrides = Some(Overrides::new()),
                    "Primitive" => {
                        let (key, data) = parse_type_override(e, None)?;
                        open_overrides(&mut overrides)?.add_type(key, data)?;
                    }
                    "Struct" => {
                        let (key, data) = parse_struct_override(e, None)?;
                        open_overrides(&mut overrides)?.add_struct(key, data)?;
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    overrides.ok_or_else(|| ParseError::structure("No Overrides element found"))
}

fn open_schema(schema: &mut Option<Schema>) -> Result<&mut Schema, ParseError> {
    schema
        .as_mut()
        .ok_or_else(|| ParseError::structure("declaration outside of Settings element"))
}

fn open_overrides(overrides: &mut Option<Overrides>) -> Result<&mut Overrides, ParseError> {
    overrides
        .as_mut()
        .ok_or_else(|| ParseError::structure("override outside of Overrides element"))
}

/// Consumes events up to and including the end tag of the element whose
/// start tag was just read.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::structure("unexpected end of document"));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Returns the `Name` attribute of an element.
fn required_name(e: &BytesStart<'_>, element: &str) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"Name" {
            return Ok(std::str::from_utf8(&attr.value)?.to_string());
        }
    }
    Err(ParseError::missing_attr(element, "Name"))
}

fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

fn parse_primitive(e: &BytesStart<'_>) -> Result<PrimitiveDef, ParseError> {
    Ok(PrimitiveDef::new(required_name(e, "Primitive")?))
}

/// Parses the attributes of a namespace element.
fn parse_namespace_header(e: &BytesStart<'_>) -> Result<NamespaceDef, ParseError> {
    let mut name = None;
    let mut api_name = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "Name" => name = Some(value.to_string()),
            "ApiName" => api_name = Some(value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("Namespace", "Name"))?;
    let mut namespace = NamespaceDef::new(name);
    if let Some(api_name) = api_name {
        namespace.api_name = api_name;
    }

    Ok(namespace)
}

/// Parses a namespace element and its declarations.
fn parse_namespace(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<NamespaceDef, ParseError> {
    let mut namespace = parse_namespace_header(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                match tag_name {
                    "Struct" => namespace.add_struct(parse_struct(reader, e)?),
                    "Interface" => {
                        namespace.add_interface(InterfaceDef::new(required_name(e, "Interface")?));
                        skip_element(reader)?;
                    }
                    "Enum" => {
                        namespace.add_enum(EnumDef::new(required_name(e, "Enum")?));
                        skip_element(reader)?;
                    }
                    _ => skip_element(reader)?,
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                match tag_name {
                    "Struct" => namespace.add_struct(parse_struct_header(e)?),
                    "Interface" => {
                        namespace.add_interface(InterfaceDef::new(required_name(e, "Interface")?));
                    }
                    "Enum" => namespace.add_enum(EnumDef::new(required_name(e, "Enum")?)),
                    _ => {}
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unterminated Namespace '{}'",
                    namespace.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(namespace)
}

/// Parses the attributes of a struct element. The field list stays absent.
fn parse_struct_header(e: &BytesStart<'_>) -> Result<StructDef, ParseError> {
    let mut name = None;
    let mut extends = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "Name" => name = Some(value.to_string()),
            "Extends" => extends = Some(value.to_string()),
            _ => {}
        }
    }

    let mut struct_def = StructDef::new(name.ok_or_else(|| ParseError::missing_attr("Struct", "Name"))?);
    struct_def.extends = extends;
    Ok(struct_def)
}

/// Parses a struct element and its fields.
///
/// Children other than `Field` (such as `Union`) are skipped; a struct
/// without any `Field` child keeps an absent field list.
fn parse_struct(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<StructDef, ParseError> {
    let mut struct_def = parse_struct_header(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "Field" {
                    struct_def.add_field(parse_field(e)?);
                }
                skip_element(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name == "Field" {
                    struct_def.add_field(parse_field(e)?);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unterminated Struct '{}'",
                    struct_def.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(struct_def)
}

/// Parses a field element.
fn parse_field(e: &BytesStart<'_>) -> Result<FieldDef, ParseError> {
    let mut name = None;
    let mut type_name = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "Name" => name = Some(value.to_string()),
            "Type" => type_name = Some(value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("Field", "Name"))?;
    let type_name = type_name.ok_or_else(|| ParseError::missing_attr("Field", "Type"))?;
    Ok(FieldDef::new(name, type_name))
}

/// Parses overrides nested in a namespace element.
fn parse_namespace_overrides(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    overrides: &mut Overrides,
) -> Result<(), ParseError> {
    let namespace = NamespaceDef::new(required_name(e, "Namespace")?);
    let mut buf = Vec::new();

    loop {
        {
            let element = match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => Some((e, true)),
                Ok(Event::Empty(e)) => Some((e, false)),
                Ok(Event::End(_)) => break,
                Ok(Event::Eof) => {
                    return Err(ParseError::structure(format!(
                        "unterminated Namespace '{}'",
                        namespace.name
                    )));
                }
                Err(e) => return Err(ParseError::Xml(e)),
                _ => None,
            };

            if let Some((e, is_start)) = element {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                match tag_name {
                    "Struct" => {
                        let (key, data) = parse_struct_override(&e, Some(&namespace))?;
                        overrides.add_struct(key, data)?;
                    }
                    "Interface" | "Enum" => {
                        let (key, data) = parse_type_override(&e, Some(&namespace))?;
                        overrides.add_type(key, data)?;
                    }
                    _ => {}
                }

                if is_start {
                    skip_element(reader)?;
                }
            }
        }
        buf.clear();
    }

    Ok(())
}

/// Parses a struct override, returning its qualified key. Root-level
/// overrides target global structs and keep the bare name.
fn parse_struct_override(
    e: &BytesStart<'_>,
    namespace: Option<&NamespaceDef>,
) -> Result<(String, StructOverride), ParseError> {
    let mut name = None;
    let mut data = StructOverride::default();

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "Name" => name = Some(value.to_string()),
            "Guid" => data.guid = Some(value.to_string()),
            "ProjectedNameOverride" => data.projected_name_override = Some(value.to_string()),
            "ShouldProject" => data.should_project = parse_bool("Struct", key, value)?,
            "IdlNamespaceQualifier" => data.idl_namespace_qualifier = Some(value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("Struct", "Name"))?;
    let key = match namespace {
        Some(ns) => ns.qualify(&name),
        None => name,
    };
    Ok((key, data))
}

/// Parses a primitive, interface or enum override, returning its qualified key.
fn parse_type_override(
    e: &BytesStart<'_>,
    namespace: Option<&NamespaceDef>,
) -> Result<(String, TypeOverride), ParseError> {
    let element_bytes = e.name().as_ref().to_vec();
    let element = std::str::from_utf8(&element_bytes)?;
    let mut name = None;
    let mut data = TypeOverride::default();

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        match key {
            "Name" => name = Some(value.to_string()),
            "ProjectedNameOverride" => data.projected_name_override = Some(value.to_string()),
            "IdlNamespaceQualifier" => data.idl_namespace_qualifier = Some(value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr(element, "Name"))?;
    let key = match namespace {
        Some(ns) => ns.qualify(&name),
        None => name,
    };
    Ok((key, data))
}
