//! End-to-end generation from schema files on disk.

use idlgen_codegen::{CodegenError, GeneratorConfig, generate_from_files, generate_from_xml};
use idlgen_schema::SchemaError;
use std::path::PathBuf;

const TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Settings>
    <Primitive Name="Float"/>
    <Primitive Name="Bool"/>
    <Namespace Name="D2D" ApiName="D2D1">
        <Struct Name="POINT_2F">
            <Field Name="x" Type="Float"/>
            <Field Name="y" Type="Float"/>
        </Struct>
        <Struct Name="STROKE_STYLE" Extends="D2D::POINT_2F">
            <Field Name="_brush" Type="D2D::IBrush"/>
            <Field Name="dashed" Type="Bool"/>
            <Field Name="cap" Type="D2D::CAP_STYLE"/>
        </Struct>
        <Struct Name="VALUE">
            <Union>
                <Field Name="a" Type="Float"/>
                <Field Name="b" Type="Bool"/>
            </Union>
        </Struct>
        <Interface Name="IBrush"/>
        <Enum Name="CAP_STYLE"/>
    </Namespace>
</Settings>"#;

const OVERRIDES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Overrides>
    <Primitive Name="Float" ProjectedNameOverride="float"/>
    <Primitive Name="Bool" ProjectedNameOverride="boolean"/>
    <Namespace Name="D2D">
        <Struct Name="POINT_2F" ShouldProject="true" ProjectedNameOverride="Vector2"/>
        <Struct Name="STROKE_STYLE" ShouldProject="true" Guid="6b2d8a4e-0f1c-4e3b-a7d9-5c8e2f1b0a93"/>
        <Struct Name="VALUE" ShouldProject="true"/>
        <Interface Name="IBrush" ProjectedNameOverride="ICanvasBrush"/>
    </Namespace>
</Overrides>"#;

struct Fixture {
    _dir: tempfile::TempDir,
    types: PathBuf,
    overrides: PathBuf,
}

fn fixture(types: &str, overrides: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let types_path = dir.path().join("Types.xml");
    let overrides_path = dir.path().join("Overrides.xml");
    std::fs::write(&types_path, types).expect("write types");
    std::fs::write(&overrides_path, overrides).expect("write overrides");
    Fixture {
        _dir: dir,
        types: types_path,
        overrides: overrides_path,
    }
}

#[test]
fn test_generate_from_files() {
    let fixture = fixture(TYPES, OVERRIDES);
    let config = GeneratorConfig::default();
    let output = generate_from_files(&fixture.types, Some(&fixture.overrides), &config)
        .expect("generate");

    let idl = output.idl.as_str();
    assert!(idl.starts_with("[version(VERSION)]\ntypedef struct CanvasVector2\n"));
    assert!(idl.contains("    float X;\n    float Y;\n} CanvasVector2;\n"));
    assert!(idl.contains("[uuid(6B2D8A4E-0F1C-4E3B-A7D9-5C8E2F1B0A93), version(VERSION), exclusiveto(CanvasStrokeStyle)]"));
    assert!(idl.contains("[propget] HRESULT Brush([out, retval] ICanvasBrush** value);"));
    assert!(idl.contains("[propput] HRESULT Dashed([in] boolean value);"));
    assert!(idl.contains("[propput] HRESULT Cap([in] CanvasCapStyle value);"));
    assert!(!idl.contains("VALUE"));

    let native = output.native.as_str();
    assert!(native.contains("InspectableClass(L\"Microsoft.Graphics.Canvas.CanvasStrokeStyle\", BaseTrust);"));
    assert!(native.contains("        m_brush.CopyTo(value);\n"));
    assert!(native.contains("        *value = m_dashed;\n"));
    assert!(native.contains("    ComPtr<ICanvasBrush> m_brush;\n"));
    assert!(native.contains("    CanvasCapStyle m_cap;\n"));
}

#[test]
fn test_inherited_fields_come_first() {
    let config = GeneratorConfig::default();
    let output = generate_from_xml(TYPES, Some(OVERRIDES), &config).expect("generate");
    let native = output.native.as_str();

    let x = native.find("get_X").expect("x");
    let y = native.find("get_Y").expect("y");
    let brush = native.find("get_Brush").expect("brush");
    let cap = native.find("get_Cap").expect("cap");
    assert!(x < y && y < brush && brush < cap);
}

#[test]
fn test_output_is_deterministic() {
    let fixture = fixture(TYPES, OVERRIDES);
    let config = GeneratorConfig::default();

    let first = generate_from_files(&fixture.types, Some(&fixture.overrides), &config)
        .expect("generate");
    let second = generate_from_files(&fixture.types, Some(&fixture.overrides), &config)
        .expect("generate");
    assert_eq!(first.idl.as_str(), second.idl.as_str());
    assert_eq!(first.native.as_str(), second.native.as_str());

    let out = tempfile::tempdir().expect("tempdir");
    let written = first.write_to_dir(out.path(), "Structs").expect("write");
    assert_eq!(
        std::fs::read_to_string(&written.idl).expect("read"),
        second.idl.as_str()
    );
    assert_eq!(
        std::fs::read_to_string(&written.native).expect("read"),
        second.native.as_str()
    );
}

#[test]
fn test_without_overrides_nothing_is_emitted() {
    let output =
        generate_from_xml(TYPES, None, &GeneratorConfig::default()).expect("generate");
    assert!(output.idl.is_empty());
    assert!(output.native.is_empty());
}

#[test]
fn test_custom_prefix_and_subnamespace() {
    let config = GeneratorConfig::new()
        .with_prefix("Geo")
        .with_subnamespace("Geometry");
    let output = generate_from_xml(TYPES, Some(OVERRIDES), &config).expect("generate");

    assert!(output.idl.as_str().contains("typedef struct GeoVector2"));
    assert!(
        output
            .native
            .as_str()
            .contains("L\"Microsoft.Geometry.GeoStrokeStyle\"")
    );
}

#[test]
fn test_multi_level_inheritance_rejected() {
    let types = r#"<Settings>
    <Primitive Name="Float"/>
    <Namespace Name="Geo">
        <Struct Name="Point"><Field Name="X" Type="Float"/></Struct>
        <Struct Name="Shape" Extends="Geo::Point"><Field Name="Y" Type="Float"/></Struct>
        <Struct Name="Circle" Extends="Geo::Shape"><Field Name="R" Type="Float"/></Struct>
    </Namespace>
</Settings>"#;
    let err = generate_from_xml(types, None, &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::Schema(SchemaError::MultiLevelInheritance { ref name, .. }) if name == "Geo::Circle"
    ));
}

#[test]
fn test_missing_guid_rejected() {
    let overrides = r#"<Overrides>
    <Namespace Name="D2D">
        <Struct Name="STROKE_STYLE" ShouldProject="true"/>
    </Namespace>
</Overrides>"#;
    let err =
        generate_from_xml(TYPES, Some(overrides), &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, CodegenError::MissingGuid { ref name } if name == "D2D::STROKE_STYLE"));
}

#[test]
fn test_missing_schema_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = generate_from_files(
        &dir.path().join("missing.xml"),
        None,
        &GeneratorConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CodegenError::Io(_)));
}

const FIELD_TYPES: &str = r#"<Settings>
    <Primitive Name="Float"/>
    <Struct Name="POINT">
        <Field Name="x" Type="Float"/>
        <Field Name="y" Type="Float"/>
    </Struct>
    <Namespace Name="Geo">
        <Struct Name="ANCHOR">
            <Field Name="offset" Type="Float"/>
        </Struct>
        <Struct Name="SHAPE">
            <Field Name="origin" Type="POINT"/>
            <Field Name="anchor" Type="Geo::ANCHOR"/>
            <Field Name="color" Type="Geo::IBrush"/>
        </Struct>
        <Struct Name="FRAME">
            <Field Name="origin" Type="POINT"/>
            <Field Name="anchor" Type="Geo::ANCHOR"/>
        </Struct>
        <Interface Name="IBrush"/>
    </Namespace>
</Settings>"#;

const FIELD_OVERRIDES: &str = r#"<Overrides>
    <Struct Name="POINT" ProjectedNameOverride="Vector2" IdlNamespaceQualifier="Numerics."/>
    <Namespace Name="Geo">
        <Struct Name="ANCHOR" ShouldProject="false" ProjectedNameOverride="Anchor"/>
        <Struct Name="SHAPE" ShouldProject="true" Guid="0c1d2e3f-4a5b-4c6d-8e7f-9a0b1c2d3e4f"/>
        <Struct Name="FRAME" ShouldProject="true"/>
    </Namespace>
</Overrides>"#;

#[test]
fn test_excluded_and_global_structs_as_field_types() {
    let output = generate_from_xml(
        FIELD_TYPES,
        Some(FIELD_OVERRIDES),
        &GeneratorConfig::default(),
    )
    .expect("generate");
    let idl = output.idl.as_str();
    let native = output.native.as_str();

    assert!(idl.contains("    [propget] HRESULT Origin([out, retval] Numerics.Vector2* value);\n"));
    assert!(idl.contains("    [propput] HRESULT Anchor([in] Anchor value);\n"));
    assert!(idl.contains("    Numerics.Vector2 Origin;\n    Anchor Anchor;\n} CanvasFrame;\n"));

    assert!(native.contains("    IFACEMETHOD(get_Origin)(_Out_ Vector2* value) override\n"));
    assert!(native.contains("    Vector2 m_origin;\n    Anchor m_anchor;\n"));

    // Only SHAPE and FRAME get blocks of their own.
    assert_eq!(idl.matches("typedef struct ").count(), 1);
    assert_eq!(idl.matches("runtimeclass CanvasShape").count(), 2);
    assert!(!idl.contains("typedef struct Anchor"));
    assert!(!idl.contains("typedef struct Vector2"));
    assert!(!native.contains("class Anchor"));
}
