#![allow(non_snake_case)]

use super::*;
use caulk_schema::Schema;

fn enums(json: &str) -> Vec<EnumDef> {
    Schema::parse(&format!(r#"{{"enums": {json}}}"#))
        .unwrap()
        .enums
}

#[test]
fn EnumEmitter___top_level___emits_alias_and_members_in_order() {
    let config = GeneratorConfig::default();
    let defs = enums(
        r#"[{"enumname": "Color", "values": [
            {"name": "RED", "value": "0"},
            {"name": "BLUE", "value": "1"}
        ]}]"#,
    );

    let output = EnumEmitter::new(&config).emit(&defs, None);

    assert_eq!(
        output,
        "#ifndef CAULK_INTERNAL\n\
         #ifndef __cplusplus\n\
         typedef enum32_t Color;\n\
         #endif\n\
         enum Color {\n\
         \tRED = 0,\n\
         \tBLUE = 1,\n\
         };\n\
         \n\
         #endif\n"
    );
}

#[test]
fn EnumEmitter___nested___qualifies_with_owner() {
    let config = GeneratorConfig::default();
    let defs = enums(r#"[{"enumname": "EMode", "values": [{"name": "k_A", "value": "1"}]}]"#);

    let output = EnumEmitter::new(&config).emit(&defs, Some("Widget"));

    assert!(output.contains("typedef enum32_t Widget__EMode;\n"));
    assert!(output.contains("enum Widget__EMode {\n"));
}

#[test]
fn EnumEmitter___several___share_one_guard() {
    let config = GeneratorConfig::default();
    let defs = enums(
        r#"[
            {"enumname": "A", "values": []},
            {"enumname": "B", "values": []}
        ]"#,
    );

    let output = EnumEmitter::new(&config).emit(&defs, None);

    assert_eq!(output.matches("#ifndef CAULK_INTERNAL").count(), 1);
    assert!(output.find("enum A {").unwrap() < output.find("enum B {").unwrap());
    assert!(output.ends_with("};\n\n#endif\n"));
}

#[test]
fn EnumEmitter___empty___emits_nothing() {
    let config = GeneratorConfig::default();

    assert_eq!(EnumEmitter::new(&config).emit(&[], None), "");
}

#[test]
fn EnumEmitter___values_are_spliced_verbatim() {
    let config = GeneratorConfig::default();
    let defs = enums(
        r#"[{"enumname": "Flags", "values": [{"name": "k_B", "value": "(1 << 3) | 0x10"}]}]"#,
    );

    let output = EnumEmitter::new(&config).emit(&defs, None);

    assert!(output.contains("\tk_B = (1 << 3) | 0x10,\n"));
}

#[test]
fn EnumEmitter___custom_guard() {
    let mut config = GeneratorConfig::default();
    config.bridge.internal_guard = "GLUE_INTERNAL".into();
    let defs = enums(r#"[{"enumname": "A", "values": []}]"#);

    let output = EnumEmitter::new(&config).emit(&defs, None);

    assert!(output.starts_with("#ifndef GLUE_INTERNAL\n"));
}
