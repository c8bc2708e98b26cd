#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn schema() -> Schema {
    Schema::parse(
        r#"{
            "consts": [
                {"constname": "B", "consttype": "int", "constval": "2"},
                {"constname": "A", "consttype": "int", "constval": "1"}
            ],
            "structs": [{"struct": "Zeta"}, {"struct": "Alpha"}],
            "interfaces": [{"classname": "ISteamUser"}],
            "typedefs": [{"typedef": "uint8", "type": "unsigned char"}]
        }"#,
    )
    .unwrap()
}

#[test_case("consts", Collection::Consts)]
#[test_case("enums", Collection::Enums)]
#[test_case("structs", Collection::Structs)]
#[test_case("callback_structs", Collection::CallbackStructs)]
#[test_case("interfaces", Collection::Interfaces)]
#[test_case("typedefs", Collection::Typedefs)]
fn Collection___from_str___accepts_document_key(key: &str, expected: Collection) {
    assert_eq!(key.parse::<Collection>(), Ok(expected));
    assert_eq!(expected.to_string(), key);
}

#[test]
fn Collection___from_str___rejects_unknown_key() {
    assert!("methods".parse::<Collection>().is_err());
}

#[test]
fn Schema___iterate___yields_document_order() {
    let schema = schema();

    let names: Vec<_> = schema.iterate(Collection::Consts).map(|n| n.name()).collect();

    assert_eq!(names, ["B", "A"]);
}

#[test]
fn Schema___iterate___is_restartable() {
    let schema = schema();

    let first: Vec<_> = schema.iterate(Collection::Structs).map(|n| n.name()).collect();
    let second: Vec<_> = schema.iterate(Collection::Structs).map(|n| n.name()).collect();

    assert_eq!(first, ["Zeta", "Alpha"]);
    assert_eq!(first, second);
}

#[test]
fn Schema___iterate___reports_exact_length() {
    let schema = schema();

    assert_eq!(schema.iterate(Collection::Interfaces).len(), 1);
    assert_eq!(schema.iterate(Collection::Enums).len(), 0);
}

#[test]
fn Schema___iterate___wraps_nodes_by_kind() {
    let schema = schema();

    let node = schema.iterate(Collection::Typedefs).next().unwrap();

    assert!(matches!(node, Node::Alias(a) if a.ty == "unsigned char"));
}

#[test]
fn Schema___entities___empty_for_non_entity_collection() {
    let schema = schema();

    assert!(schema.entities(Collection::Consts).is_empty());
    assert_eq!(schema.entities(Collection::Interfaces).len(), 1);
}
