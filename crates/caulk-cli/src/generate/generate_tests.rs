#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;
use test_case::test_case;

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn Artifacts___three_paths___combined_mode() {
    let artifacts = Artifacts::from_paths(paths(&["caulk.h", "caulk.cpp", "api.json"])).unwrap();

    assert_eq!(artifacts.declarations, PathBuf::from("caulk.h"));
    assert_eq!(artifacts.public_header, None);
    assert_eq!(artifacts.bridge, PathBuf::from("caulk.cpp"));
    assert_eq!(artifacts.schema, PathBuf::from("api.json"));
    assert_eq!(artifacts.mode(), OutputMode::Combined);
}

#[test]
fn Artifacts___four_paths___split_mode() {
    let artifacts =
        Artifacts::from_paths(paths(&["__gen.h", "caulk.h", "caulk.cpp", "api.json"])).unwrap();

    assert_eq!(artifacts.declarations, PathBuf::from("__gen.h"));
    assert_eq!(artifacts.public_header, Some(PathBuf::from("caulk.h")));
    assert_eq!(artifacts.mode(), OutputMode::Split);
}

#[test_case(&[] ; "none")]
#[test_case(&["a", "b"] ; "two")]
#[test_case(&["a", "b", "c", "d", "e"] ; "five")]
fn Artifacts___wrong_count___errors(names: &[&str]) {
    assert!(Artifacts::from_paths(paths(names)).is_err());
}

#[test]
fn run___missing_schema___creates_no_outputs() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("caulk.h");
    let bridge = dir.path().join("caulk.cpp");
    let schema = dir.path().join("missing.json");

    let err = run(vec![header.clone(), bridge.clone(), schema], None).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CaulkError>(),
        Some(CaulkError::SchemaRead { .. })
    ));
    assert!(!header.exists());
    assert!(!bridge.exists());
}

#[test]
fn run___valid_schema___writes_combined_artifacts() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("caulk.h");
    let bridge = dir.path().join("caulk.cpp");
    let schema = dir.path().join("api.json");
    fs::write(
        &schema,
        r#"{"consts": [{"constname": "MAX_COUNT", "consttype": "int", "constval": "64"}]}"#,
    )
    .unwrap();

    run(vec![header.clone(), bridge.clone(), schema], None).unwrap();

    let header = fs::read_to_string(header).unwrap();
    assert!(header.starts_with("#pragma once\n"));
    assert!(header.contains("#define MAX_COUNT ((int)(64))\n"));
    assert!(
        fs::read_to_string(bridge)
            .unwrap()
            .starts_with("#include \"steam_api.h\"\n")
    );
}

#[test]
fn run___unwritable_output___reports_path() {
    let dir = TempDir::new().unwrap();
    let schema = dir.path().join("api.json");
    fs::write(&schema, "{}").unwrap();
    let header = dir.path().join("no-such-dir").join("caulk.h");

    let err = run(
        vec![header.clone(), dir.path().join("caulk.cpp"), schema],
        None,
    )
    .unwrap_err();

    match err.downcast_ref::<CaulkError>() {
        Some(CaulkError::OutputWrite { path, .. }) => assert_eq!(path, &header),
        other => panic!("unexpected error: {other:?}"),
    }
}
