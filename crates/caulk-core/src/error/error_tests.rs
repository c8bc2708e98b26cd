#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn io_error() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "no such file")
}

fn json_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("{").unwrap_err()
}

fn toml_error() -> toml::de::Error {
    toml::from_str::<toml::Value>("= nope").unwrap_err()
}

#[test_case(CaulkError::SchemaRead { path: "a.json".into(), source: io_error() }; "schema read")]
#[test_case(CaulkError::SchemaParse { path: "a.json".into(), source: json_error() }; "schema parse")]
#[test_case(CaulkError::OutputWrite { path: "out.h".into(), source: io_error() }; "output write")]
#[test_case(CaulkError::ConfigRead { path: "caulk.toml".into(), source: io_error() }; "config read")]
#[test_case(CaulkError::ConfigParse { path: "caulk.toml".into(), source: toml_error() }; "config parse")]
fn CaulkError___fatal_variant___exits_non_zero(error: CaulkError) {
    assert_ne!(error.exit_code(), 0);
}

#[test]
fn CaulkError___schema_read___display_includes_path() {
    let err = CaulkError::SchemaRead {
        path: "missing/steam_api.json".into(),
        source: io_error(),
    };

    let display = err.to_string();

    assert!(display.contains("missing/steam_api.json"));
    assert!(display.contains("no such file"));
}

#[test]
fn CaulkError___schema_parse___keeps_json_location() {
    let err = CaulkError::SchemaParse {
        path: "steam_api.json".into(),
        source: json_error(),
    };

    assert!(err.to_string().contains("line 1"));
}

#[test]
fn CaulkError___output_write___reports_path() {
    let err = CaulkError::OutputWrite {
        path: "gen/caulk.cpp".into(),
        source: io_error(),
    };

    assert_eq!(err.path(), std::path::Path::new("gen/caulk.cpp"));
}

#[test]
fn CaulkError___source___is_chained() {
    use std::error::Error as _;

    let err = CaulkError::ConfigRead {
        path: "caulk.toml".into(),
        source: io_error(),
    };

    assert!(err.source().is_some());
}
