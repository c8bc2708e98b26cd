//! Typed schema tree.
//!
//! The tree mirrors the vendor JSON document one-to-one. It is parsed once
//! and only read afterwards; every collection keeps its document order.
//!
//! # Structure
//!
//! - [`Schema`]: the root, one `Vec` per top-level collection
//! - [`Entity`]: records, callback records and interfaces share one shape
//! - [`Method`], [`Param`], [`Accessor`]: callable members of an entity
//! - [`Constant`], [`EnumDef`], [`Alias`]: declarations spliced verbatim
//!
//! # Examples
//!
//! ```
//! use caulk_schema::Schema;
//!
//! let schema = Schema::parse(r#"{
//!     "consts": [{"constname": "MAX_COUNT", "consttype": "int", "constval": "64"}],
//! }"#).unwrap();
//!
//! assert_eq!(schema.consts[0].name, "MAX_COUNT");
//! ```

use crate::relax::relax;
use caulk_core::{CaulkError, CaulkResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Root of a parsed schema document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub consts: Vec<Constant>,

    #[serde(default)]
    pub enums: Vec<EnumDef>,

    #[serde(default)]
    pub structs: Vec<Entity>,

    #[serde(default)]
    pub callback_structs: Vec<Entity>,

    #[serde(default)]
    pub interfaces: Vec<Entity>,

    #[serde(default)]
    pub typedefs: Vec<Alias>,
}

/// A named constant; the value expression is kept as written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Constant {
    #[serde(rename = "constname")]
    pub name: String,

    #[serde(rename = "consttype")]
    pub ty: String,

    #[serde(rename = "constval", deserialize_with = "raw_text")]
    pub value: String,
}

/// An enumerated type, either top-level or nested inside an entity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumDef {
    #[serde(rename = "enumname")]
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumValue {
    pub name: String,

    #[serde(deserialize_with = "raw_text")]
    pub value: String,
}

/// A record, callback record or interface.
///
/// Records are keyed by `struct`, interfaces by `classname`; both spellings
/// are accepted for either collection. When both are present `struct` wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawEntity")]
pub struct Entity {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default)]
    pub methods: Vec<Method>,

    #[serde(default)]
    pub accessors: Vec<Accessor>,

    /// Callback identifier; zero means the entity has none.
    #[serde(default)]
    pub callback_id: i64,

    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

#[derive(Deserialize)]
struct RawEntity {
    #[serde(rename = "struct")]
    struct_name: Option<String>,

    classname: Option<String>,

    #[serde(default)]
    fields: Vec<Field>,

    #[serde(default)]
    methods: Vec<Method>,

    #[serde(default)]
    accessors: Vec<Accessor>,

    #[serde(default)]
    callback_id: i64,

    #[serde(default)]
    enums: Vec<EnumDef>,
}

impl TryFrom<RawEntity> for Entity {
    type Error = String;

    fn try_from(raw: RawEntity) -> Result<Self, Self::Error> {
        let name = raw
            .struct_name
            .or(raw.classname)
            .ok_or_else(|| "entity has neither `struct` nor `classname`".to_string())?;

        Ok(Entity {
            name,
            fields: raw.fields,
            methods: raw.methods,
            accessors: raw.accessors,
            callback_id: raw.callback_id,
            enums: raw.enums,
        })
    }
}

impl Entity {
    /// Callback identifier, if the entity carries a non-zero one
    pub fn callback_tag(&self) -> Option<i64> {
        (self.callback_id != 0).then_some(self.callback_id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    #[serde(rename = "fieldname")]
    pub name: String,

    #[serde(rename = "fieldtype")]
    pub ty: String,

    #[serde(default)]
    pub private: bool,
}

/// A method as listed in the flat API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Method {
    /// Fully qualified flat name, e.g. `SteamAPI_ISteamUser_GetSteamID`.
    #[serde(rename = "methodname_flat")]
    pub flat_name: String,

    #[serde(rename = "methodname")]
    pub name: String,

    #[serde(rename = "returntype")]
    pub return_type: String,

    #[serde(default)]
    pub params: Vec<Param>,
}

impl Method {
    /// Whether the flat name carries the constructor marker
    pub fn is_constructor(&self, marker: &str) -> bool {
        self.flat_name.contains(marker)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Param {
    #[serde(rename = "paramname")]
    pub name: String,

    #[serde(rename = "paramtype")]
    pub ty: String,
}

/// A global getter returning a singleton interface instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Accessor {
    #[serde(rename = "name_flat")]
    pub flat_name: String,

    /// Name of the getter to invoke, e.g. `SteamUser`.
    pub name: String,
}

/// A typedef; the type may be function-pointer or array shaped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alias {
    #[serde(rename = "typedef")]
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

/// Accept a JSON string verbatim, or the textual form of a number.
fn raw_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number expression, found {other}"
        ))),
    }
}

impl Schema {
    /// Read and parse a schema file.
    pub fn load(path: impl AsRef<Path>) -> CaulkResult<Schema> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CaulkError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;

        let schema = Self::parse(&content).map_err(|source| CaulkError::SchemaParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            consts = schema.consts.len(),
            enums = schema.enums.len(),
            structs = schema.structs.len(),
            callback_structs = schema.callback_structs.len(),
            interfaces = schema.interfaces.len(),
            typedefs = schema.typedefs.len(),
            "Loaded schema"
        );

        Ok(schema)
    }

    /// Parse schema text, tolerating comments and trailing commas.
    pub fn parse(text: &str) -> Result<Schema, serde_json::Error> {
        serde_json::from_str(&relax(text))
    }
}
