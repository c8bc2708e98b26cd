//! Generator configuration types
//!
//! Every ad hoc rule the generator applies (name prefixes, excluded members,
//! receiver overrides, by-value types, primitive spellings) lives here as
//! data. The defaults target the Steamworks flat API schema; a `caulk.toml`
//! file can override any section.

use crate::error::{CaulkError, CaulkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single name-matching rule
///
/// In TOML: `{ exact = "CSteamID" }`, `{ prefix = "ISteam" }` or
/// `{ contains = "ISteamHTML" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatcher {
    Exact(String),
    Prefix(String),
    Contains(String),
}

impl NameMatcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Exact(s) => name == s,
            NameMatcher::Prefix(s) => name.starts_with(s.as_str()),
            NameMatcher::Contains(s) => name.contains(s.as_str()),
        }
    }

    fn contains(s: &str) -> Self {
        NameMatcher::Contains(s.to_string())
    }

    fn exact(s: &str) -> Self {
        NameMatcher::Exact(s.to_string())
    }
}

/// Ordered list of matchers; a name matches the list if any entry matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchList(pub Vec<NameMatcher>);

impl MatchList {
    /// First matcher that accepts `name`, in list order
    pub fn first_match(&self, name: &str) -> Option<&NameMatcher> {
        self.0.iter().find(|m| m.matches(name))
    }

    pub fn matches(&self, name: &str) -> bool {
        self.first_match(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NameMatcher> for MatchList {
    fn from_iter<I: IntoIterator<Item = NameMatcher>>(iter: I) -> Self {
        MatchList(iter.into_iter().collect())
    }
}

/// Prefix rewrite applied to a method's name stem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRewrite {
    pub from: String,
    pub to: String,
}

/// How flat wrapper names are derived from schema names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRules {
    /// Prefix stripped from every flat name
    pub source_prefix: String,

    /// Prefix prepended to every wrapper name
    pub module_prefix: String,

    /// Accessor names are cut at the first occurrence of this token
    pub accessor_version_suffix: String,

    /// Flat method names containing this marker are constructors
    pub constructor_marker: String,

    /// Rewrites applied to method stems; the first matching entry wins
    pub stem_rewrites: Vec<StemRewrite>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            source_prefix: "SteamAPI_".to_string(),
            module_prefix: "caulk_".to_string(),
            accessor_version_suffix: "_v0".to_string(),
            constructor_marker: "Construct".to_string(),
            stem_rewrites: vec![StemRewrite {
                from: "ISteam".to_string(),
                to: "Steam".to_string(),
            }],
        }
    }
}

/// Shape of the forwarding call inside bridge bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStyle {
    /// `receiver->Method(args)` against the object-oriented headers
    #[default]
    Member,

    /// `FlatName(receiver, args)` against the vendor's flat headers
    Flat,
}

impl CallStyle {
    /// Vendor header declaring the calls this style emits
    pub fn default_api_header(self) -> &'static str {
        match self {
            CallStyle::Member => "steam_api.h",
            CallStyle::Flat => "steam_api_flat.h",
        }
    }
}

/// Rules for rendering the internal bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeRules {
    /// Namespace wrapping the generated declarations inside the bridge
    pub namespace: String,

    /// Macro that hides redefinitions from translation units that already
    /// include the real API headers
    pub internal_guard: String,

    /// Header of the real API, included first by the bridge. Unset means
    /// the header matching `call_style`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_header: Option<String>,

    /// File name the bridge uses to include the generated declarations
    pub glue_header: String,

    pub call_style: CallStyle,

    /// Handle type of asynchronous calls in the runtime surface declarations
    pub call_handle_type: String,

    /// Leading marker removed from an interface name to get its singleton
    /// getter (`ISteamUser` -> `SteamUser()`)
    pub interface_marker: String,

    /// Parameter types forwarded by value instead of through a type-punned
    /// pointer
    pub by_value_types: MatchList,

    /// Type spellings that are never namespace-qualified
    pub primitive_types: MatchList,
}

impl BridgeRules {
    /// Header the bridge includes first
    pub fn api_header(&self) -> &str {
        self.api_header
            .as_deref()
            .unwrap_or_else(|| self.call_style.default_api_header())
    }
}

impl Default for BridgeRules {
    fn default() -> Self {
        let mut primitive_types: MatchList = [
            "unsigned ", "int ", "intptr", "int16", "int32", "int64", "char", "void", "bool",
            "float", "double", "size_t",
        ]
        .into_iter()
        .map(NameMatcher::contains)
        .collect();
        primitive_types.0.push(NameMatcher::exact("int"));

        Self {
            namespace: "caulk".to_string(),
            internal_guard: "CAULK_INTERNAL".to_string(),
            api_header: None,
            glue_header: "__gen.h".to_string(),
            call_style: CallStyle::Member,
            call_handle_type: "SteamAPICall_t".to_string(),
            interface_marker: "I".to_string(),
            by_value_types: ["CSteamID", "CGameID"]
                .into_iter()
                .map(NameMatcher::exact)
                .collect(),
            primitive_types,
        }
    }
}

/// Member and receiver filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    /// Methods and accessors whose flat name matches are not emitted
    pub excluded: MatchList,

    /// Interfaces whose name matches use an explicit receiver parameter
    pub direct_receiver: MatchList,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            excluded: [
                "SetDualSenseTriggerEffect",
                "ISteamNetworkingSockets",
                "SteamDatagramHostedAddress",
                "ISteamGameServer",
                "ISteamNetworkingFakeUDPPort",
                "ISteamHTML",
                "SteamGameServer_v",
                "SteamGameServerStats_v",
            ]
            .into_iter()
            .map(NameMatcher::contains)
            .collect(),
            direct_receiver: [
                "SteamMatchmakingServerListResponse",
                "SteamMatchmakingPingResponse",
                "SteamMatchmakingPlayersResponse",
                "SteamMatchmakingRulesResponse",
            ]
            .into_iter()
            .map(NameMatcher::contains)
            .collect(),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub naming: NamingRules,
    pub bridge: BridgeRules,
    pub filters: FilterRules,

    /// Declarations emitted ahead of the schema content for C callers
    pub prelude: Vec<String>,
}

fn default_prelude() -> Vec<String> {
    [
        "typedef uint32_t enum32_t;",
        "typedef enum32_t SteamInputActionEvent_t__AnalogAction_t;",
        "typedef uint64_t CSteamID, CGameID;",
        "typedef void (*SteamAPIWarningMessageHook_t)(int, const char*);",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            naming: NamingRules::default(),
            bridge: BridgeRules::default(),
            filters: FilterRules::default(),
            prelude: default_prelude(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> CaulkResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CaulkError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| CaulkError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
