//! Identifier and type rewriting shared by every emitter.
//!
//! All functions are pure and return owned strings.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `Mode` owned by `Widget` | [`scope_qualify`] | `Widget__Mode` |
//! | `const Foo::Bar &` | [`canonicalize_type`] | `const Foo__Bar *` |
//! | `const HSteamPipe *` | [`namespace_qualify`] | `const caulk::HSteamPipe *` |
//! | `m_rgch`, `char [32]` | [`declaration_splice`] | `char m_rgch[32]` |
//! | `SteamAPI_ISteamUser_GetSteamID` | [`wrapper_name`] | `caulk_SteamUser_GetSteamID` |

use caulk_core::{BridgeRules, NamingRules};

/// Prefix marking a field as not meant for direct external mutation
pub const PRIVATE_PREFIX: &str = "__";

/// Kind of callable member a wrapper name is derived for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Accessor,
}

/// Qualify a nested name with its owner: `Owner__child`.
///
/// # Examples
///
/// ```
/// use caulk_codegen::transform::scope_qualify;
///
/// assert_eq!(scope_qualify("EMode", Some("Widget")), "Widget__EMode");
/// assert_eq!(scope_qualify("EMode", None), "EMode");
/// ```
pub fn scope_qualify(child: &str, parent: Option<&str>) -> String {
    match parent {
        Some(parent) => format!("{parent}__{child}"),
        None => child.to_string(),
    }
}

/// Rewrite a C++ type expression into C declaration grammar.
///
/// Every `:` becomes `_` and every `&` becomes `*`; nothing else changes.
pub fn canonicalize_type(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ':' => '_',
            '&' => '*',
            other => other,
        })
        .collect()
}

/// Number of reference markers in a raw type
pub fn reference_depth(raw: &str) -> usize {
    raw.matches('&').count()
}

/// Prefix a non-primitive type with the bridge namespace.
///
/// A leading `const ` stays in front of the namespace.
///
/// # Examples
///
/// ```
/// use caulk_codegen::transform::namespace_qualify;
/// use caulk_core::BridgeRules;
///
/// let rules = BridgeRules::default();
/// assert_eq!(namespace_qualify("HSteamPipe", &rules), "caulk::HSteamPipe");
/// assert_eq!(namespace_qualify("const SteamParamStringArray_t *", &rules),
///            "const caulk::SteamParamStringArray_t *");
/// assert_eq!(namespace_qualify("uint32", &rules), "uint32");
/// ```
pub fn namespace_qualify(ty: &str, rules: &BridgeRules) -> String {
    if rules.primitive_types.matches(ty) {
        return ty.to_string();
    }

    match ty.strip_prefix("const ") {
        Some(rest) => format!("const {}::{rest}", rules.namespace),
        None => format!("{}::{ty}", rules.namespace),
    }
}

/// Thread a declarator name through a possibly compound type.
///
/// Function pointers get the name inside `(*)`, arrays before the first
/// `[`, everything else after the type.
///
/// # Examples
///
/// ```
/// use caulk_codegen::transform::declaration_splice;
///
/// assert_eq!(declaration_splice("hook", "void (*)(int, const char *)", false),
///            "void (*hook)(int, const char *)");
/// assert_eq!(declaration_splice("m_rgch", "char [32]", false), "char m_rgch[32]");
/// assert_eq!(declaration_splice("m_id", "uint64", true), "uint64 __m_id");
/// ```
pub fn declaration_splice(name: &str, ty: &str, private: bool) -> String {
    let prefix = if private { PRIVATE_PREFIX } else { "" };

    if let Some(offset) = ty.find("(*)") {
        let (head, tail) = ty.split_at(offset + 2);
        format!("{head}{prefix}{name}{tail}")
    } else if let Some(offset) = ty.find('[') {
        let (head, tail) = ty.split_at(offset);
        format!("{} {prefix}{name}{tail}", head.trim_end())
    } else {
        format!("{ty} {prefix}{name}")
    }
}

/// Derive the exported wrapper name from a flat member name.
///
/// The source prefix is replaced by the module prefix. Method stems go
/// through the first matching stem rewrite; accessor stems are cut at the
/// version suffix.
pub fn wrapper_name(flat: &str, kind: MemberKind, naming: &NamingRules) -> String {
    let mut stem = flat
        .strip_prefix(naming.source_prefix.as_str())
        .unwrap_or(flat)
        .to_string();

    match kind {
        MemberKind::Method => {
            if let Some(rewrite) = naming
                .stem_rewrites
                .iter()
                .find(|rw| stem.starts_with(rw.from.as_str()))
            {
                stem = format!("{}{}", rewrite.to, &stem[rewrite.from.len()..]);
            }
        }
        MemberKind::Accessor => {
            let suffix = naming.accessor_version_suffix.as_str();
            if !suffix.is_empty()
                && let Some(at) = stem.find(suffix)
            {
                stem.truncate(at);
            }
        }
    }

    format!("{}{stem}", naming.module_prefix)
}

/// Name of the global getter returning an interface's singleton
///
/// `ISteamUser` -> `SteamUser`
pub fn singleton_getter(owner: &str, rules: &BridgeRules) -> String {
    owner
        .strip_prefix(rules.interface_marker.as_str())
        .unwrap_or(owner)
        .to_string()
}
