//! Logical wrapper signatures and their two renderings.
//!
//! A [`Signature`] is built once per member and rendered twice: for the
//! public header, where types stay as the C caller sees them, and for the
//! bridge, where every non-primitive type is namespace-qualified so it
//! resolves to the generated opaque view instead of the real API type.

use crate::transform::{declaration_splice, namespace_qualify};
use caulk_core::BridgeRules;

/// Name of the explicit receiver parameter of direct-receiver wrappers
pub const RECEIVER_PARAM: &str = "__THIS";

/// Where a signature is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    /// Public declaration surface
    Public,
    /// Internal bridge implementation
    Bridge,
}

impl RenderContext {
    /// Render a canonical type for this context
    pub fn render_type(self, ty: &str, rules: &BridgeRules) -> String {
        match self {
            RenderContext::Public => ty.to_string(),
            RenderContext::Bridge => namespace_qualify(ty, rules),
        }
    }
}

/// A parameter with an already canonicalized type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParam {
    pub name: String,
    pub ty: String,
}

/// A flat function signature, independent of rendering context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub return_type: String,
    pub name: String,

    /// Owner type threaded in as `<Owner>* __THIS`, for direct receivers
    pub receiver: Option<String>,

    pub params: Vec<SignatureParam>,
}

impl Signature {
    /// Render `ret name(params)` without a trailing `;` or body
    pub fn render(&self, context: RenderContext, rules: &BridgeRules) -> String {
        let mut parts = Vec::with_capacity(self.params.len() + 1);

        if let Some(owner) = &self.receiver {
            let receiver_ty = format!("{}*", context.render_type(owner, rules));
            parts.push(declaration_splice(RECEIVER_PARAM, &receiver_ty, false));
        }

        parts.extend(self.params.iter().map(|param| {
            declaration_splice(&param.name, &context.render_type(&param.ty, rules), false)
        }));

        format!(
            "{} {}({})",
            context.render_type(&self.return_type, rules),
            self.name,
            parts.join(", ")
        )
    }
}

#[cfg(test)]
#[path = "signature/signature_tests.rs"]
mod signature_tests;
