//! Method and accessor wrapping.
//!
//! Every callable member of an entity becomes one flat C function: a
//! declaration in the public header and a forwarding body in the bridge.
//!
//! # Receivers
//!
//! Members of records, callback records and overridden interfaces take an
//! explicit `<Owner>* __THIS` receiver. Other interface members take none;
//! the bridge fetches the singleton through the interface's global getter.
//!
//! # Marshaling
//!
//! The bridge body re-views every argument as the real API type:
//!
//! ```text
//! void caulk_Widget_Resize(caulk::Widget* __THIS, int w, int h) {
//!     int* __w = &w;
//!     int* __h = &h;
//!     reinterpret_cast<Widget*>(__THIS)->Resize(
//!         *reinterpret_cast<int*>(__w),
//!         *reinterpret_cast<int*>(__h)
//!     );
//! }
//! ```
//!
//! Reference parameters arrive as pointers and get one extra dereference per
//! `&`. Types listed in `bridge.by_value_types` are passed through as-is.

use crate::signature::{RECEIVER_PARAM, RenderContext, Signature, SignatureParam};
use crate::transform::{
    MemberKind, canonicalize_type, namespace_qualify, reference_depth, singleton_getter,
    wrapper_name,
};
use caulk_core::{CallStyle, FilterRules, GeneratorConfig};
use caulk_schema::{Accessor, Collection, Entity, Method, Param};

/// Local holding a non-void call result inside bridge bodies
pub const RESULT_LOCAL: &str = "__RESULT";

const INDENT: &str = "\t";

/// Calling convention of an entity's wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// The receiver handle is the first parameter
    Direct,
    /// The receiver is the interface singleton, fetched inside the bridge
    Singleton,
}

impl Receiver {
    /// Classify an entity by its source collection and the override list
    pub fn classify(name: &str, collection: Collection, filters: &FilterRules) -> Receiver {
        match collection {
            Collection::Interfaces => match filters.direct_receiver.first_match(name) {
                Some(matcher) => {
                    tracing::debug!(entity = name, ?matcher, "Forcing direct receiver");
                    Receiver::Direct
                }
                None => Receiver::Singleton,
            },
            _ => Receiver::Direct,
        }
    }
}

/// Declarations and implementations rendered for one entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wrapped {
    /// Text appended to the public declarations
    pub declarations: String,
    /// Text appended to the bridge
    pub implementations: String,
}

/// Emitter for method and accessor wrappers
pub struct WrapperEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> WrapperEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Wrap every non-excluded method, then every non-excluded accessor
    pub fn emit(&self, owner: &Entity, receiver: Receiver) -> Wrapped {
        let mut out = Wrapped::default();

        if !owner.methods.is_empty() {
            out.declarations.push('\n');
            for method in &owner.methods {
                if let Some(wrapped) = self.wrap_method(owner, receiver, method) {
                    out.declarations.push_str(&wrapped.declarations);
                    out.implementations.push_str(&wrapped.implementations);
                }
            }
        }

        if !owner.accessors.is_empty() {
            out.declarations.push('\n');
            for accessor in &owner.accessors {
                if let Some(wrapped) = self.wrap_accessor(owner, accessor) {
                    out.declarations.push_str(&wrapped.declarations);
                    out.implementations.push_str(&wrapped.implementations);
                }
            }
        }

        out
    }

    /// Whether a flat member name is excluded from wrapping
    pub fn is_excluded(&self, flat_name: &str) -> bool {
        match self.config.filters.excluded.first_match(flat_name) {
            Some(matcher) => {
                tracing::debug!(member = flat_name, ?matcher, "Skipping excluded member");
                true
            }
            None => false,
        }
    }

    /// Wrap one method; `None` when the method is excluded
    pub fn wrap_method(
        &self,
        owner: &Entity,
        receiver: Receiver,
        method: &Method,
    ) -> Option<Wrapped> {
        if self.is_excluded(&method.flat_name) {
            return None;
        }

        let signature = self.method_signature(owner, receiver, method);
        let body = self.method_body(owner, receiver, method);

        Some(self.assemble(&signature, &body))
    }

    /// Wrap one accessor; `None` when the accessor is excluded
    pub fn wrap_accessor(&self, owner: &Entity, accessor: &Accessor) -> Option<Wrapped> {
        if self.is_excluded(&accessor.flat_name) {
            return None;
        }

        let signature = Signature {
            return_type: format!("{}*", owner.name),
            name: wrapper_name(&accessor.flat_name, MemberKind::Accessor, &self.config.naming),
            receiver: None,
            params: Vec::new(),
        };

        let bridge = &self.config.bridge;
        let mut body = String::new();
        body.push_str(&format!(
            "{INDENT}{}* {RESULT_LOCAL} = {}();\n",
            owner.name, accessor.name
        ));
        body.push_str(&format!(
            "{INDENT}return *reinterpret_cast<{}**>(&{RESULT_LOCAL});\n",
            namespace_qualify(&owner.name, bridge)
        ));

        Some(self.assemble(&signature, &body))
    }

    fn assemble(&self, signature: &Signature, body: &str) -> Wrapped {
        let bridge = &self.config.bridge;

        Wrapped {
            declarations: format!("{};\n", signature.render(RenderContext::Public, bridge)),
            implementations: format!(
                "{} {{\n{body}}}\n\n",
                signature.render(RenderContext::Bridge, bridge)
            ),
        }
    }

    fn is_constructor(&self, method: &Method) -> bool {
        method.is_constructor(&self.config.naming.constructor_marker)
    }

    /// Nominal return type, or the owner type for constructors
    fn return_type<'m>(&self, owner: &'m Entity, method: &'m Method) -> &'m str {
        if self.is_constructor(method) {
            &owner.name
        } else {
            &method.return_type
        }
    }

    fn method_signature(&self, owner: &Entity, receiver: Receiver, method: &Method) -> Signature {
        Signature {
            return_type: canonicalize_type(self.return_type(owner, method)),
            name: wrapper_name(&method.flat_name, MemberKind::Method, &self.config.naming),
            receiver: (receiver == Receiver::Direct).then(|| owner.name.clone()),
            params: method
                .params
                .iter()
                .map(|param| SignatureParam {
                    name: param.name.clone(),
                    ty: canonicalize_type(&param.ty),
                })
                .collect(),
        }
    }

    fn is_by_value(&self, param: &Param) -> bool {
        self.config
            .bridge
            .by_value_types
            .matches(&canonicalize_type(&param.ty))
    }

    fn method_body(&self, owner: &Entity, receiver: Receiver, method: &Method) -> String {
        let bridge = &self.config.bridge;
        let mut body = String::new();

        for param in method.params.iter().filter(|p| !self.is_by_value(p)) {
            let ty = namespace_qualify(&canonicalize_type(&param.ty), bridge);
            body.push_str(&format!(
                "{INDENT}{ty}* __{name} = &{name};\n",
                name = param.name
            ));
        }

        let call = self.call_expression(owner, receiver, method);
        let return_type = self.return_type(owner, method);

        if return_type == "void" {
            body.push_str(&format!("{INDENT}{call};\n"));
        } else {
            let qualified = namespace_qualify(&canonicalize_type(return_type), bridge);
            body.push_str(&format!("{INDENT}{return_type} {RESULT_LOCAL} = {call};\n"));

            // A reference result already is the object; its address is the pointer
            if reference_depth(return_type) > 0 {
                body.push_str(&format!(
                    "{INDENT}return reinterpret_cast<{qualified}>(&{RESULT_LOCAL});\n"
                ));
            } else {
                body.push_str(&format!(
                    "{INDENT}return *reinterpret_cast<{qualified}*>(&{RESULT_LOCAL});\n"
                ));
            }
        }

        body
    }

    fn call_expression(&self, owner: &Entity, receiver: Receiver, method: &Method) -> String {
        let bridge = &self.config.bridge;
        let mut args = Vec::with_capacity(method.params.len() + 1);

        let callee = if self.is_constructor(method) {
            owner.name.clone()
        } else {
            let target = match receiver {
                Receiver::Direct => {
                    format!("reinterpret_cast<{}*>({RECEIVER_PARAM})", owner.name)
                }
                Receiver::Singleton => format!("{}()", singleton_getter(&owner.name, bridge)),
            };

            match bridge.call_style {
                CallStyle::Member => format!("{target}->{}", method.name),
                CallStyle::Flat => {
                    args.push(target);
                    method.flat_name.clone()
                }
            }
        };

        args.extend(method.params.iter().map(|param| self.forward_argument(param)));

        if args.is_empty() {
            format!("{callee}()")
        } else {
            let separator = format!(",\n{INDENT}{INDENT}");
            format!(
                "{callee}(\n{INDENT}{INDENT}{}\n{INDENT})",
                args.join(&separator)
            )
        }
    }

    fn forward_argument(&self, param: &Param) -> String {
        if self.is_by_value(param) {
            return param.name.clone();
        }

        format!(
            "{}*reinterpret_cast<{}*>(__{})",
            "*".repeat(reference_depth(&param.ty)),
            canonicalize_type(&param.ty),
            param.name
        )
    }
}
