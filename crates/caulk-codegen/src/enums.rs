//! Enum emission.

use crate::transform::scope_qualify;
use caulk_core::GeneratorConfig;
use caulk_schema::EnumDef;

/// Integer alias C callers see in place of the enum type
pub const ENUM_STORAGE_TYPE: &str = "enum32_t";

/// Emitter for top-level and nested enums
pub struct EnumEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> EnumEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Emit one enum collection behind a single internal guard.
    ///
    /// Nested enums pass their owner so the emitted names are scope-qualified.
    /// An empty collection emits nothing.
    pub fn emit(&self, enums: &[EnumDef], owner: Option<&str>) -> String {
        if enums.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        output.push_str(&format!("#ifndef {}\n", self.config.bridge.internal_guard));

        for def in enums {
            output.push_str(&self.emit_one(def, owner));
        }

        output.push_str("#endif\n");
        output
    }

    fn emit_one(&self, def: &EnumDef, owner: Option<&str>) -> String {
        let name = scope_qualify(&def.name, owner);
        let mut output = String::new();

        output.push_str("#ifndef __cplusplus\n");
        output.push_str(&format!("typedef {ENUM_STORAGE_TYPE} {name};\n"));
        output.push_str("#endif\n");

        output.push_str(&format!("enum {name} {{\n"));
        for value in &def.values {
            output.push_str(&format!("\t{} = {},\n", value.name, value.value));
        }
        output.push_str("};\n\n");

        output
    }
}

#[cfg(test)]
#[path = "enums/enums_tests.rs"]
mod enums_tests;
