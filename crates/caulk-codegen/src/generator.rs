//! Top-level orchestration of one generation run.
//!
//! The generator walks the schema once, in a fixed order, and renders every
//! artifact into memory. Nothing touches the filesystem here; callers write
//! the returned [`GeneratedOutput`] once rendering has finished.

use crate::declarations;
use crate::enums::EnumEmitter;
use crate::records::RecordEmitter;
use crate::wrapper::{Receiver, WrapperEmitter};
use caulk_core::GeneratorConfig;
use caulk_schema::{Collection, Schema};

/// Layout of the generated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One public header holding every declaration, plus the bridge
    Combined,

    /// A glue header with the declarations, a public header wrapping it with
    /// allocator hooks and the runtime surface, plus the bridge
    Split,
}

/// Rendered artifacts of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Combined: the public header. Split: the glue header.
    pub declarations: String,

    /// Split only: the public header that inlines the glue header
    pub public_header: Option<String>,

    /// Internal C++ bridge
    pub bridge: String,
}

/// Declarations and bridge implementations accumulated during the walk
#[derive(Debug, Default)]
struct Glue {
    declarations: String,
    implementations: String,
}

pub struct Generator<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Render every artifact for the given mode
    pub fn generate(&self, mode: OutputMode) -> GeneratedOutput {
        let glue = self.glue();
        let bridge = self.bridge(&glue.implementations);

        match mode {
            OutputMode::Combined => {
                let mut header = String::new();
                header.push_str("#pragma once\n\n");
                header.push_str(&self.std_includes());
                header.push_str(&self.prelude());
                header.push_str(&glue.declarations);

                GeneratedOutput {
                    declarations: header,
                    public_header: None,
                    bridge,
                }
            }
            OutputMode::Split => {
                let mut glue_header = self.prelude();
                glue_header.push_str(&glue.declarations);

                let public_header = self.public_header(&glue_header);

                GeneratedOutput {
                    declarations: glue_header,
                    public_header: Some(public_header),
                    bridge,
                }
            }
        }
    }

    /// Walk the schema: constants, type declarations, then every entity
    fn glue(&self) -> Glue {
        let mut glue = Glue::default();

        glue.declarations
            .push_str(&declarations::constants(&self.schema.consts));
        glue.declarations.push_str(&self.type_declarations());

        let records = RecordEmitter::new(self.config);
        let wrappers = WrapperEmitter::new(self.config);

        for collection in Collection::ENTITIES {
            for entity in self.schema.entities(collection) {
                let receiver = Receiver::classify(&entity.name, collection, &self.config.filters);
                tracing::debug!(entity = %entity.name, %collection, ?receiver, "Emitting entity");

                glue.declarations.push_str(&records.fields(entity));

                let wrapped = wrappers.emit(entity, receiver);
                glue.declarations.push_str(&wrapped.declarations);
                glue.implementations.push_str(&wrapped.implementations);

                glue.declarations.push_str(&records.callback_tag(entity));
            }
        }

        glue
    }

    /// Enums, forward declarations and aliases
    fn type_declarations(&self) -> String {
        let guard = &self.config.bridge.internal_guard;
        let enums = EnumEmitter::new(self.config);
        let records = RecordEmitter::new(self.config);

        let mut output = enums.emit(&self.schema.enums, None);
        output.push_str(&format!("#ifndef {guard}\n\n"));

        for collection in Collection::ENTITIES {
            for entity in self.schema.entities(collection) {
                output.push_str(&records.forward_declaration(entity, collection));
                output.push_str(&enums.emit(&entity.enums, Some(&entity.name)));
            }
            output.push('\n');
        }

        output.push_str(&declarations::aliases(&self.schema.typedefs));
        output.push_str("\n#endif\n\n");

        output
    }

    fn std_includes(&self) -> String {
        "#include <stddef.h>\n#include <stdint.h>\n#include <stdbool.h>\n\n".to_string()
    }

    /// Configured prelude behind the internal guard
    fn prelude(&self) -> String {
        let mut output = format!("#ifndef {}\n", self.config.bridge.internal_guard);
        for line in &self.config.prelude {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str("#endif\n\n");
        output
    }

    fn bridge(&self, implementations: &str) -> String {
        let rules = &self.config.bridge;
        let mut output = String::new();

        output.push_str(&format!("#include \"{}\"\n\n", rules.api_header()));
        output.push_str(&format!("namespace {} {{ extern \"C\" {{ \n", rules.namespace));
        output.push_str(&format!("\t#include \"{}\"\n", rules.glue_header));
        output.push_str("} }\n\n");
        output.push_str("extern \"C\" {\n\n");
        output.push_str(implementations);
        output.push_str("}\n");

        output
    }

    fn public_header(&self, glue_header: &str) -> String {
        let prefix = &self.config.naming.module_prefix;
        let malloc = format!("{prefix}Malloc");
        let free = format!("{prefix}Free");
        let mut output = String::new();

        output.push_str("#pragma once\n\n");
        output.push_str(&self.std_includes());

        output.push_str(&format!("#if !defined({malloc}) || !defined({free})\n"));
        output.push_str("#  ifdef __cplusplus\n");
        output.push_str("#    include <cstdlib>\n");
        output.push_str("#  else\n");
        output.push_str("#    include <stdlib.h>\n");
        output.push_str("#  endif\n");
        output.push_str("#endif\n\n");
        output.push_str(&format!("#ifndef {malloc}\n#  define {malloc} malloc\n#endif\n\n"));
        output.push_str(&format!("#ifndef {free}\n#  define {free} free\n#endif\n\n"));

        output.push_str(&self.prelude());

        output.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
        output.push_str(glue_header);
        output.push_str(&self.runtime_surface());
        output.push_str("#ifdef __cplusplus\n}\n#endif\n\n");

        output
    }

    /// Declarations of the hand-written dispatch runtime
    fn runtime_surface(&self) -> String {
        let prefix = &self.config.naming.module_prefix;
        let handle = &self.config.bridge.call_handle_type;
        let mut output = String::new();

        output.push_str(&format!("typedef void (*{prefix}ResultHandler)(void*, bool);\n"));
        output.push_str(&format!("typedef void (*{prefix}CallbackHandler)(void*);\n\n"));
        output.push_str(&format!("bool {prefix}Init();\n"));
        output.push_str(&format!("void {prefix}Shutdown();\n"));
        output.push_str(&format!(
            "void {prefix}Resolve({handle}, {prefix}ResultHandler);\n"
        ));
        output.push_str(&format!(
            "void {prefix}Register(uint32_t, {prefix}CallbackHandler);\n"
        ));
        output.push_str(&format!("void {prefix}Dispatch();\n\n"));

        output
    }
}
