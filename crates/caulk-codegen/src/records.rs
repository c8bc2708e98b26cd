//! Record layouts, forward declarations and callback tags.

use crate::transform::{canonicalize_type, declaration_splice};
use caulk_core::GeneratorConfig;
use caulk_schema::{Collection, Entity};

/// Emitter for the data side of entities
pub struct RecordEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> RecordEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Forward declaration making the entity name usable as a C type.
    ///
    /// Records become an incomplete `struct`; interfaces become an opaque
    /// `void*` handle.
    pub fn forward_declaration(&self, entity: &Entity, collection: Collection) -> String {
        let name = &entity.name;

        match collection {
            Collection::Interfaces => format!("typedef void* {name};\n"),
            _ => format!(
                "struct {name};\n#ifndef __cplusplus\ntypedef struct {name} {name};\n#endif\n"
            ),
        }
    }

    /// Guarded struct body with one line per field; empty for fieldless entities
    pub fn fields(&self, entity: &Entity) -> String {
        if entity.fields.is_empty() {
            return String::new();
        }

        let guard = &self.config.bridge.internal_guard;
        let mut output = String::new();

        output.push_str(&format!("#ifndef {guard}\n"));
        output.push_str(&format!("struct {} {{\n", entity.name));
        for field in &entity.fields {
            let declaration =
                declaration_splice(&field.name, &canonicalize_type(&field.ty), field.private);
            output.push_str(&format!("\t{declaration};\n"));
        }
        output.push_str("};\n#endif\n");

        output
    }

    /// `#define <Name>_iCallback <id>` for entities with a callback tag
    pub fn callback_tag(&self, entity: &Entity) -> String {
        match entity.callback_tag() {
            Some(id) => format!("#define {}_iCallback {id}\n", entity.name),
            None => String::new(),
        }
    }
}
