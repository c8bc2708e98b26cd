//! Constants and type aliases.

use crate::transform::declaration_splice;
use caulk_schema::{Alias, Constant};

/// Symbolic definitions, one per constant, followed by a blank line.
///
/// ```
/// use caulk_codegen::declarations::constants;
/// use caulk_schema::Schema;
///
/// let schema = Schema::parse(
///     r#"{"consts": [{"constname": "MAX_COUNT", "consttype": "int", "constval": "64"}]}"#,
/// ).unwrap();
/// assert_eq!(constants(&schema.consts), "#define MAX_COUNT ((int)(64))\n\n");
/// ```
pub fn constants(consts: &[Constant]) -> String {
    let mut output = String::new();

    for constant in consts {
        output.push_str(&format!(
            "#define {} (({})({}))\n",
            constant.name, constant.ty, constant.value
        ));
    }

    output.push('\n');
    output
}

/// One `typedef` per alias; alias types are used as written
pub fn aliases(aliases: &[Alias]) -> String {
    let mut output = String::new();

    for alias in aliases {
        output.push_str(&format!(
            "typedef {};\n",
            declaration_splice(&alias.name, &alias.ty, false)
        ));
    }

    output
}
