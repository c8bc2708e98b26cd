//! # caulk
//!
//! Generates a flat C API for an object-oriented C++ SDK from a declarative
//! JSON schema of its surface.
//!
//! caulk emits two things:
//! - a public C header declaring constants, enums, record layouts, opaque
//!   interface handles and one flat function per method or accessor
//! - an internal C++ bridge that forwards each flat call to the real API,
//!   re-viewing arguments and results between the generated and real types
//!
//! ## Quick Start
//!
//! ```no_run
//! use caulk::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let output = caulk::render_file("steam_api.json", &config, OutputMode::Combined)?;
//!
//! std::fs::write("caulk.h", &output.declarations).unwrap();
//! std::fs::write("caulk.cpp", &output.bridge).unwrap();
//! # Ok::<(), caulk::CaulkError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`caulk_core`] - Errors and generator configuration
//! - [`caulk_schema`] - Schema tree and permissive JSON reader
//! - [`caulk_codegen`] - Transforms, emitters and the [`Generator`]

use std::path::Path;

// Re-export core types
pub use caulk_core::{
    BridgeRules, CallStyle, CaulkError, CaulkResult, FilterRules, GeneratorConfig, MatchList,
    NameMatcher, NamingRules, StemRewrite,
};

// Re-export schema types
pub use caulk_schema::{Collection, Entity, Schema};

// Re-export generation
pub use caulk_codegen::{GeneratedOutput, Generator, OutputMode, transform};

pub use tracing;

/// Load a schema file and render every artifact for `mode` in memory
pub fn render_file(
    schema_path: impl AsRef<Path>,
    config: &GeneratorConfig,
    mode: OutputMode,
) -> CaulkResult<GeneratedOutput> {
    let schema = Schema::load(schema_path)?;
    Ok(Generator::new(&schema, config).generate(mode))
}

/// Prelude module for convenient imports.
///
/// Use `use caulk::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        CaulkError, CaulkResult, GeneratedOutput, Generator, GeneratorConfig, OutputMode, Schema,
    };
}
