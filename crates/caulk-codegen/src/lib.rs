//! caulk-codegen - C header and C++ bridge generation
//!
//! This crate provides:
//! - [`transform`] pure identifier and type rewriting helpers
//! - [`Signature`] rendered once per member for both output contexts
//! - emitters for enums, records, constants, aliases and wrappers
//! - [`Generator`] which walks a [`caulk_schema::Schema`] and renders every
//!   artifact into memory
//!
//! # Example
//!
//! ```
//! use caulk_codegen::{Generator, OutputMode};
//! use caulk_core::GeneratorConfig;
//! use caulk_schema::Schema;
//!
//! let schema = Schema::parse(r#"{"consts": [
//!     {"constname": "MAX_COUNT", "consttype": "int", "constval": "64"}
//! ]}"#).unwrap();
//! let config = GeneratorConfig::default();
//!
//! let output = Generator::new(&schema, &config).generate(OutputMode::Combined);
//! assert!(output.declarations.contains("#define MAX_COUNT ((int)(64))"));
//! ```

pub mod declarations;
mod enums;
mod generator;
mod records;
mod signature;
pub mod transform;
mod wrapper;

pub use enums::{ENUM_STORAGE_TYPE, EnumEmitter};
pub use generator::{GeneratedOutput, Generator, OutputMode};
pub use records::RecordEmitter;
pub use signature::{RECEIVER_PARAM, RenderContext, Signature, SignatureParam};
pub use wrapper::{RESULT_LOCAL, Receiver, Wrapped, WrapperEmitter};
