//! caulk-core - Error taxonomy and generator configuration
//!
//! This crate provides the types shared by every caulk crate:
//! - [`CaulkError`] for fatal generator errors
//! - [`GeneratorConfig`] and its rule sections for data-driven naming,
//!   filtering and bridge rendering

mod config;
mod error;

pub use config::{
    BridgeRules, CallStyle, FilterRules, GeneratorConfig, MatchList, NameMatcher, NamingRules,
    StemRewrite,
};
pub use error::{CaulkError, CaulkResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CaulkError, CaulkResult, CallStyle, GeneratorConfig, MatchList, NameMatcher};
}
