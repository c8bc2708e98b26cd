//! Error types for the caulk generator

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type CaulkResult<T> = Result<T, CaulkError>;

/// Error type for generator operations
///
/// Every variant is fatal: the run stops at the first error and nothing is
/// retried. Semantic schema problems (unknown types, duplicate names) are not
/// represented here; they only show up when the emitted code is compiled.
#[derive(Error, Debug)]
pub enum CaulkError {
    /// The schema file could not be read
    #[error("failed to read schema {}: {source}", path.display())]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema document is malformed
    #[error("failed to parse schema {}: {source}", path.display())]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An output artifact could not be created or written
    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is malformed
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CaulkError {
    /// Process exit code for this error
    ///
    /// Usage errors never reach this type; the argument parser exits with
    /// its own code before any work starts.
    pub fn exit_code(&self) -> u8 {
        match self {
            CaulkError::SchemaRead { .. }
            | CaulkError::SchemaParse { .. }
            | CaulkError::OutputWrite { .. }
            | CaulkError::ConfigRead { .. }
            | CaulkError::ConfigParse { .. } => 1,
        }
    }

    /// Path of the file the error relates to
    pub fn path(&self) -> &std::path::Path {
        match self {
            CaulkError::SchemaRead { path, .. }
            | CaulkError::SchemaParse { path, .. }
            | CaulkError::OutputWrite { path, .. }
            | CaulkError::ConfigRead { path, .. }
            | CaulkError::ConfigParse { path, .. } => path,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
