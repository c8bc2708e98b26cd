//! Generation command
//!
//! Loads the configuration and schema, renders every artifact in memory,
//! and only then creates the output files. A schema that fails to load
//! leaves no output behind.

use anyhow::{Context, Result};
use caulk_codegen::{GeneratedOutput, Generator, OutputMode};
use caulk_core::{CaulkError, CaulkResult, GeneratorConfig};
use caulk_schema::Schema;
use std::fs;
use std::path::{Path, PathBuf};

/// Output and input locations taken from the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
struct Artifacts {
    /// Combined: the public header. Split: the glue header.
    declarations: PathBuf,
    public_header: Option<PathBuf>,
    bridge: PathBuf,
    schema: PathBuf,
}

impl Artifacts {
    fn from_paths(paths: Vec<PathBuf>) -> Result<Self> {
        let mut paths = paths.into_iter();

        match (paths.next(), paths.next(), paths.next(), paths.next(), paths.next()) {
            (Some(header), Some(bridge), Some(schema), None, None) => Ok(Self {
                declarations: header,
                public_header: None,
                bridge,
                schema,
            }),
            (Some(glue), Some(header), Some(bridge), Some(schema), None) => Ok(Self {
                declarations: glue,
                public_header: Some(header),
                bridge,
                schema,
            }),
            _ => anyhow::bail!("expected 3 or 4 paths"),
        }
    }

    fn mode(&self) -> OutputMode {
        match self.public_header {
            Some(_) => OutputMode::Split,
            None => OutputMode::Combined,
        }
    }
}

/// Run the generator for the given positional paths
pub fn run(paths: Vec<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let artifacts = Artifacts::from_paths(paths)?;

    let config = match &config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration");
            GeneratorConfig::from_file(path)?
        }
        None => GeneratorConfig::default(),
    };

    let schema = Schema::load(&artifacts.schema)?;
    let output = Generator::new(&schema, &config).generate(artifacts.mode());

    write_artifacts(&artifacts, &output).with_context(|| {
        format!(
            "Failed to write artifacts for schema {}",
            artifacts.schema.display()
        )
    })?;

    Ok(())
}

fn write_artifacts(artifacts: &Artifacts, output: &GeneratedOutput) -> CaulkResult<()> {
    write(&artifacts.declarations, &output.declarations)?;

    if let (Some(path), Some(contents)) = (&artifacts.public_header, &output.public_header) {
        write(path, contents)?;
    }

    write(&artifacts.bridge, &output.bridge)
}

fn write(path: &Path, contents: &str) -> CaulkResult<()> {
    fs::write(path, contents).map_err(|source| CaulkError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "Generated");
    Ok(())
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
