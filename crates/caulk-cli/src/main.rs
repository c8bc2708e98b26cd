//! caulk-gen - C binding generator
//!
//! Usage:
//! - `caulk-gen <header> <bridge> <schema>` - one public header plus bridge
//! - `caulk-gen <glue> <header> <bridge> <schema>` - glue header, public
//!   header wrapping it, plus bridge

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod generate;

#[derive(Parser)]
#[command(name = "caulk-gen")]
#[command(author, version, about = "Generate a flat C API and C++ bridge from a schema", long_about = None)]
struct Cli {
    /// Output and schema paths: `<header> <bridge> <schema>` or
    /// `<glue> <header> <bridge> <schema>`
    #[arg(required = true, num_args = 3..=4, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Generator configuration (TOML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match generate::run(cli.paths, cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            let code = err
                .downcast_ref::<caulk_core::CaulkError>()
                .map_or(1, |e| e.exit_code());
            ExitCode::from(code)
        }
    }
}
