//! iotagen CLI - iota enumeration code generator for Go packages.
//!
//! Scans one Go package directory for `iota` constant blocks matching
//! the requested type names and writes a stringer-style companion file
//! per resolved type. Fatal errors (bad arguments, load failures) abort
//! the run; per-type findings and emission failures are reported
//! without affecting the other types.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use iotagen_core::{
    init_structured_logging, load_config, print_json, print_plain, Iotagen, RunResult,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Iota enumeration code generator for Go packages")]
pub struct Cli {
    /// Path to the Go package directory to scan
    #[arg(default_value = ".")]
    path: String,

    /// Comma-separated type names to extract, e.g. -t TypeName1,TypeName2
    #[arg(short, long)]
    types: Option<String>,

    /// Output the extraction report in JSON format
    #[arg(long)]
    json: bool,

    /// Extract and report only; write no generated files
    #[arg(long)]
    no_emit: bool,

    /// Extra directory names to skip while scanning
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,
}

/// Splits a comma-separated type list, keeping blank entries so the
/// core rejects them instead of silently repairing the input.
fn split_types(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Counts per-type emission failures; each was already logged by its
/// own task.
fn report_emission(result: &RunResult) -> usize {
    result
        .outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .count()
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] iotagen internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
        std::process::exit(2);
    }));

    // Structured JSON logging to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();

    let dir: PathBuf = fs::canonicalize(&cli.path)
        .with_context(|| format!("Failed to resolve directory: {}", cli.path))?;

    let config = load_config(&dir).context("Failed to load iotagen.toml")?;

    // Flags override file configuration
    let type_names = match (&cli.types, config.as_ref().and_then(|c| c.types.clone())) {
        (Some(raw), _) => split_types(raw),
        (None, Some(from_config)) => from_config,
        (None, None) => {
            bail!("--types must be set (or listed in iotagen.toml) with at least one type name")
        }
    };

    let mut excludes = cli.exclude.clone();
    if let Some(cfg) = &config {
        excludes.extend(cfg.exclude.clone().unwrap_or_default());
    }

    let result = Iotagen::new(&dir)
        .types(type_names)
        .exclude_dirs(excludes)
        .emit(!cli.no_emit)
        .app_version(env!("CARGO_PKG_VERSION"))
        .run()
        .context("Extraction failed")?;

    let json_output = cli.json
        || config
            .as_ref()
            .and_then(|c| c.output.as_ref())
            .and_then(|o| o.format.as_deref())
            == Some("json");

    if json_output {
        print_json(&result.package_name, &result.extraction);
    } else {
        print_plain(&result.package_name, &result.extraction);
    }

    // Emission failures are already logged per task; summarize without
    // changing the exit status, matching the per-type isolation policy.
    let failed = report_emission(&result);
    if failed > 0 {
        eprintln!(
            "{} of {} generated files could not be written",
            failed,
            result.outcomes.len()
        );
    }

    Ok(())
}
