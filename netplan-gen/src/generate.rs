//! The `generate` command: request in, netplan YAML out.
//!
//! Text output is the YAML document itself. JSON output wraps it as
//! `{"yaml": "..."}`, or reports a failed compile as `{"error": "..."}` before
//! exiting non-zero.

use std::fs;

use anyhow::{Context, Result};
use netplan_core::{compile, serialize, write_file};
use serde_json::json;
use tracing::info;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::path_guard::ensure_output_not_same;
use crate::source::load_request;

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    if let (Some(output), Some(input)) = (&args.output, &args.source.input) {
        ensure_output_not_same(output, input)?;
    }

    let request = load_request(&args.source)?;

    let config = match compile(&request.interfaces, &request.renderer) {
        Ok(config) => config,
        Err(err) => {
            if args.format == OutputFormat::Json {
                println!("{}", json!({ "error": err.to_string() }));
            }
            return Err(err).context("failed to generate netplan configuration");
        }
    };
    info!(
        ethernets = config.ethernets.len(),
        bonds = config.bonds.len(),
        bridges = config.bridges.len(),
        "compiled configuration"
    );

    match (args.format, &args.output) {
        (OutputFormat::Text, Some(path)) => {
            write_file(&config, path)
                .with_context(|| format!("failed to write output {}", path.display()))?;
            println!("Configuration written to {}", path.display());
        }
        (OutputFormat::Text, None) => print!("{}", serialize(&config)),
        (OutputFormat::Json, output) => {
            let body = serde_json::to_string_pretty(&json!({ "yaml": serialize(&config) }))?;
            match output {
                Some(path) => {
                    fs::write(path, format!("{body}\n"))
                        .with_context(|| format!("failed to write output {}", path.display()))?;
                    println!("Configuration written to {}", path.display());
                }
                None => println!("{body}"),
            }
        }
    }
    Ok(())
}
