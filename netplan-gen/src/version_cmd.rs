use anyhow::Result;
use serde::Serialize;

use crate::cli::{OutputFormat, VersionArgs};

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    license: &'static str,
    description: &'static str,
}

const INFO: VersionInfo = VersionInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    license: env!("CARGO_PKG_LICENSE"),
    description: env!("CARGO_PKG_DESCRIPTION"),
};

pub fn run_version(args: VersionArgs) -> Result<()> {
    match args.format {
        OutputFormat::Text => {
            println!("{} {}", INFO.name, INFO.version);
            println!("{}", INFO.description);
            println!("license: {}", INFO.license);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&INFO)?),
    }
    Ok(())
}
