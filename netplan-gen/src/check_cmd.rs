use anyhow::{Context, Result};
use netplan_core::{compile, format_json};
use netplan_gen::report::{render_interfaces, render_summary};

use crate::cli::{CheckArgs, OutputFormat};
use crate::source::load_request;

pub fn run_check(args: CheckArgs) -> Result<()> {
    let request = load_request(&args.source)?;
    let config = compile(&request.interfaces, &request.renderer)
        .context("interface definitions do not compile")?;

    match args.format {
        OutputFormat::Json => println!("{}", format_json(&config)?),
        OutputFormat::Text if args.quiet => println!("{}", render_summary(&config)),
        OutputFormat::Text => {
            println!("{}", render_interfaces(&config));
            println!();
            println!("{}", render_summary(&config));
        }
    }
    Ok(())
}
