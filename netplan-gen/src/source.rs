use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use netplan_core::{InterfaceDefinition, InterfaceKind};
use netplan_gen::defaults::{default_generator_defaults, load_defaults, GeneratorDefaults};
use netplan_gen::request::GenerateRequest;
use tracing::{debug, info};

use crate::cli::SourceArgs;

/// Build the normalized request from `--input` or the single-interface flags,
/// then fill blanks from the defaults file.
pub fn load_request(args: &SourceArgs) -> Result<GenerateRequest> {
    let mut request = match &args.input {
        Some(path) => read_payload(path)?,
        None => request_from_flags(args)?,
    };
    if let Some(renderer) = &args.renderer {
        request.renderer = renderer.clone();
    }

    let defaults = resolve_defaults(args.defaults_file.as_deref());
    let request = request.with_defaults(&defaults);
    info!(
        interfaces = request.interfaces.len(),
        renderer = %request.renderer,
        "loaded request"
    );
    Ok(request)
}

fn read_payload(path: &Path) -> Result<GenerateRequest> {
    let raw = if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("failed to read request from stdin")?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read request {}", path.display()))?
    };
    debug!(bytes = raw.len(), "read request payload");
    Ok(GenerateRequest::from_json(&raw)?)
}

/// One definition per interface flag, in ethernet, bond, bridge order, all
/// sharing the IP settings flags.
fn request_from_flags(args: &SourceArgs) -> Result<GenerateRequest> {
    let mut interfaces = Vec::new();

    if let Some(name) = &args.ethernet {
        interfaces.push(InterfaceDefinition {
            dhcp4_overrides: flag(&args.dhcp4_overrides),
            dhcp6_overrides: flag(&args.dhcp6_overrides),
            ..shared_definition(args, InterfaceKind::Ethernet, name)
        });
    }
    if let Some(name) = &args.bond {
        if args.bond_interfaces.is_none() {
            bail!("--bond-interfaces is required when using --bond");
        }
        interfaces.push(InterfaceDefinition {
            bond_interfaces: flag(&args.bond_interfaces),
            bond_mode: flag(&args.bond_mode),
            ..shared_definition(args, InterfaceKind::Bond, name)
        });
    }
    if let Some(name) = &args.bridge {
        if args.bridge_interfaces.is_none() {
            bail!("--bridge-interfaces is required when using --bridge");
        }
        interfaces.push(InterfaceDefinition {
            bridge_interfaces: flag(&args.bridge_interfaces),
            ..shared_definition(args, InterfaceKind::Bridge, name)
        });
    }

    if interfaces.is_empty() {
        bail!("at least one interface must be specified (--ethernet, --bond, --bridge) or use --input");
    }

    Ok(GenerateRequest {
        interfaces,
        renderer: String::new(),
    })
}

fn shared_definition(args: &SourceArgs, kind: InterfaceKind, name: &str) -> InterfaceDefinition {
    InterfaceDefinition {
        use_static: args.use_static,
        addresses: flag(&args.addresses),
        gateway4: flag(&args.gateway4),
        gateway6: flag(&args.gateway6),
        nameservers: flag(&args.nameservers),
        ..InterfaceDefinition::new(kind.as_str(), name)
    }
}

fn flag(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn resolve_defaults(path: Option<&Path>) -> GeneratorDefaults {
    let Some(path) = path else {
        return default_generator_defaults();
    };

    match load_defaults(path) {
        Ok(defaults) => defaults,
        Err(err) => {
            eprintln!("warning: {err}; using embedded defaults");
            default_generator_defaults()
        }
    }
}
