//! Interface definitions to [`NetplanConfig`].
//!
//! Definitions are processed once each, in request order. Explicit
//! definitions create or overwrite their entry; member links pulled in by a
//! bond or bridge are declared as ethernets with DHCPv4 off, but only when
//! nothing has claimed that name yet.
//!
//! ## Member placement
//!
//! - Members that are already declared bonds get nothing, whether the owner
//!   is a bridge or another bond.
//! - Other members get an ethernet placeholder unless an ethernet entry
//!   exists.
//!
//! A bond declared *after* the bond or bridge that uses it is not known yet
//! when the owner is processed, so that member is treated as a plain link.

use thiserror::Error;
use tracing::debug;

use crate::definition::{InterfaceDefinition, InterfaceKind};
use crate::model::{
    BondConfig, BondParameters, BridgeConfig, Dhcp, EthernetConfig, InterfaceSettings,
    NetplanConfig,
};
use crate::parse::{non_empty, parse_comma_separated, parse_key_value_pairs};

/// Netplan schema version written into every document.
pub const NETPLAN_VERSION: u32 = 2;

/// Input problems that stop a compile. No partial configuration is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("at least one interface is required")]
    EmptyInput,
    #[error("interface name is required")]
    MissingName,
    #[error("invalid interface type: {0}")]
    UnknownType(String),
    #[error("{kind} interfaces are required for {kind} {name}")]
    MissingMembers { kind: InterfaceKind, name: String },
}

/// Compile `interfaces` into a netplan document for `renderer`.
///
/// # Errors
///
/// Fails on the first definition that has no name, an unknown type, or (for
/// bonds and bridges) no members, and when `interfaces` is empty.
pub fn compile(
    interfaces: &[InterfaceDefinition],
    renderer: &str,
) -> Result<NetplanConfig, CompileError> {
    if interfaces.is_empty() {
        return Err(CompileError::EmptyInput);
    }

    let mut config = NetplanConfig::new(NETPLAN_VERSION, renderer);
    for def in interfaces {
        if def.name.is_empty() {
            return Err(CompileError::MissingName);
        }
        let kind = def
            .kind
            .parse::<InterfaceKind>()
            .map_err(|unknown| CompileError::UnknownType(unknown.0))?;

        match kind {
            InterfaceKind::Ethernet => add_ethernet(&mut config, def),
            InterfaceKind::Bond => add_bond(&mut config, def)?,
            InterfaceKind::Bridge => add_bridge(&mut config, def)?,
        }
    }

    Ok(config)
}

fn add_ethernet(config: &mut NetplanConfig, def: &InterfaceDefinition) {
    let ethernet = EthernetConfig {
        settings: shared_settings(def),
        dhcp4_overrides: parse_key_value_pairs(&def.dhcp4_overrides),
        dhcp6_overrides: parse_key_value_pairs(&def.dhcp6_overrides),
    };
    debug!(name = %def.name, "declared ethernet");
    config.ethernets.insert(def.name.as_str(), ethernet);
}

fn add_bond(config: &mut NetplanConfig, def: &InterfaceDefinition) -> Result<(), CompileError> {
    let members = members_of(InterfaceKind::Bond, &def.name, &def.bond_interfaces)?;

    for member in &members {
        declare_member_link(config, member, &def.name);
    }

    debug!(name = %def.name, members = ?members, mode = %def.bond_mode, "declared bond");
    config.bonds.insert(
        def.name.as_str(),
        BondConfig {
            interfaces: members,
            parameters: BondParameters {
                mode: def.bond_mode.clone(),
            },
            settings: shared_settings(def),
        },
    );
    Ok(())
}

fn add_bridge(config: &mut NetplanConfig, def: &InterfaceDefinition) -> Result<(), CompileError> {
    let members = members_of(InterfaceKind::Bridge, &def.name, &def.bridge_interfaces)?;

    for member in &members {
        declare_member_link(config, member, &def.name);
    }

    debug!(name = %def.name, members = ?members, "declared bridge");
    config.bridges.insert(
        def.name.as_str(),
        BridgeConfig {
            interfaces: members,
            settings: shared_settings(def),
        },
    );
    Ok(())
}

fn members_of(kind: InterfaceKind, name: &str, raw: &str) -> Result<Vec<String>, CompileError> {
    let members = parse_comma_separated(raw);
    if members.is_empty() {
        return Err(CompileError::MissingMembers {
            kind,
            name: name.to_string(),
        });
    }
    Ok(members)
}

fn declare_member_link(config: &mut NetplanConfig, member: &str, owner: &str) {
    // A bond is its own logical device; it must not also appear as a link.
    if config.bonds.contains(member) {
        return;
    }
    if config
        .ethernets
        .insert_if_absent(member, EthernetConfig::member_placeholder)
    {
        debug!(name = %member, owner = %owner, "auto-declared member link with dhcp4 off");
    }
}

fn shared_settings(def: &InterfaceDefinition) -> InterfaceSettings {
    InterfaceSettings {
        dhcp4: Dhcp::from_static(def.use_static),
        dhcp6: Dhcp::Unset,
        addresses: parse_comma_separated(&def.addresses),
        gateway4: non_empty(&def.gateway4),
        gateway6: non_empty(&def.gateway6),
        nameservers: parse_comma_separated(&def.nameservers),
    }
}
