use colored::Colorize;
use netplan_core::{format_summary, Dhcp, InterfaceSettings, NetplanConfig};

/// Render the one-line section counts for terminal output.
pub fn render_summary(config: &NetplanConfig) -> String {
    format_summary(config).cyan().to_string()
}

/// Render every declared interface, grouped by section.
pub fn render_interfaces(config: &NetplanConfig) -> String {
    let mut out = Vec::new();

    if !config.ethernets.is_empty() {
        out.push("ethernets".bold().to_string());
        for (name, ethernet) in config.ethernets.iter() {
            let mut line = format!("- {name} {}", describe(&ethernet.settings));
            if !ethernet.dhcp4_overrides.is_empty() {
                line.push_str(&format!(" dhcp4_overrides={}", ethernet.dhcp4_overrides.len()));
            }
            if !ethernet.dhcp6_overrides.is_empty() {
                line.push_str(&format!(" dhcp6_overrides={}", ethernet.dhcp6_overrides.len()));
            }
            let owners = member_owners(config, name);
            if !owners.is_empty() {
                line.push_str(&format!(" {}", format!("member_of={}", owners.join(",")).dimmed()));
            }
            out.push(line);
        }
    }

    if !config.bonds.is_empty() {
        out.push("bonds".bold().to_string());
        for (name, bond) in config.bonds.iter() {
            out.push(format!(
                "- {name} interfaces={} mode={} {}",
                bond.interfaces.join(","),
                display_or_dash(&bond.parameters.mode),
                describe(&bond.settings)
            ));
        }
    }

    if !config.bridges.is_empty() {
        out.push("bridges".bold().to_string());
        for (name, bridge) in config.bridges.iter() {
            out.push(format!(
                "- {name} interfaces={} {}",
                bridge.interfaces.join(","),
                describe(&bridge.settings)
            ));
        }
    }

    out.join("\n")
}

/// Bonds and bridges that list `name` as a member, in declaration order.
pub fn member_owners<'a>(config: &'a NetplanConfig, name: &str) -> Vec<&'a str> {
    let bonds = config
        .bonds
        .iter()
        .filter(|(_, bond)| bond.interfaces.iter().any(|member| member == name))
        .map(|(owner, _)| owner);
    let bridges = config
        .bridges
        .iter()
        .filter(|(_, bridge)| bridge.interfaces.iter().any(|member| member == name))
        .map(|(owner, _)| owner);
    bonds.chain(bridges).collect()
}

fn describe(settings: &InterfaceSettings) -> String {
    let mut parts = vec![format!("dhcp4={}", render_dhcp(settings.dhcp4))];
    if settings.dhcp6 != Dhcp::Unset {
        parts.push(format!("dhcp6={}", render_dhcp(settings.dhcp6)));
    }
    if !settings.addresses.is_empty() {
        parts.push(format!("addresses={}", settings.addresses.join(",")));
    }
    if let Some(gateway) = &settings.gateway4 {
        parts.push(format!("gateway4={gateway}"));
    }
    if let Some(gateway) = &settings.gateway6 {
        parts.push(format!("gateway6={gateway}"));
    }
    if !settings.nameservers.is_empty() {
        parts.push(format!("nameservers={}", settings.nameservers.join(",")));
    }
    parts.join(" ")
}

fn render_dhcp(flag: Dhcp) -> String {
    match flag {
        Dhcp::Enabled => "on".green().to_string(),
        Dhcp::Disabled => "off".yellow().to_string(),
        Dhcp::Unset => "unset".dimmed().to_string(),
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
