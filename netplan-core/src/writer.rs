use std::borrow::Cow;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::{Dhcp, InterfaceSettings, NetplanConfig, OverrideValue, Overrides};

/// Errors that can occur while writing a rendered document to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write netplan file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a [`NetplanConfig`] as netplan YAML.
///
/// Indentation is two spaces per level and entries come out in declaration
/// order, so identical input always produces identical text. String values
/// that YAML would read as something else are double-quoted.
pub fn serialize(config: &NetplanConfig) -> String {
    let mut out = Lines::default();

    out.push(0, "network:");
    out.push(1, format!("version: {}", config.version));
    out.push(1, format!("renderer: {}", scalar(&config.renderer)));

    if !config.ethernets.is_empty() {
        out.push(1, "ethernets:");
        for (name, ethernet) in config.ethernets.iter() {
            if ethernet.settings.is_empty()
                && ethernet.dhcp4_overrides.is_empty()
                && ethernet.dhcp6_overrides.is_empty()
            {
                out.push(2, format!("{}: {{}}", scalar(name)));
                continue;
            }
            out.push(2, format!("{}:", scalar(name)));
            write_settings(&mut out, &ethernet.settings);
            write_overrides(&mut out, "dhcp4-overrides", &ethernet.dhcp4_overrides);
            write_overrides(&mut out, "dhcp6-overrides", &ethernet.dhcp6_overrides);
        }
    }

    if !config.bonds.is_empty() {
        out.push(1, "bonds:");
        for (name, bond) in config.bonds.iter() {
            out.push(2, format!("{}:", scalar(name)));
            write_list(&mut out, 3, "interfaces", &bond.interfaces);
            out.push(3, "parameters:");
            out.push(4, format!("mode: {}", scalar(&bond.parameters.mode)));
            write_settings(&mut out, &bond.settings);
        }
    }

    if !config.bridges.is_empty() {
        out.push(1, "bridges:");
        for (name, bridge) in config.bridges.iter() {
            out.push(2, format!("{}:", scalar(name)));
            write_list(&mut out, 3, "interfaces", &bridge.interfaces);
            write_settings(&mut out, &bridge.settings);
        }
    }

    out.finish()
}

/// Render `config` and write it to `path`.
pub fn write_file(config: &NetplanConfig, path: &Path) -> Result<(), WriteError> {
    fs::write(path, serialize(config))?;
    Ok(())
}

fn write_settings(out: &mut Lines, settings: &InterfaceSettings) {
    write_flag(out, "dhcp4", settings.dhcp4);
    write_flag(out, "dhcp6", settings.dhcp6);
    write_list(out, 3, "addresses", &settings.addresses);
    if let Some(gateway) = &settings.gateway4 {
        out.push(3, format!("gateway4: {}", scalar(gateway)));
    }
    if let Some(gateway) = &settings.gateway6 {
        out.push(3, format!("gateway6: {}", scalar(gateway)));
    }
    if !settings.nameservers.is_empty() {
        out.push(3, "nameservers:");
        write_list(out, 4, "addresses", &settings.nameservers);
    }
}

fn write_flag(out: &mut Lines, key: &str, flag: Dhcp) {
    if let Some(value) = flag.as_bool() {
        out.push(3, format!("{key}: {value}"));
    }
}

fn write_list(out: &mut Lines, depth: usize, key: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push(depth, format!("{key}:"));
    for item in items {
        out.push(depth + 1, format!("- {}", scalar(item)));
    }
}

fn write_overrides(out: &mut Lines, key: &str, overrides: &Overrides) {
    if overrides.is_empty() {
        return;
    }
    out.push(3, format!("{key}:"));
    for (option, value) in overrides.iter() {
        let value = match value {
            OverrideValue::Str(text) => scalar(text),
            typed => Cow::Owned(typed.to_string()),
        };
        out.push(4, format!("{}: {value}", scalar(option)));
    }
}

/// A string as a YAML scalar: plain when YAML reads it back as the same
/// string, double-quoted otherwise.
fn scalar(text: &str) -> Cow<'_, str> {
    if needs_quotes(text) {
        Cow::Owned(quote(text))
    } else {
        Cow::Borrowed(text)
    }
}

fn needs_quotes(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return true;
    };
    if text.trim() != text || text.chars().any(char::is_control) {
        return true;
    }
    if matches!(
        first,
        '#' | '[' | ']' | '{' | '}' | ',' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@'
            | '`'
    ) {
        return true;
    }
    if matches!(first, '-' | '?' | ':') && (text.len() == 1 || text[1..].starts_with(' ')) {
        return true;
    }
    if text.contains(": ") || text.contains(" #") || text.ends_with(':') {
        return true;
    }
    reads_as_non_string(text)
}

/// Booleans, nulls, and numbers in either YAML 1.1 or 1.2 spelling.
fn reads_as_non_string(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "~" | "null" | "true" | "false" | "yes" | "no" | "on" | "off" | "y" | "n"
    ) {
        return true;
    }
    let unsigned = lower.trim_start_matches(['+', '-']);
    if matches!(unsigned, ".inf" | ".nan")
        || unsigned.starts_with("0x")
        || unsigned.starts_with("0o")
    {
        return true;
    }
    lower.parse::<f64>().is_ok() || lower.replace('_', "").parse::<f64>().is_ok()
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            other if other.is_control() => quoted.push_str(&format!("\\u{:04x}", other as u32)),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, depth: usize, text: impl AsRef<str>) {
        self.0.push(format!("{}{}", "  ".repeat(depth), text.as_ref()));
    }

    fn finish(self) -> String {
        let mut text = self.0.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EthernetConfig;

    #[test]
    fn empty_config_renders_header_only() {
        let config = NetplanConfig::new(2, "networkd");
        assert_eq!(
            serialize(&config),
            "network:\n  version: 2\n  renderer: networkd\n"
        );
    }

    #[test]
    fn disabled_dhcp_is_written_literally() {
        let mut config = NetplanConfig::new(2, "networkd");
        config
            .ethernets
            .insert("eth0", EthernetConfig::member_placeholder());

        let text = serialize(&config);
        assert!(text.contains("    eth0:\n      dhcp4: false\n"));
    }

    #[test]
    fn entry_without_settings_renders_as_empty_mapping() {
        let mut config = NetplanConfig::new(2, "networkd");
        config.ethernets.insert("eth9", EthernetConfig::default());

        assert!(serialize(&config).ends_with("  ethernets:\n    eth9: {}\n"));
    }

    #[test]
    fn overrides_render_typed_values() {
        let mut ethernet = EthernetConfig::member_placeholder();
        ethernet
            .dhcp4_overrides
            .set("use-dns", OverrideValue::Bool(false));
        ethernet
            .dhcp4_overrides
            .set("route-metric", OverrideValue::Int(200));
        ethernet
            .dhcp6_overrides
            .set("hostname", OverrideValue::Str("edge".to_string()));
        let mut config = NetplanConfig::new(2, "networkd");
        config.ethernets.insert("eth0", ethernet);

        let text = serialize(&config);
        assert!(text.contains(
            "      dhcp4-overrides:\n        use-dns: false\n        route-metric: 200\n"
        ));
        assert!(text.contains("      dhcp6-overrides:\n        hostname: edge\n"));
    }

    #[test]
    fn ambiguous_strings_are_quoted() {
        let mut ethernet = EthernetConfig::member_placeholder();
        for (key, raw) in [
            ("hostname", ""),
            ("mode", "1.5"),
            ("tag", "#edge"),
            ("label", "yes"),
            ("note", "a: b"),
            ("vendor", "say \"hi\""),
        ] {
            ethernet
                .dhcp4_overrides
                .set(key, OverrideValue::Str(raw.to_string()));
        }
        ethernet
            .dhcp4_overrides
            .set("use-dns", OverrideValue::Bool(false));
        let mut config = NetplanConfig::new(2, "");
        config.ethernets.insert("eth0", ethernet);

        let text = serialize(&config);
        assert!(text.contains("  renderer: \"\"\n"));
        assert!(text.contains(
            "        hostname: \"\"\n        mode: \"1.5\"\n        tag: \"#edge\"\n"
        ));
        assert!(text.contains("        label: \"yes\"\n        note: \"a: b\"\n"));
        assert!(text.contains("        vendor: \"say \\\"hi\\\"\"\n"));
        assert!(text.contains("        use-dns: false\n"));
    }

    #[test]
    fn plain_network_values_stay_unquoted() {
        for plain in ["eth0", "192.168.1.1", "2001:db8::1", "10.0.0.5/24", "802.3ad", "balance-rr"] {
            assert_eq!(scalar(plain), plain);
        }
    }

    #[test]
    fn write_file_puts_rendered_text_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("01-netcfg.yaml");
        let config = NetplanConfig::new(2, "NetworkManager");

        write_file(&config, &path).expect("write_file should succeed");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, serialize(&config));
    }
}
