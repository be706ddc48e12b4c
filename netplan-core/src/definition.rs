use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One requested interface, as described by the caller.
///
/// All free-text fields are kept verbatim here and parsed by the compiler, so
/// a definition deserialized from a partially filled form is always valid
/// input to [`crate::compile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterfaceDefinition {
    /// Interface type: `ethernet`, `bond`, or `bridge`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Interface name, used as the key in its output section.
    pub name: String,
    /// Disable DHCPv4 and rely on the static fields.
    pub use_static: bool,
    /// Comma-separated addresses in CIDR notation.
    pub addresses: String,
    pub gateway4: String,
    pub gateway6: String,
    /// Comma-separated nameserver addresses.
    pub nameservers: String,
    /// `key=value,...` DHCPv4 client overrides (ethernet only).
    pub dhcp4_overrides: String,
    /// `key=value,...` DHCPv6 client overrides (ethernet only).
    pub dhcp6_overrides: String,
    /// Comma-separated bond members.
    pub bond_interfaces: String,
    pub bond_mode: String,
    /// Comma-separated bridge members.
    pub bridge_interfaces: String,
}

impl InterfaceDefinition {
    /// Create a definition with only type and name set.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn ethernet(name: impl Into<String>) -> Self {
        Self::new(InterfaceKind::Ethernet.as_str(), name)
    }

    pub fn bond(
        name: impl Into<String>,
        members: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            bond_interfaces: members.into(),
            bond_mode: mode.into(),
            ..Self::new(InterfaceKind::Bond.as_str(), name)
        }
    }

    pub fn bridge(name: impl Into<String>, members: impl Into<String>) -> Self {
        Self {
            bridge_interfaces: members.into(),
            ..Self::new(InterfaceKind::Bridge.as_str(), name)
        }
    }
}

/// The three interface kinds the compiler knows how to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Ethernet,
    Bond,
    Bridge,
}

impl InterfaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InterfaceKind::Ethernet => "ethernet",
            InterfaceKind::Bond => "bond",
            InterfaceKind::Bridge => "bridge",
        }
    }
}

impl Display for InterfaceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a type string names no known interface kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl FromStr for InterfaceKind {
    type Err = UnknownKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ethernet" => Ok(InterfaceKind::Ethernet),
            "bond" => Ok(InterfaceKind::Bond),
            "bridge" => Ok(InterfaceKind::Bridge),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload_with_missing_fields() {
        let def: InterfaceDefinition = serde_json::from_str(
            r#"{"type":"bond","name":"bond0","useStatic":true,"bondInterfaces":"eth0,eth1"}"#,
        )
        .expect("definition should deserialize");

        assert_eq!(def.kind, "bond");
        assert_eq!(def.name, "bond0");
        assert!(def.use_static);
        assert_eq!(def.bond_interfaces, "eth0,eth1");
        assert!(def.bond_mode.is_empty());
        assert!(def.addresses.is_empty());
    }

    #[test]
    fn kind_parsing_is_exact() {
        assert_eq!("bridge".parse::<InterfaceKind>(), Ok(InterfaceKind::Bridge));
        assert_eq!(
            "Ethernet".parse::<InterfaceKind>(),
            Err(UnknownKind("Ethernet".to_string()))
        );
        assert!("vlan".parse::<InterfaceKind>().is_err());
    }
}
