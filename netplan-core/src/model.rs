use std::fmt::{self, Display, Formatter};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A DHCP client flag that may be left unset, or explicitly on or off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dhcp {
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl Dhcp {
    /// DHCP is on for dynamic interfaces and explicitly off for static ones.
    pub fn from_static(use_static: bool) -> Self {
        if use_static {
            Dhcp::Disabled
        } else {
            Dhcp::Enabled
        }
    }

    /// The explicit value, or `None` when unset.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Dhcp::Unset => None,
            Dhcp::Enabled => Some(true),
            Dhcp::Disabled => Some(false),
        }
    }
}

/// A typed DHCP override value, decided once when the override text is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl OverrideValue {
    /// Literal `true`/`false` become booleans, integers become integers,
    /// anything else stays a string.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => OverrideValue::Bool(true),
            "false" => OverrideValue::Bool(false),
            _ => match raw.parse::<i64>() {
                Ok(value) => OverrideValue::Int(value),
                Err(_) => OverrideValue::Str(raw.to_string()),
            },
        }
    }
}

impl Display for OverrideValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OverrideValue::Bool(value) => write!(f, "{value}"),
            OverrideValue::Int(value) => write!(f, "{value}"),
            OverrideValue::Str(value) => f.write_str(value),
        }
    }
}

/// Ordered DHCP override entries keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: Vec<(String, OverrideValue)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place.
    pub fn set(&mut self, key: impl Into<String>, value: OverrideValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OverrideValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OverrideValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Overrides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A name-keyed section that remembers first-insertion order.
///
/// Overwriting an existing name keeps its original position, so output order
/// is always first-declared-first-emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Section<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Create or overwrite the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert only when `name` is not present yet. Returns whether it inserted.
    pub fn insert_if_absent(&mut self, name: &str, make: impl FnOnce() -> T) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push((name.to_string(), make()));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for Section<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// IP settings shared by ethernets, bonds, and bridges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceSettings {
    pub dhcp4: Dhcp,
    pub dhcp6: Dhcp,
    pub addresses: Vec<String>,
    pub gateway4: Option<String>,
    pub gateway6: Option<String>,
    pub nameservers: Vec<String>,
}

impl InterfaceSettings {
    /// True when nothing at all would be rendered for these settings.
    pub fn is_empty(&self) -> bool {
        self.dhcp4 == Dhcp::Unset
            && self.dhcp6 == Dhcp::Unset
            && self.addresses.is_empty()
            && self.gateway4.is_none()
            && self.gateway6.is_none()
            && self.nameservers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EthernetConfig {
    #[serde(flatten)]
    pub settings: InterfaceSettings,
    pub dhcp4_overrides: Overrides,
    pub dhcp6_overrides: Overrides,
}

impl EthernetConfig {
    /// The bare declaration given to a link consumed by a bond or bridge:
    /// DHCPv4 explicitly off and nothing else.
    pub fn member_placeholder() -> Self {
        Self {
            settings: InterfaceSettings {
                dhcp4: Dhcp::Disabled,
                ..InterfaceSettings::default()
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BondParameters {
    /// Bonding mode, passed through without validation.
    pub mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BondConfig {
    pub interfaces: Vec<String>,
    pub parameters: BondParameters,
    #[serde(flatten)]
    pub settings: InterfaceSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BridgeConfig {
    pub interfaces: Vec<String>,
    #[serde(flatten)]
    pub settings: InterfaceSettings,
}

/// A compiled netplan `network:` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetplanConfig {
    pub version: u32,
    pub renderer: String,
    pub ethernets: Section<EthernetConfig>,
    pub bonds: Section<BondConfig>,
    pub bridges: Section<BridgeConfig>,
}

impl NetplanConfig {
    pub fn new(version: u32, renderer: impl Into<String>) -> Self {
        Self {
            version,
            renderer: renderer.into(),
            ethernets: Section::new(),
            bonds: Section::new(),
            bridges: Section::new(),
        }
    }

    /// Total number of entries across all three sections.
    pub fn interface_count(&self) -> usize {
        self.ethernets.len() + self.bonds.len() + self.bridges.len()
    }
}
