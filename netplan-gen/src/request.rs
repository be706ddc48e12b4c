//! Request payload normalization.
//!
//! Two payload shapes are accepted and both become a [`GenerateRequest`]:
//!
//! - structured: `{"interfaces": [...], "renderer": "..."}` with one
//!   [`InterfaceDefinition`] per entry
//! - legacy: one interface flattened to the top level using the old form
//!   field names (`interface_type`, `interface_name`, `use_static`, ...)
//!
//! A payload is legacy when it carries `interface_type` or `interface_name`
//! at the top level. Anything else is structured, and a missing or `null`
//! `interfaces` list reads as empty so the compiler reports it.

use netplan_core::{InterfaceDefinition, InterfaceKind};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::defaults::GeneratorDefaults;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid JSON data: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// A normalized generate request: the compiler's input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interfaces: Vec<InterfaceDefinition>,
    #[serde(default)]
    pub renderer: String,
}

impl GenerateRequest {
    /// Parse either payload shape from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_str(raw)?;
        if is_legacy(&value) {
            let legacy: LegacyForm = serde_json::from_value(value)?;
            return Ok(legacy.into_request());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Fill a blank renderer and blank bond modes from `defaults`.
    pub fn with_defaults(mut self, defaults: &GeneratorDefaults) -> Self {
        if self.renderer.trim().is_empty() {
            self.renderer = defaults.renderer.clone();
        }
        for def in &mut self.interfaces {
            if def.kind == InterfaceKind::Bond.as_str() && def.bond_mode.trim().is_empty() {
                def.bond_mode = defaults.bond_mode.clone();
            }
        }
        self
    }
}

/// The single-interface form payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyForm {
    interface_type: String,
    interface_name: String,
    #[serde(deserialize_with = "checkbox")]
    use_static: bool,
    addresses: String,
    gateway4: String,
    gateway6: String,
    nameservers: String,
    dhcp4_overrides: String,
    dhcp6_overrides: String,
    bond_interfaces: String,
    bond_mode: String,
    bridge_interfaces: String,
    renderer: String,
}

impl LegacyForm {
    fn into_request(self) -> GenerateRequest {
        GenerateRequest {
            interfaces: vec![InterfaceDefinition {
                kind: self.interface_type,
                name: self.interface_name,
                use_static: self.use_static,
                addresses: self.addresses,
                gateway4: self.gateway4,
                gateway6: self.gateway6,
                nameservers: self.nameservers,
                dhcp4_overrides: self.dhcp4_overrides,
                dhcp6_overrides: self.dhcp6_overrides,
                bond_interfaces: self.bond_interfaces,
                bond_mode: self.bond_mode,
                bridge_interfaces: self.bridge_interfaces,
            }],
            renderer: self.renderer,
        }
    }
}

fn is_legacy(value: &Value) -> bool {
    ["interface_type", "interface_name"]
        .iter()
        .any(|key| value.get(key).is_some())
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<InterfaceDefinition>, D::Error> {
    Ok(Option::<Vec<InterfaceDefinition>>::deserialize(deserializer)?.unwrap_or_default())
}

/// HTML checkboxes submit `"on"`; JSON clients send a bool.
fn checkbox<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Checkbox {
        Flag(bool),
        Text(String),
    }

    Ok(match Checkbox::deserialize(deserializer)? {
        Checkbox::Flag(flag) => flag,
        Checkbox::Text(text) => matches!(text.as_str(), "on" | "true"),
    })
}
