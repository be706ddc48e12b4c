//! Interface definitions to netplan configuration: model, compiler, and writer.

pub mod compile;
pub mod definition;
pub mod model;
pub mod parse;
pub mod summary;
pub mod writer;

pub use compile::{compile, CompileError, NETPLAN_VERSION};
pub use definition::{InterfaceDefinition, InterfaceKind};
pub use model::{
    BondConfig, BondParameters, BridgeConfig, Dhcp, EthernetConfig, InterfaceSettings,
    NetplanConfig, OverrideValue, Overrides, Section,
};
pub use parse::{parse_comma_separated, parse_key_value_pairs};
pub use summary::{format_json, format_summary};
pub use writer::{serialize, write_file, WriteError};
