use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "netplan-gen")]
#[command(about = "Generate netplan YAML for ethernet, bond, and bridge interfaces")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compile interface definitions and print netplan YAML.
    Generate(GenerateArgs),
    /// Compile interface definitions and report what would be declared.
    Check(CheckArgs),
    /// Show program name, version, and license.
    Version(VersionArgs),
}

/// Where interface definitions come from: a JSON payload or flags.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON request payload (structured or legacy form). Use `-` for stdin.
    #[arg(long, conflicts_with_all = ["ethernet", "bond", "bridge"])]
    pub input: Option<PathBuf>,
    /// Ethernet interface name.
    #[arg(long)]
    pub ethernet: Option<String>,
    /// Bond interface name.
    #[arg(long)]
    pub bond: Option<String>,
    /// Bridge interface name.
    #[arg(long)]
    pub bridge: Option<String>,
    /// Use static configuration instead of DHCP.
    #[arg(long = "static")]
    pub use_static: bool,
    /// Comma-separated IP addresses in CIDR notation.
    #[arg(long)]
    pub addresses: Option<String>,
    /// IPv4 gateway.
    #[arg(long)]
    pub gateway4: Option<String>,
    /// IPv6 gateway.
    #[arg(long)]
    pub gateway6: Option<String>,
    /// Comma-separated nameservers.
    #[arg(long)]
    pub nameservers: Option<String>,
    /// DHCPv4 overrides (key=value,key=value). Ethernet only.
    #[arg(long)]
    pub dhcp4_overrides: Option<String>,
    /// DHCPv6 overrides (key=value,key=value). Ethernet only.
    #[arg(long)]
    pub dhcp6_overrides: Option<String>,
    /// Comma-separated bond members.
    #[arg(long)]
    pub bond_interfaces: Option<String>,
    /// Bonding mode (defaults to the configured bond mode).
    #[arg(long)]
    pub bond_mode: Option<String>,
    /// Comma-separated bridge members.
    #[arg(long)]
    pub bridge_interfaces: Option<String>,
    /// Renderer passed through to the document (defaults to the configured renderer).
    #[arg(long)]
    pub renderer: Option<String>,
    /// Optional defaults TOML (renderer, bond_mode). Embedded defaults otherwise.
    #[arg(long)]
    pub defaults_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Write YAML to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print only the one-line summary.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
