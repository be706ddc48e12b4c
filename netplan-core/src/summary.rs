use crate::model::NetplanConfig;

/// One-line count of what a compiled document declares.
pub fn format_summary(config: &NetplanConfig) -> String {
    format!(
        "version={} renderer={} ethernets={} bonds={} bridges={}",
        config.version,
        config.renderer,
        config.ethernets.len(),
        config.bonds.len(),
        config.bridges.len()
    )
}

/// Format the compiled model as JSON.
pub fn format_json(config: &NetplanConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(config)
}
