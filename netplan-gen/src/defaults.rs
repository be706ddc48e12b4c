use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Values filled into a request when the caller leaves them blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorDefaults {
    pub renderer: String,
    pub bond_mode: String,
}

/// Errors returned when loading a defaults file.
#[derive(Debug, Error)]
pub enum DefaultsLoadError {
    #[error("failed to read defaults file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse defaults file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load generator defaults from a TOML file.
pub fn load_defaults(path: &Path) -> Result<GeneratorDefaults, DefaultsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DefaultsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_defaults(&raw, path.display().to_string())
}

/// Built-in defaults shipped with the binary.
pub fn default_generator_defaults() -> GeneratorDefaults {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/defaults/generator.toml"
    ));
    parse_defaults(embedded, "embedded defaults".to_string())
        .unwrap_or_else(|_| fallback_defaults())
}

fn parse_defaults(raw: &str, path: String) -> Result<GeneratorDefaults, DefaultsLoadError> {
    toml::from_str(raw).map_err(|source| DefaultsLoadError::Parse { path, source })
}

fn fallback_defaults() -> GeneratorDefaults {
    GeneratorDefaults {
        renderer: "networkd".to_string(),
        bond_mode: "active-backup".to_string(),
    }
}
