//! Configuration file support for upgrade-graph.
//!
//! Provides YAML-based configuration through `upgrade-graph.config.yml`
//! files: schema, loading and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use upgrade_graph::shared::Result;

pub const CONFIG_FILENAME: &str = "upgrade-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub graph_url: Option<String>,
    pub arch: Option<String>,
    pub channels: Option<Vec<String>>,
    pub extra_channels: Option<Vec<String>>,
    pub accepted_risks: Option<Vec<String>>,
    pub format: Option<String>,
    pub per_channel: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let lists = [
        ("channels", &config.channels),
        ("extra_channels", &config.extra_channels),
        ("accepted_risks", &config.accepted_risks),
    ];
    for (field, values) in lists {
        for (i, value) in values.iter().flatten().enumerate() {
            if value.trim().is_empty() {
                bail!(
                    "Invalid config: {}[{}] must not be empty.\n\n\
                     💡 Hint: Remove the empty entry or give it a name (e.g., \"stable-4.16\").",
                    field,
                    i
                );
            }
        }
    }

    if let Some(ref url) = config.graph_url {
        if url.trim().is_empty() {
            bail!(
                "Invalid config: graph_url must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default endpoint."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
