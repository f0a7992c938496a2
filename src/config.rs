//! Demo configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! same inputs the drivers use out of the box.

use crate::builder::CustomSpec;
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Environment variable naming the config file the drivers read.
pub const CONFIG_ENV_VAR: &str = "DESIGN_PATTERNS_CONFIG";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub output: OutputConfig,
    pub factory: FactoryConfig,
    pub observer: ObserverConfig,
    pub builder: BuilderConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Goods handed to each transport in turn.
    pub goods: Vec<String>,
    /// New tag -> built-in tag it should construct, registered at runtime.
    pub aliases: BTreeMap<String, String>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            goods: vec![
                "apple".to_string(),
                "grapefruit".to_string(),
                "human".to_string(),
            ],
            aliases: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    pub seed: u64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    pub custom: CustomSpec,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            custom: CustomSpec {
                cpu: Some("AMD Ryzen 9 5950X".to_string()),
                ram: Some("64GB DDR4".to_string()),
                storage: Some("2TB NVMe SSD".to_string()),
                gpu: Some("NVIDIA RTX 3090".to_string()),
                sound_card: Some("High-end Audio System".to_string()),
            },
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads the file named by [`CONFIG_ENV_VAR`], or falls back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading demo config");
                Self::from_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factory.goods.is_empty() {
            return Err(ConfigError::invalid(
                "factory.goods",
                "at least one item of goods is required",
            ));
        }

        if self.factory.goods.iter().any(|g| g.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "factory.goods",
                "goods must not be blank",
            ));
        }

        let level = self.output.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid(
                "output.log_level",
                format!(
                    "expected one of {}, got '{}'",
                    LOG_LEVELS.join(", "),
                    self.output.log_level
                ),
            ));
        }

        Ok(())
    }
}
