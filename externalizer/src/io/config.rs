//! Tool configuration stored in `externalizer.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "externalizer.toml";

/// Externalizer configuration (TOML).
///
/// Missing fields default to the values used when no file exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExternalizerConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Run the compatibility check on every converted suite and fail on
    /// violations.
    pub check_after_convert: bool,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// End written suites with a newline.
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}

impl Default for ExternalizerConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            check_after_convert: true,
            output: OutputConfig::default(),
        }
    }
}

impl ExternalizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ExternalizerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ExternalizerConfig> {
    if !path.exists() {
        let cfg = ExternalizerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ExternalizerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
