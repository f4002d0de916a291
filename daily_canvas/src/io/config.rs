//! Updater configuration stored at `<vault>/.daily-canvas/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::canvas_store::ParsePolicy;

/// Directory under the vault root that holds updater state.
pub const CONFIG_DIR: &str = ".daily-canvas";
const CONFIG_FILE: &str = "config.toml";

/// Updater configuration (TOML).
///
/// Edited by hand or through `daily-canvas config set`. Missing keys fall
/// back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyConfig {
    /// File name of the canvas to search for in the vault.
    pub canvas_name: String,

    /// Label of the group whose region defines membership.
    pub group_name: String,

    /// Prefix prepended to the dated journal file name.
    pub journal_dir: String,

    /// Report malformed canvas files as errors instead of treating them as empty.
    pub strict_parse: bool,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            canvas_name: "Daily.canvas".to_string(),
            group_name: "Daily".to_string(),
            journal_dir: String::new(),
            strict_parse: false,
        }
    }
}

impl DailyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.canvas_name.trim().is_empty() {
            return Err(anyhow!("canvasName must be non-empty"));
        }
        if self.group_name.trim().is_empty() {
            return Err(anyhow!("groupName must be non-empty"));
        }
        Ok(())
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        if self.strict_parse {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }
}

/// Default config location for a vault.
pub fn default_config_path(vault_root: &Path) -> PathBuf {
    vault_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DailyConfig::default()`.
pub fn load_config(path: &Path) -> Result<DailyConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = DailyConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DailyConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DailyConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
