//! REPL configuration stored in `fifo.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fifo.toml";

/// REPL presentation settings (TOML).
///
/// Missing fields fall back to the defaults, which reproduce the plain
/// interactive protocol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReplConfig {
    /// Prompt written before each read. Empty disables it.
    pub prompt: String,

    /// Print the command list once at session start.
    pub banner: bool,

    /// Print `Warning: ...` lines for empty-queue access.
    pub show_warnings: bool,

    /// Shown in place of a value when `dequeue`/`peek` find the queue empty.
    pub empty_indicator: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter command: ".to_string(),
            banner: true,
            show_warnings: true,
            empty_indicator: "None".to_string(),
        }
    }
}

impl ReplConfig {
    pub fn validate(&self) -> Result<()> {
        if self.empty_indicator.trim().is_empty() {
            return Err(anyhow!("empty_indicator must be non-empty"));
        }
        if self.prompt.contains('\n') {
            return Err(anyhow!("prompt must be a single line"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReplConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReplConfig> {
    if !path.exists() {
        let cfg = ReplConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReplConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ReplConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
