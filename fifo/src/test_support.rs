//! Test-only helpers for driving REPL sessions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::{DEFAULT_CONFIG_FILE, ReplConfig};
use crate::session::{Session, SessionSummary};

/// Config with no prompt and no banner, so transcripts contain replies only.
pub fn quiet_config() -> ReplConfig {
    ReplConfig {
        prompt: String::new(),
        banner: false,
        ..ReplConfig::default()
    }
}

/// Run a session over `script` and return its summary and full output.
pub fn run_script(script: &str, config: ReplConfig) -> Result<(SessionSummary, String)> {
    let mut output = Vec::new();
    let summary = Session::new(script.as_bytes(), &mut output, config).run()?;
    let transcript = String::from_utf8(output).context("session output is not utf-8")?;
    Ok((summary, transcript))
}

/// Temporary working directory for CLI tests.
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join(DEFAULT_CONFIG_FILE)
    }

    /// Write raw TOML to the default config location.
    pub fn write_config_toml(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
