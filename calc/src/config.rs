//! Calculator configuration stored in `calc.toml`.
//!
//! Overrides scoring weights and loan policy thresholds. Every section is
//! optional; missing fields keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::loan::LoanPolicy;
use crate::scoring::Weights;

pub const DEFAULT_CONFIG_FILE: &str = "calc.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalcConfig {
    pub scoring: Weights,
    pub loan: LoanPolicy,
}

impl CalcConfig {
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate().context("invalid [scoring]")?;
        self.loan.validate().context("invalid [loan]")?;
        Ok(())
    }
}

/// Load config from a TOML file, or defaults if it does not exist.
pub fn load_config(path: &Path) -> Result<CalcConfig> {
    if !path.exists() {
        return Ok(CalcConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CalcConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, CalcConfig::default());
    }

    #[test]
    fn applies_section_overrides() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("calc.toml");
        fs::write(
            &path,
            "[scoring]\nexperience = 20\nportfolio = 15\n\n[loan]\nminimum_credit_score = 700\n",
        )
        .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.scoring.experience, 20);
        assert_eq!(cfg.scoring.portfolio, 15);
        assert_eq!(cfg.scoring.education, Weights::default().education);
        assert_eq!(cfg.loan.minimum_credit_score, 700.0);
        assert_eq!(cfg.loan.minimum_age_years, 18.0);
    }

    #[test]
    fn rejects_weights_not_summing_to_100() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("calc.toml");
        fs::write(&path, "[scoring]\neducation = 50\n").expect("write");
        let err = load_config(&path).expect_err("should reject");
        let message = format!("{err:#}");
        assert!(message.contains("invalid [scoring]"), "{message}");
        assert!(message.contains("must sum to 100"), "{message}");
    }
}
