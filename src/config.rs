use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::formatter::DEFAULT_PRECISION;

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.quadsolve\config.toml on Windows; ~/.quadsolve/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".quadsolve").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub selftest: SelfTestConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Decimal places for printed roots.
    pub precision: usize,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION, color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelfTestConfig {
    pub cases: usize,
    /// Coefficients are drawn from `[low, high)`.
    pub low: f64,
    pub high: f64,
    pub seed: Option<u64>,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self { cases: 20, low: 0.0, high: 1.0, seed: None }
    }
}

impl SelfTestConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            bail!("selftest range must be finite, got [{}, {})", self.low, self.high);
        }
        if self.low >= self.high {
            bail!("selftest range is empty: low {} >= high {}", self.low, self.high);
        }
        if !(self.high - self.low).is_finite() {
            bail!(
                "selftest range is too wide: high - low overflows for [{}, {})",
                self.low,
                self.high
            );
        }
        Ok(())
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(text).context("Parse config TOML")?;
        cfg.selftest.validate()?;
        Ok(cfg)
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Load config {}", path.display()))
    }

    /// Loads from the resolved path, or defaults when no home directory exists.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                warn!("no config path could be resolved; using defaults");
                Ok(Self::default())
            }
        }
    }
}
