//! CLI configuration stored in `geology.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "geology.toml";

/// CLI configuration (TOML).
///
/// Missing fields default to the values in [`GeologyConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeologyConfig {
    /// Reject cases whose expected heights list is longer than this.
    pub max_points: usize,

    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the simulated landscape next to each verdict.
    pub show_landscape: bool,
    /// Print input corrections (negative values, reconciled point counts).
    pub show_diagnostics: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_landscape: false,
            show_diagnostics: true,
        }
    }
}

impl Default for GeologyConfig {
    fn default() -> Self {
        Self {
            max_points: 1_000_000,
            report: ReportConfig::default(),
        }
    }
}

impl GeologyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_points == 0 {
            return Err(anyhow!("max_points must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GeologyConfig::default()`.
pub fn load_config(path: &Path) -> Result<GeologyConfig> {
    if !path.exists() {
        let cfg = GeologyConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GeologyConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &GeologyConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
