//! Case file parsing.
//!
//! A case is a JSON file holding one validation request. JSON is used rather
//! than TOML because null lists and null elements must be expressible; they
//! are passed through to the validator, which rejects them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::types::Modification;

/// One validation request as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    /// Free-form note shown nowhere but the file itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared point count. Advisory: the expected heights length wins.
    pub point_count: i64,
    #[serde(default)]
    pub modifications: Option<Vec<Option<Modification>>>,
    #[serde(default)]
    pub expected_heights: Option<Vec<Option<i64>>>,
}

impl CaseFile {
    /// Load a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read case {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("parse case {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("parse case json")
    }

    pub fn modifications(&self) -> Option<&[Option<Modification>]> {
        self.modifications.as_deref()
    }

    pub fn expected_heights(&self) -> Option<&[Option<i64>]> {
        self.expected_heights.as_deref()
    }

    /// Well-formed modifications only; null elements are dropped.
    pub fn present_modifications(&self) -> Vec<Modification> {
        self.modifications
            .iter()
            .flatten()
            .flatten()
            .copied()
            .collect()
    }
}

/// Discover all `*.json` case files in a directory.
///
/// Returns paths sorted by file name. A missing directory yields no cases.
pub fn discover_cases(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut cases = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read cases dir {}", dir.display()))? {
        let entry = entry.context("read case entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        cases.push(path);
    }
    cases.sort();
    Ok(cases)
}
