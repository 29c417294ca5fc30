//! Test-only helpers for building modifications and case files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::types::{Modification, OperationKind};

/// A modification with a present operation.
pub fn modification(x1: i64, x2: i64, operation: OperationKind) -> Modification {
    Modification::new(x1, x2, operation)
}

/// Wrap every modification as a non-null list element.
pub fn modifications(list: &[Modification]) -> Vec<Option<Modification>> {
    list.iter().copied().map(Some).collect()
}

/// Wrap every height as a non-null list element.
pub fn heights(list: &[i64]) -> Vec<Option<i64>> {
    list.iter().copied().map(Some).collect()
}

/// Temporary directory holding case and config files.
pub struct TestDir {
    temp: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `name` under the root, creating parent directories.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Write a well-formed case file.
    pub fn write_case(
        &self,
        name: &str,
        point_count: i64,
        modifications: &[Modification],
        expected_heights: &[i64],
    ) -> Result<PathBuf> {
        let value = serde_json::json!({
            "point_count": point_count,
            "modifications": modifications,
            "expected_heights": expected_heights,
        });
        let mut payload = serde_json::to_string_pretty(&value).context("serialize case")?;
        payload.push('\n');
        self.write(name, &payload)
    }
}
