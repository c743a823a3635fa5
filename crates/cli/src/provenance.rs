//! Provenance sidecars for batch outputs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Contents of `<stem>.provenance.json`.
#[derive(Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub planar_version: &'static str,
    pub tag: Option<String>,
    pub params: Value,
    pub output: String,
}

impl Sidecar {
    pub fn new(output: &Path, params: Value, tag: Option<String>) -> Self {
        Self {
            code_rev: code_rev(),
            planar_version: planar::VERSION,
            tag,
            params,
            output: output.to_string_lossy().into_owned(),
        }
    }

    /// Writes next to `output`; returns the sidecar path.
    pub fn write(&self, output: &Path) -> Result<PathBuf> {
        let path = sidecar_path(output);
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` at build time, then at run time; "unknown" otherwise.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
