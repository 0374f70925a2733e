//! Provenance sidecar for JSON reports: which build produced a report, and from what.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `<report-stem>.provenance.json` next to `report` and return its path.
pub fn write_sidecar<T: Serialize>(report: &Path, params: &T, total_time: f64) -> Result<PathBuf> {
    let stem = report
        .file_stem()
        .map_or_else(|| "report".into(), |s| s.to_string_lossy());
    let sidecar = report.with_file_name(format!("{stem}.provenance.json"));
    let doc = json!({
        "code_rev": code_rev(),
        "version": crossing::VERSION,
        "params": params,
        "total_time": total_time,
        "report": report.to_string_lossy(),
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Commit baked in at build time, else taken from the environment.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
