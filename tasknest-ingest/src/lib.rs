//! tasknest-ingest: task-list provider over JSON and CSV exports.

pub mod parsers;
pub mod types;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tasknest_core::TaskRecord;
use tracing::debug;

pub use parsers::{parse_csv_export, parse_json_export};
pub use types::{ExportFormat, TaskRow};

/// Load a task list, picking the parser from the file extension.
pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let path = path.as_ref();
    let Some(format) = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ExportFormat::from_extension)
    else {
        bail!("unsupported task file (expected .json or .csv): {}", path.display());
    };

    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let tasks = match format {
        ExportFormat::Json => parse_json_export(&text),
        ExportFormat::Csv => parse_csv_export(&text),
    }
    .with_context(|| format!("parsing {}", path.display()))?;

    debug!(path = %path.display(), count = tasks.len(), "loaded task list");
    Ok(tasks)
}
