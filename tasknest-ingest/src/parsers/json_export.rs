//! JSON task-list exports.
//!
//! Accepts either a bare array of tasks or the backend's `{ "tasks": [...] }`
//! envelope:
//!   [{"id": 1, "title": "Buy milk", "date": "2026-02-16", "time": "09:00",
//!     "status": "pending", "tags": ["home"]}]

use anyhow::{Context, Result};
use serde::Deserialize;
use tasknest_core::TaskRecord;

use crate::types::TaskRow;

#[derive(Deserialize)]
#[serde(untagged)]
enum Export {
    Bare(Vec<TaskRow>),
    Envelope { tasks: Vec<TaskRow> },
}

pub fn parse_json_export(text: &str) -> Result<Vec<TaskRecord>> {
    let export: Export = serde_json::from_str(text).context("parse task export JSON")?;
    let rows = match export {
        Export::Bare(rows) => rows,
        Export::Envelope { tasks } => tasks,
    };

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| row.into_record(i))
        .collect())
}
