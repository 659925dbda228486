//! CSV task-list exports.
//!
//! Header row names the columns (any order, case-insensitive):
//!   id,title,date,time,status,tags
//! `tags` holds `;`-separated values. Only `title` is required.

use anyhow::{Context, Result, bail};
use tasknest_core::TaskRecord;

use crate::types::TaskRow;

pub fn parse_csv_export(text: &str) -> Result<Vec<TaskRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = rdr.headers().context("read CSV header")?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let Some(title_idx) = column("title") else {
        bail!("CSV export has no 'title' column");
    };
    let id_idx = column("id");
    let date_idx = column("date");
    let time_idx = column("time");
    let status_idx = column("status");
    let tags_idx = column("tags");

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", i + 1))?;
        let get = |idx: Option<usize>| idx.and_then(|j| record.get(j)).filter(|s| !s.is_empty());

        let row = TaskRow {
            id: get(id_idx).unwrap_or_default().to_string(),
            title: record.get(title_idx).unwrap_or("").to_string(),
            date: get(date_idx).map(str::to_string),
            time: get(time_idx).map(str::to_string),
            status: get(status_idx).map(str::to_string),
            tags: get(tags_idx)
                .map(|t| t.split(';').map(str::to_string).collect())
                .unwrap_or_default(),
        };

        if let Some(task) = row.into_record(i) {
            out.push(task);
        }
    }

    Ok(out)
}
