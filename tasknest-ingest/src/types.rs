use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tasknest_core::{TaskRecord, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

/// Loosely-typed row as it comes out of an export (format-agnostic).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskRow {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

// Exports carry numeric or string ids.
fn id_as_string<'de, D: serde::Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

// Backend exports emit `null` for unset fields.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

pub fn parse_status(s: &str) -> TaskStatus {
    match s.trim().to_lowercase().as_str() {
        "completed" | "complete" | "done" => TaskStatus::Completed,
        _ => TaskStatus::Pending,
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

impl TaskRow {
    /// Normalize into a core record. `None` when the row has no title.
    ///
    /// `index` stands in for a missing id.
    pub fn into_record(self, index: usize) -> Option<TaskRecord> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return None;
        }

        let id = if self.id.trim().is_empty() {
            format!("row-{index}")
        } else {
            self.id.trim().to_string()
        };

        Some(TaskRecord {
            id,
            title,
            date: self.date.as_deref().and_then(parse_date),
            time: self.time.as_deref().and_then(parse_time),
            status: self.status.as_deref().map(parse_status).unwrap_or_default(),
            tags: self
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_variants() {
        assert_eq!(parse_status("Done"), TaskStatus::Completed);
        assert_eq!(parse_status("completed"), TaskStatus::Completed);
        assert_eq!(parse_status("pending"), TaskStatus::Pending);
        assert_eq!(parse_status("in-progress"), TaskStatus::Pending);
    }

    #[test]
    fn test_parse_time_with_and_without_seconds() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("18:05:10"), NaiveTime::from_hms_opt(18, 5, 10));
        assert_eq!(parse_time("late"), None);
    }

    #[test]
    fn test_row_without_title_is_dropped() {
        let row = TaskRow { id: "1".into(), title: "  ".into(), ..Default::default() };
        assert!(row.into_record(0).is_none());
    }

    #[test]
    fn test_missing_id_uses_row_index() {
        let row = TaskRow { title: "Gym".into(), ..Default::default() };
        assert_eq!(row.into_record(4).unwrap().id, "row-4");
    }
}
