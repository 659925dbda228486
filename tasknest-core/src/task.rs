//! Task records as handed over by the task-list provider.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// A to-do entry.
///
/// Kept small + serializable; persistence of tasks belongs to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,

    /// Due day, if the task is dated.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Due time of day.
    #[serde(default)]
    pub time: Option<NaiveTime>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl TaskRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: None,
            time: None,
            status: TaskStatus::Pending,
            tags: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn completed(mut self) -> Self {
        self.status = TaskStatus::Completed;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Classifier input for this task.
    pub fn as_input(&self) -> TaskInput {
        TaskInput {
            id: self.id.clone(),
            text: self.title.clone(),
            completed: self.is_completed(),
        }
    }
}

/// Minimal task shape for list analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl TaskInput {
    pub fn new(id: impl Into<String>, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
        }
    }
}

/// Titles of tasks that still exist; suggestions are limited to these.
pub fn existing_titles(tasks: &[TaskRecord]) -> HashSet<String> {
    tasks.iter().map(|t| t.title.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_titles_dedupes() {
        let tasks = vec![
            TaskRecord::new("1", "Buy milk"),
            TaskRecord::new("2", "Buy milk").completed(),
            TaskRecord::new("3", "Call mom"),
        ];
        let titles = existing_titles(&tasks);
        assert_eq!(titles.len(), 2);
        assert!(titles.contains("Call mom"));
    }

    #[test]
    fn test_as_input_carries_completion() {
        let t = TaskRecord::new("7", "Read chapter 3").completed();
        let input = t.as_input();
        assert_eq!(input.id, "7");
        assert_eq!(input.text, "Read chapter 3");
        assert!(input.completed);
    }
}
