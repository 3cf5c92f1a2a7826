use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::day::day_key_serde;

/// A single to-do entry, bucketed under one calendar day.
///
/// `id` and `date` are assigned at creation and never change afterwards;
/// everything else is mutable through the store's operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(with = "day_key_serde")]
    pub date: NaiveDate,

    /// Accepted on deserialization for forward compatibility; no operation
    /// populates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: String, date: NaiveDate, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            date,
            created_at: None,
        }
    }
}

/// Field-level merge patch: only provided fields overwrite the stored task.
/// `id` and `date` are immutable and therefore not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::Task;

    #[test]
    fn new_task_starts_incomplete_with_fresh_id() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let a = Task::new("Buy milk".to_string(), day, String::new());
        let b = Task::new("Buy milk".to_string(), day, String::new());

        assert!(!a.completed);
        assert!(a.created_at.is_none());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_date_as_day_key() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let task = Task::new("Buy milk".to_string(), day, "semi-skimmed".to_string());
        let json = serde_json::to_string(&task).expect("serialize task");

        assert!(json.contains("\"date\":\"2024-06-01\""));
        assert!(!json.contains("created_at"));
    }
}
