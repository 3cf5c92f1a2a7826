use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::task::{Task, TaskPatch};

/// Shape of the serialized persistence slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTodos {
    todos: Vec<Task>,
}

/// Sole owner of the task collection.
///
/// Every operation is total: an id with no matching task is a silent no-op.
/// The store performs no I/O; callers observe snapshot changes and hand the
/// serialized collection to whatever persistence slot they manage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoStore {
    todos: Vec<Task>,
}

impl TodoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_tasks(todos: Vec<Task>) -> Self {
        Self { todos }
    }

    /// Current snapshot, in insertion order.
    #[must_use]
    pub fn todos(&self) -> &[Task] {
        &self.todos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.todos.iter().find(|task| task.id == id)
    }

    /// Appends a new task at the end of the collection and returns its id.
    ///
    /// Title validation is the caller's concern; the store accepts whatever
    /// it is handed.
    pub fn add(&mut self, title: &str, date: NaiveDate, description: &str) -> Uuid {
        let task = Task::new(title.to_string(), date, description.to_string());
        let id = task.id;
        debug!(%id, date = %date, "added todo");
        self.todos.push(task);
        id
    }

    pub fn toggle(&mut self, id: Uuid) {
        if let Some(task) = self.find_mut(id) {
            task.completed = !task.completed;
            debug!(%id, completed = task.completed, "toggled todo");
        }
    }

    pub fn delete(&mut self, id: Uuid) {
        let before = self.todos.len();
        self.todos.retain(|task| task.id != id);
        if self.todos.len() < before {
            debug!(%id, "deleted todo");
        }
    }

    pub fn edit_title(&mut self, id: Uuid, title: &str) {
        if let Some(task) = self.find_mut(id) {
            task.title = title.to_string();
            debug!(%id, "edited todo title");
        }
    }

    pub fn edit_description(&mut self, id: Uuid, description: &str) {
        if let Some(task) = self.find_mut(id) {
            task.description = description.to_string();
            debug!(%id, "edited todo description");
        }
    }

    /// Field-level merge: only the fields provided in `patch` overwrite the
    /// stored task.
    pub fn update(&mut self, id: Uuid, patch: TaskPatch) {
        if let Some(task) = self.find_mut(id) {
            if let Some(title) = patch.title {
                task.title = title;
            }
            if let Some(description) = patch.description {
                task.description = description;
            }
            if let Some(completed) = patch.completed {
                task.completed = completed;
            }
            debug!(%id, "updated todo");
        }
    }

    /// Serializes the collection as the `{ "todos": [...] }` slot payload.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(&StoredTodos {
            todos: self.todos.clone(),
        })
        .context("failed to serialize todos")
    }

    /// Rebuilds a store from a slot payload produced by [`Self::to_json`].
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let stored: StoredTodos =
            serde_json::from_str(raw).context("failed to parse stored todos")?;
        debug!(count = stored.todos.len(), "loaded todos from slot payload");
        Ok(Self {
            todos: stored.todos,
        })
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.todos.iter_mut().find(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::TodoStore;
    use crate::task::TaskPatch;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn add_appends_incomplete_task_with_unique_id() {
        let mut store = TodoStore::new();
        let first = store.add("Buy milk", day(2024, 6, 1), "");
        let second = store.add("Water plants", day(2024, 6, 1), "back garden");

        assert_eq!(store.len(), 2);
        assert_ne!(first, second);

        let task = store.get(first).expect("task exists");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert_eq!(task.date, day(2024, 6, 1));
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut store = TodoStore::new();
        let id = store.add("Buy milk", day(2024, 6, 1), "");

        store.toggle(id);
        assert!(store.get(id).expect("task exists").completed);
        store.toggle(id);
        assert!(!store.get(id).expect("task exists").completed);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = TodoStore::new();
        let id = store.add("Buy milk", day(2024, 6, 1), "");

        store.delete(id);
        assert!(store.is_empty());
        store.delete(id);
        assert!(store.is_empty());
    }

    #[test]
    fn unmatched_ids_are_silent_noops() {
        let mut store = TodoStore::new();
        store.add("Buy milk", day(2024, 6, 1), "");
        let snapshot = store.clone();

        let ghost = Uuid::new_v4();
        store.toggle(ghost);
        store.delete(ghost);
        store.edit_title(ghost, "nope");
        store.edit_description(ghost, "nope");
        store.update(ghost, TaskPatch::default());

        assert_eq!(store, snapshot);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut store = TodoStore::new();
        let id = store.add("Buy milk", day(2024, 6, 1), "semi-skimmed");
        store.toggle(id);

        store.update(
            id,
            TaskPatch {
                title: Some("Buy oat milk".to_string()),
                description: None,
                completed: None,
            },
        );

        let task = store.get(id).expect("task exists");
        assert_eq!(task.title, "Buy oat milk");
        assert_eq!(task.description, "semi-skimmed");
        assert!(task.completed);
        assert_eq!(task.date, day(2024, 6, 1));
    }

    #[test]
    fn slot_payload_roundtrips() {
        let mut store = TodoStore::new();
        store.add("Buy milk", day(2024, 6, 1), "");
        let toggled = store.add("Water plants", day(2024, 6, 2), "back garden");
        store.toggle(toggled);

        let json = store.to_json().expect("serialize store");
        let restored = TodoStore::from_json(&json).expect("parse store");
        assert_eq!(restored, store);
    }

    #[test]
    fn absent_slot_is_distinct_from_malformed_slot() {
        assert!(TodoStore::from_json("{\"todos\":[]}").expect("parse").is_empty());
        assert!(TodoStore::from_json("not json").is_err());
    }
}
