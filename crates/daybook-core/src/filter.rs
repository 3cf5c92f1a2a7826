use chrono::NaiveDate;

use crate::task::Task;

/// The tasks bucketed under `day`, in collection (insertion) order.
///
/// Pure read: the selected day is a view-side concern, so this takes the
/// snapshot rather than living on the store.
#[must_use]
pub fn tasks_for_day(todos: &[Task], day: NaiveDate) -> Vec<Task> {
    todos
        .iter()
        .filter(|task| task.date == day)
        .cloned()
        .collect()
}

#[must_use]
pub fn count_for_day(todos: &[Task], day: NaiveDate) -> usize {
    todos.iter().filter(|task| task.date == day).count()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{count_for_day, tasks_for_day};
    use crate::store::TodoStore;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn buckets_by_day_preserving_insertion_order() {
        let mut store = TodoStore::new();
        let first = store.add("Buy milk", day(2024, 6, 1), "");
        let second = store.add("Water plants", day(2024, 6, 1), "");
        store.add("Call plumber", day(2024, 6, 2), "");

        let bucket = tasks_for_day(store.todos(), day(2024, 6, 1));
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].id, first);
        assert_eq!(bucket[1].id, second);

        assert_eq!(count_for_day(store.todos(), day(2024, 6, 2)), 1);
    }

    #[test]
    fn empty_day_yields_empty_bucket() {
        let mut store = TodoStore::new();
        store.add("Buy milk", day(2024, 6, 1), "");
        store.add("Call plumber", day(2024, 6, 2), "");

        assert!(tasks_for_day(store.todos(), day(2024, 6, 3)).is_empty());
        assert_eq!(count_for_day(store.todos(), day(2024, 6, 3)), 0);
    }

    #[test]
    fn filtering_is_pure() {
        let mut store = TodoStore::new();
        store.add("Buy milk", day(2024, 6, 1), "");
        store.add("Water plants", day(2024, 6, 1), "");

        let first_pass = tasks_for_day(store.todos(), day(2024, 6, 1));
        let second_pass = tasks_for_day(store.todos(), day(2024, 6, 1));
        assert_eq!(first_pass, second_pass);
    }
}
