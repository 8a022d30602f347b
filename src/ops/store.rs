use crate::model::task::{TaskList, TaskRecord};
use crate::ops::reorder::{self, MovedBlock};

/// Error type for store mutations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("position {position} out of range (list has {len} tasks)")]
    OutOfRange { position: usize, len: usize },
}

/// Receives the committed list after every mutation.
///
/// Exactly one concrete subscriber is wired at startup: the snapshot
/// pipeline that persists the list and recomputes the completion ratio.
pub trait StoreObserver {
    fn list_changed(&mut self, list: &TaskList);
}

/// Owns the [`TaskList`] and exposes the safe mutation operations.
///
/// Every committed mutation notifies subscribers synchronously; rejected
/// input (blank text, fully out-of-range batches) leaves the list untouched
/// and fires nothing.
pub struct TaskStore {
    list: TaskList,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::from_list(TaskList::new())
    }

    /// Take ownership of a loaded list.
    pub fn from_list(list: TaskList) -> Self {
        TaskStore {
            list,
            observers: Vec::new(),
        }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Register a change subscriber. Wired once at startup.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Append a task. Blank text (after trim) is rejected as a silent
    /// no-op. Returns whether a record was added.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.list.push(TaskRecord::new(trimmed));
        self.notify();
        true
    }

    /// Remove the records at the given positions. Out-of-range positions
    /// are filtered silently; the rest are removed highest-index-first so
    /// earlier removals never invalidate later ones. Returns the number of
    /// records removed.
    pub fn remove(&mut self, positions: &[usize]) -> usize {
        let mut valid: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&pos| pos < self.list.len())
            .collect();
        valid.sort_unstable();
        valid.dedup();

        if valid.is_empty() {
            return 0;
        }
        for &pos in valid.iter().rev() {
            self.list.remove(pos);
        }
        self.notify();
        valid.len()
    }

    /// Flip the done flag at `position`. Returns the new flag value.
    pub fn toggle_done(&mut self, position: usize) -> Result<bool, StoreError> {
        let len = self.list.len();
        let record = self
            .list
            .get_mut(position)
            .ok_or(StoreError::OutOfRange { position, len })?;
        record.done = !record.done;
        let now_done = record.done;
        self.notify();
        Ok(now_done)
    }

    /// Replace the text at `position`. Blank replacement text (after trim)
    /// preserves the prior text as a silent no-op; returns whether the text
    /// changed.
    pub fn edit_text(&mut self, position: usize, new_text: &str) -> Result<bool, StoreError> {
        let len = self.list.len();
        let trimmed = new_text.trim();
        let record = self
            .list
            .get_mut(position)
            .ok_or(StoreError::OutOfRange { position, len })?;
        if trimmed.is_empty() {
            return Ok(false);
        }
        record.text = trimmed.to_string();
        self.notify();
        Ok(true)
    }

    /// Relocate the records at `sources` so the block starts at `target`
    /// (drag-and-drop semantics, see [`reorder::move_block`]). Source
    /// positions must be in range; the target clamps to the list length.
    /// Returns the moved block's final position range so the caller can
    /// restore selection.
    pub fn move_tasks(
        &mut self,
        sources: &[usize],
        target: usize,
    ) -> Result<MovedBlock, StoreError> {
        let len = self.list.len();
        if let Some(&position) = sources.iter().find(|&&pos| pos >= len) {
            return Err(StoreError::OutOfRange { position, len });
        }

        // Drop duplicate selections, keeping first-selected order.
        let mut sources: Vec<usize> = sources.to_vec();
        let mut seen = vec![false; len];
        sources.retain(|&pos| !std::mem::replace(&mut seen[pos], true));

        let block = reorder::move_block(&mut self.list, &sources, target);
        self.notify();
        Ok(block)
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.list_changed(&self.list);
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_of(texts: &[&str]) -> TaskStore {
        TaskStore::from_list(TaskList::from_records(
            texts.iter().map(|t| TaskRecord::new(*t)).collect(),
        ))
    }

    fn texts(store: &TaskStore) -> Vec<&str> {
        store.list().iter().map(|r| r.text.as_str()).collect()
    }

    /// Counts notifications and keeps the last seen list.
    struct Probe {
        log: Rc<RefCell<Vec<TaskList>>>,
    }

    impl StoreObserver for Probe {
        fn list_changed(&mut self, list: &TaskList) {
            self.log.borrow_mut().push(list.clone());
        }
    }

    fn probed(mut store: TaskStore) -> (TaskStore, Rc<RefCell<Vec<TaskList>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        store.subscribe(Box::new(Probe { log: Rc::clone(&log) }));
        (store, log)
    }

    // --- add ---

    #[test]
    fn add_appends_and_trims() {
        let mut store = TaskStore::new();
        assert!(store.add("  plant a tree  "));
        assert_eq!(texts(&store), vec!["plant a tree"]);
        assert!(!store.list().get(0).unwrap().done);
    }

    #[test]
    fn add_rejects_blank_text() {
        let (mut store, log) = probed(store_of(&["a"]));
        assert!(!store.add("   "));
        assert!(!store.add(""));
        assert_eq!(store.list().len(), 1);
        assert!(log.borrow().is_empty());
    }

    // --- remove ---

    #[test]
    fn remove_is_index_shift_safe() {
        // [A,B,C,D], remove {0,2} → [B,D]
        let mut store = store_of(&["A", "B", "C", "D"]);
        assert_eq!(store.remove(&[0, 2]), 2);
        assert_eq!(texts(&store), vec!["B", "D"]);
    }

    #[test]
    fn remove_filters_out_of_range_silently() {
        let (mut store, log) = probed(store_of(&["A", "B", "C"]));
        assert_eq!(store.remove(&[1, 7]), 1);
        assert_eq!(texts(&store), vec!["A", "C"]);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn remove_nothing_valid_does_not_notify() {
        let (mut store, log) = probed(store_of(&["A"]));
        assert_eq!(store.remove(&[5, 6]), 0);
        assert_eq!(store.list().len(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn remove_ignores_duplicate_positions() {
        let mut store = store_of(&["A", "B"]);
        assert_eq!(store.remove(&[1, 1]), 1);
        assert_eq!(texts(&store), vec!["A"]);
    }

    // --- toggle ---

    #[test]
    fn toggle_flips_in_place() {
        let mut store = store_of(&["A", "B"]);
        assert_eq!(store.toggle_done(1), Ok(true));
        assert!(store.list().get(1).unwrap().done);
        assert_eq!(store.toggle_done(1), Ok(false));
        assert!(!store.list().get(1).unwrap().done);
    }

    #[test]
    fn toggle_out_of_range_leaves_list_unchanged() {
        let (mut store, log) = probed(store_of(&["A", "B", "C"]));
        let err = store.toggle_done(5).unwrap_err();
        assert_eq!(err, StoreError::OutOfRange { position: 5, len: 3 });
        assert_eq!(texts(&store), vec!["A", "B", "C"]);
        assert!(store.list().iter().all(|r| !r.done));
        assert!(log.borrow().is_empty());
    }

    // --- edit ---

    #[test]
    fn edit_replaces_text() {
        let mut store = store_of(&["A"]);
        assert_eq!(store.edit_text(0, "  better text "), Ok(true));
        assert_eq!(texts(&store), vec!["better text"]);
    }

    #[test]
    fn edit_blank_preserves_prior_text() {
        let (mut store, log) = probed(store_of(&["keep me"]));
        assert_eq!(store.edit_text(0, "   "), Ok(false));
        assert_eq!(texts(&store), vec!["keep me"]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn edit_out_of_range_errors() {
        let mut store = store_of(&["A"]);
        let err = store.edit_text(3, "new").unwrap_err();
        assert_eq!(err, StoreError::OutOfRange { position: 3, len: 1 });
    }

    // --- move ---

    #[test]
    fn move_delegates_to_reorder_engine() {
        let mut store = store_of(&["A", "B", "C", "D", "E"]);
        let block = store.move_tasks(&[0, 1], 3).unwrap();
        assert_eq!(texts(&store), vec!["C", "A", "B", "D", "E"]);
        assert_eq!(block.range(), 1..3);
    }

    #[test]
    fn move_with_invalid_source_errors_before_mutating() {
        let (mut store, log) = probed(store_of(&["A", "B"]));
        let err = store.move_tasks(&[0, 9], 1).unwrap_err();
        assert_eq!(err, StoreError::OutOfRange { position: 9, len: 2 });
        assert_eq!(texts(&store), vec!["A", "B"]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn move_clamps_target_to_append() {
        let mut store = store_of(&["A", "B", "C"]);
        let block = store.move_tasks(&[0], 100).unwrap();
        assert_eq!(texts(&store), vec!["B", "C", "A"]);
        assert_eq!(block.start, 2);
    }

    #[test]
    fn move_dedups_repeated_selection() {
        let mut store = store_of(&["A", "B", "C"]);
        store.move_tasks(&[0, 0], 3).unwrap();
        assert_eq!(texts(&store), vec!["B", "C", "A"]);
    }

    // --- notification ---

    #[test]
    fn each_committed_mutation_notifies_with_current_list() {
        let (mut store, log) = probed(TaskStore::new());
        store.add("one");
        store.add("two");
        store.toggle_done(0).unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].len(), 1);
        assert_eq!(log[1].len(), 2);
        assert!(log[2].get(0).unwrap().done);
    }
}
