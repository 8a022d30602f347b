use serde::{Deserialize, Serialize};

/// A single to-do entry: the text and whether it is done.
///
/// The persisted field name for the text is `task`, matching the on-disk
/// document format. Identity is positional — a record is identified by its
/// current position in the [`TaskList`], not by a stable ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task text. Never blank after trimming once constructed.
    #[serde(rename = "task")]
    pub text: String,
    /// Completion flag. Absent in a persisted record means not done.
    #[serde(default)]
    pub done: bool,
}

impl TaskRecord {
    /// Create a new, not-yet-done record. The caller is responsible for
    /// rejecting blank text before construction.
    pub fn new(text: impl Into<String>) -> Self {
        TaskRecord {
            text: text.into(),
            done: false,
        }
    }
}

/// The full ordered collection of tasks — the single source of truth.
///
/// Positions are contiguous `0..n-1`; any external view (table rows, CLI
/// listing) is rebuilt from this list and never holds a divergent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    records: Vec<TaskRecord>,
}

impl TaskList {
    /// Create an empty list.
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Build a list from already-validated records (used by the loader).
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        TaskList { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&TaskRecord> {
        self.records.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.records.iter()
    }

    /// The records in display order.
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    // Mutation stays inside the crate so that all edits flow through the
    // store (and its change notification) or the reorder engine.

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut TaskRecord> {
        self.records.get_mut(position)
    }

    pub(crate) fn push(&mut self, record: TaskRecord) {
        self.records.push(record);
    }

    pub(crate) fn insert(&mut self, position: usize, record: TaskRecord) {
        self.records.insert(position, record);
    }

    pub(crate) fn remove(&mut self, position: usize) -> TaskRecord {
        self.records.remove(position)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
