use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::{TaskList, TaskRecord};

/// Error type for snapshot I/O
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("could not access task file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("corrupt task file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Serialize the full list to `path` as a pretty-printed UTF-8 JSON array
/// of `{"task", "done"}` objects, replacing the previous document entirely.
///
/// The write goes through a temp file in the same directory and a rename,
/// so a failed write leaves the previous snapshot intact. Failure is
/// surfaced but never fatal: the in-memory list stays authoritative and the
/// next mutation retries.
pub fn save(path: &Path, list: &TaskList) -> Result<(), CodecError> {
    let json = serde_json::to_string_pretty(list.records()).map_err(|source| {
        CodecError::Corrupt {
            path: path.to_path_buf(),
            source,
        }
    })?;
    atomic_write(path, json.as_bytes()).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the persisted list from `path`.
///
/// A missing file is an empty list, not an error. A document that is not a
/// JSON array is `CodecError::Corrupt`; the caller's policy is to start
/// empty and leave the file on disk for manual recovery. Individual
/// elements are decoded tolerantly: unknown extra fields are ignored, a
/// missing `done` defaults to false, and an element without usable task
/// text is skipped rather than failing the whole load.
pub fn load(path: &Path) -> Result<TaskList, CodecError> {
    if !path.exists() {
        return Ok(TaskList::new());
    }
    let text = fs::read_to_string(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let elements: Vec<serde_json::Value> =
        serde_json::from_str(&text).map_err(|source| CodecError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

    let records = elements
        .into_iter()
        .filter_map(decode_record)
        .collect();
    Ok(TaskList::from_records(records))
}

/// Decode one persisted element, or None if it is not a valid record.
/// Blank text would violate the list's never-blank invariant, so such
/// records are treated as invalid too.
fn decode_record(element: serde_json::Value) -> Option<TaskRecord> {
    let record: TaskRecord = serde_json::from_value(element).ok()?;
    if record.text.trim().is_empty() {
        return None;
    }
    Some(record)
}

/// Write via temp file + rename so readers never observe a torn document.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
