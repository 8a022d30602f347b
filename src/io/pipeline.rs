use std::path::PathBuf;

use crate::io::codec;
use crate::model::task::TaskList;
use crate::ops::progress::progress;
use crate::ops::store::StoreObserver;

/// The one store subscriber wired at startup: after every committed
/// mutation it rewrites the full snapshot and pushes the fresh completion
/// ratio to the rendering collaborator.
///
/// A failed save is reported on stderr and otherwise ignored — the
/// in-memory list stays authoritative for the rest of the session and the
/// next mutation retries the write. Persistence trouble must never stop
/// the session.
pub struct SnapshotPipeline {
    path: PathBuf,
    progress_sink: Option<Box<dyn FnMut(f64)>>,
}

impl SnapshotPipeline {
    pub fn new(path: PathBuf) -> Self {
        SnapshotPipeline {
            path,
            progress_sink: None,
        }
    }

    /// Attach the rendering collaborator's progress consumer.
    pub fn with_progress_sink(mut self, sink: Box<dyn FnMut(f64)>) -> Self {
        self.progress_sink = Some(sink);
        self
    }
}

impl StoreObserver for SnapshotPipeline {
    fn list_changed(&mut self, list: &TaskList) {
        if let Err(e) = codec::save(&self.path, list) {
            eprintln!("warning: {e}");
        }
        if let Some(sink) = &mut self.progress_sink {
            sink(progress(list));
        }
    }
}
