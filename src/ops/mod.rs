pub mod progress;
pub mod reorder;
pub mod store;

pub use progress::progress;
pub use reorder::{MovedBlock, move_block};
pub use store::{StoreError, StoreObserver, TaskStore};
