//! Sprout — a single-user to-do list core.
//!
//! The crate is an ordered task list with safe mutation operations,
//! drag-reorder semantics, durable JSON snapshots, and a completion ratio
//! that a rendering collaborator (originally a growing-tree illustration)
//! consumes. The `cli` module is the bundled front end; embedders use the
//! `model`, `ops`, and `io` layers directly.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
