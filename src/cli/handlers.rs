use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output;
use crate::io::codec::{self, CodecError};
use crate::io::paths;
use crate::io::pipeline::SnapshotPipeline;
use crate::model::task::TaskList;
use crate::ops::progress::progress;
use crate::ops::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = cli.file.clone().unwrap_or_else(paths::default_data_path);
    let json = cli.json;

    match cli.command {
        Commands::List => cmd_list(&path, json),
        Commands::Add(args) => cmd_add(&path, args),
        Commands::Done(args) => cmd_done(&path, args),
        Commands::Edit(args) => cmd_edit(&path, args),
        Commands::Rm(args) => cmd_rm(&path, args),
        Commands::Mv(args) => cmd_mv(&path, args, json),
        Commands::Progress => cmd_progress(&path, json),
    }
}

// ---------------------------------------------------------------------------
// Store setup
// ---------------------------------------------------------------------------

/// Load the persisted list and wire the snapshot pipeline subscriber.
///
/// A corrupt document starts the session with an empty list; the file stays
/// on disk untouched until the next mutation overwrites it, so the broken
/// content remains available for manual recovery up to that point.
fn open_store(path: &Path) -> TaskStore {
    let list = match codec::load(path) {
        Ok(list) => list,
        Err(e @ CodecError::Corrupt { .. }) => {
            eprintln!("warning: {e}; starting with an empty list");
            TaskList::new()
        }
        Err(e @ CodecError::Io { .. }) => {
            eprintln!("warning: {e}; starting with an empty list");
            TaskList::new()
        }
    };
    let mut store = TaskStore::from_list(list);
    store.subscribe(Box::new(SnapshotPipeline::new(path.to_path_buf())));
    store
}

/// Convert a 1-based CLI position to a 0-based list index.
fn to_index(position: usize) -> Result<usize, Box<dyn std::error::Error>> {
    position
        .checked_sub(1)
        .ok_or_else(|| "positions are numbered from 1".into())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(path);
    output::print_list(store.list(), progress(store.list()), json);
    Ok(())
}

fn cmd_progress(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(path);
    output::print_progress(store.list(), progress(store.list()), json);
    Ok(())
}

// ---------------------------------------------------------------------------
// Mutation commands
// ---------------------------------------------------------------------------

fn cmd_add(path: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(path);
    if !store.add(&args.text) {
        return Err("task text cannot be blank".into());
    }
    println!("added task {}", store.list().len());
    Ok(())
}

fn cmd_done(path: &Path, args: DoneArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(path);
    let index = to_index(args.position)?;
    let now_done = store
        .toggle_done(index)
        .map_err(|_| no_task_at(args.position, store.list().len()))?;
    if now_done {
        println!("task {} done", args.position);
    } else {
        println!("task {} reopened", args.position);
    }
    Ok(())
}

fn cmd_edit(path: &Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(path);
    let index = to_index(args.position)?;
    let changed = store
        .edit_text(index, &args.text)
        .map_err(|_| no_task_at(args.position, store.list().len()))?;
    if changed {
        println!("task {} updated", args.position);
    } else {
        println!("blank text ignored, task {} unchanged", args.position);
    }
    Ok(())
}

fn cmd_rm(path: &Path, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(path);
    let indices: Vec<usize> = args
        .positions
        .iter()
        .map(|&pos| to_index(pos))
        .collect::<Result<_, _>>()?;
    let removed = store.remove(&indices);
    println!("removed {} task{}", removed, plural(removed));
    Ok(())
}

fn cmd_mv(path: &Path, args: MvArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(path);
    let sources: Vec<usize> = args
        .positions
        .iter()
        .map(|&pos| to_index(pos))
        .collect::<Result<_, _>>()?;
    let target = to_index(args.to)?;

    let block = store.move_tasks(&sources, target).map_err(|e| match e {
        crate::ops::store::StoreError::OutOfRange { position, .. } => {
            no_task_at(position + 1, store.list().len())
        }
    })?;

    if json {
        output::print_json(&output::MovedJson {
            moved: block.len,
            start: block.start + 1,
        });
    } else if block.len == 1 {
        println!("moved 1 task to position {}", block.start + 1);
    } else {
        println!(
            "moved {} tasks to positions {}-{}",
            block.len,
            block.start + 1,
            block.start + block.len
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn no_task_at(position: usize, len: usize) -> Box<dyn std::error::Error> {
    format!("no task at position {} (list has {} task{})", position, len, plural(len)).into()
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
