use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sprout", about = concat!("[~] sprout v", env!("CARGO_PKG_VERSION"), " - finish tasks, grow the tree"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different task file (default: ~/.sprout_tasks.json)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks with their completion progress
    List,
    /// Add a task to the end of the list
    Add(AddArgs),
    /// Toggle a task's done flag
    Done(DoneArgs),
    /// Replace a task's text
    Edit(EditArgs),
    /// Remove one or more tasks
    Rm(RmArgs),
    /// Move tasks to a new position
    Mv(MvArgs),
    /// Print the completion ratio
    Progress,
}

// Positions on the command line are 1-based, matching the `list` output.

#[derive(Args)]
pub struct AddArgs {
    /// Task text (blank text is rejected)
    pub text: String,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task position
    pub position: usize,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task position
    pub position: usize,
    /// Replacement text (blank keeps the existing text)
    pub text: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task positions to remove
    #[arg(required = true)]
    pub positions: Vec<usize>,
}

#[derive(Args)]
pub struct MvArgs {
    /// Task positions to move, in selection order
    #[arg(required = true)]
    pub positions: Vec<usize>,
    /// Target position in the current list; past-the-end appends
    #[arg(long)]
    pub to: usize,
}
