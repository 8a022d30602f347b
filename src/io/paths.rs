use std::path::PathBuf;

/// File name of the per-user task snapshot, kept in the home directory.
pub const DATA_FILE_NAME: &str = ".sprout_tasks.json";

/// The fixed per-user data path: `~/.sprout_tasks.json`.
pub fn default_data_path() -> PathBuf {
    dirs_home().join(DATA_FILE_NAME)
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}
