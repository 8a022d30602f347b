use crate::model::task::TaskList;

/// Completion ratio: done count over total, `0.0` for an empty list.
/// Always in `[0, 1]` by construction.
pub fn progress(list: &TaskList) -> f64 {
    let total = list.len();
    if total == 0 {
        return 0.0;
    }
    let done = list.iter().filter(|r| r.done).count();
    done as f64 / total as f64
}
