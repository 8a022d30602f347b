use serde::Serialize;

use crate::model::task::{TaskList, TaskRecord};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub tasks: &'a [TaskRecord],
    pub progress: f64,
}

#[derive(Serialize)]
pub struct ProgressJson {
    pub done: usize,
    pub total: usize,
    pub progress: f64,
}

#[derive(Serialize)]
pub struct MovedJson {
    pub moved: usize,
    /// 1-based position of the first moved task after the move
    pub start: usize,
}

// ---------------------------------------------------------------------------
// Plain rendering
// ---------------------------------------------------------------------------

/// Render the numbered checkbox listing with a progress footer.
pub fn print_list(list: &TaskList, ratio: f64, json: bool) {
    if json {
        print_json(&ListJson {
            tasks: list.records(),
            progress: ratio,
        });
        return;
    }

    if list.is_empty() {
        println!("no tasks");
        return;
    }

    let width = list.len().to_string().len();
    for (i, record) in list.iter().enumerate() {
        let mark = if record.done { 'x' } else { ' ' };
        println!("{:>width$} [{}] {}", i + 1, mark, record.text);
    }
    let done = list.iter().filter(|r| r.done).count();
    println!();
    println!("{}/{} done ({:.0}%)", done, list.len(), ratio * 100.0);
}

pub fn print_progress(list: &TaskList, ratio: f64, json: bool) {
    let done = list.iter().filter(|r| r.done).count();
    if json {
        print_json(&ProgressJson {
            done,
            total: list.len(),
            progress: ratio,
        });
    } else {
        println!("{:.2}", ratio);
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("error: could not serialize output: {}", e),
    }
}
