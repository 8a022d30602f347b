use crate::model::task::{TaskList, TaskRecord};

/// Where a moved block landed: positions `[start, start + len)` in the
/// final list. Callers use this to restore selection after a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovedBlock {
    pub start: usize,
    pub len: usize,
}

impl MovedBlock {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Apply a drag-and-drop move: relocate the records at `sources` so the
/// block starts at `target`, preserving all other relative orderings.
///
/// `target` addresses the list as it exists *before* the source rows are
/// removed (insert-then-adjust, the same strategy a table drop handler
/// uses: insert the dragged rows at the drop index, then delete the
/// originals at their shifted positions). A target past the end clamps to
/// the list length, i.e. append.
///
/// Dropping a block onto itself, or into the gap immediately after itself,
/// falls out of this as a no-op.
///
/// Callers must pass in-range, deduplicated source positions; `sources`
/// order is the selection order and is preserved in the moved block.
pub fn move_block(list: &mut TaskList, sources: &[usize], target: usize) -> MovedBlock {
    let count = sources.len();
    let target = target.min(list.len());

    // 1. Capture the dragged records before any structural change.
    let captured: Vec<TaskRecord> = sources
        .iter()
        .filter_map(|&pos| list.get(pos).cloned())
        .collect();
    debug_assert_eq!(captured.len(), count, "sources must be validated in-range");

    // 2. Insert the block at the pre-removal target position.
    for (offset, record) in captured.into_iter().enumerate() {
        list.insert(target + offset, record);
    }

    // 3. Remove the originals, highest index first so earlier removals do
    //    not shift later ones. Originals at or past the insertion point
    //    moved down by the inserted count.
    let mut originals: Vec<usize> = sources.to_vec();
    originals.sort_unstable();
    for &pos in originals.iter().rev() {
        let effective = if pos >= target { pos + count } else { pos };
        list.remove(effective);
    }

    // 4. The final block start is the target minus the originals that sat
    //    before it (their removal shifts the block left).
    let shift = sources.iter().filter(|&&pos| pos < target).count();
    MovedBlock {
        start: target - shift,
        len: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> TaskList {
        TaskList::from_records(texts.iter().map(|t| TaskRecord::new(*t)).collect())
    }

    fn texts(list: &TaskList) -> Vec<&str> {
        list.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn move_leading_pair_into_middle() {
        // [A,B,C,D,E], move {0,1} to target 3 → [C,A,B,D,E]
        let mut list = list_of(&["A", "B", "C", "D", "E"]);
        let block = move_block(&mut list, &[0, 1], 3);
        assert_eq!(texts(&list), vec!["C", "A", "B", "D", "E"]);
        assert_eq!(block, MovedBlock { start: 1, len: 2 });
    }

    #[test]
    fn move_single_to_front() {
        let mut list = list_of(&["A", "B", "C"]);
        let block = move_block(&mut list, &[2], 0);
        assert_eq!(texts(&list), vec!["C", "A", "B"]);
        assert_eq!(block.range(), 0..1);
    }

    #[test]
    fn move_to_end_with_clamped_target() {
        let mut list = list_of(&["A", "B", "C"]);
        let block = move_block(&mut list, &[0], 99);
        assert_eq!(texts(&list), vec!["B", "C", "A"]);
        assert_eq!(block, MovedBlock { start: 2, len: 1 });
    }

    #[test]
    fn move_onto_own_position_is_noop() {
        let mut list = list_of(&["A", "B", "C", "D"]);
        let block = move_block(&mut list, &[1, 2], 1);
        assert_eq!(texts(&list), vec!["A", "B", "C", "D"]);
        assert_eq!(block, MovedBlock { start: 1, len: 2 });
    }

    #[test]
    fn move_inside_own_block_is_noop() {
        let mut list = list_of(&["A", "B", "C", "D"]);
        let block = move_block(&mut list, &[1, 2], 2);
        assert_eq!(texts(&list), vec!["A", "B", "C", "D"]);
        assert_eq!(block, MovedBlock { start: 1, len: 2 });
    }

    #[test]
    fn move_into_gap_after_own_block_is_noop() {
        let mut list = list_of(&["A", "B", "C", "D"]);
        let block = move_block(&mut list, &[1, 2], 3);
        assert_eq!(texts(&list), vec!["A", "B", "C", "D"]);
        assert_eq!(block, MovedBlock { start: 1, len: 2 });
    }

    #[test]
    fn move_noncontiguous_selection_keeps_selection_order() {
        // Selecting A and C and dropping before E gathers them into one block.
        let mut list = list_of(&["A", "B", "C", "D", "E"]);
        let block = move_block(&mut list, &[0, 2], 4);
        assert_eq!(texts(&list), vec!["B", "D", "A", "C", "E"]);
        assert_eq!(block, MovedBlock { start: 2, len: 2 });
    }

    #[test]
    fn move_preserves_done_flags() {
        let mut list = list_of(&["A", "B", "C"]);
        list.get_mut(0).unwrap().done = true;
        move_block(&mut list, &[0], 3);
        assert_eq!(texts(&list), vec!["B", "C", "A"]);
        assert!(list.get(2).unwrap().done);
        assert!(!list.get(0).unwrap().done);
    }

    #[test]
    fn move_whole_list_is_noop_order() {
        let mut list = list_of(&["A", "B"]);
        let block = move_block(&mut list, &[0, 1], 0);
        assert_eq!(texts(&list), vec!["A", "B"]);
        assert_eq!(block, MovedBlock { start: 0, len: 2 });
    }
}
