// Selection state - multi-interval row selection for the listing table

use crate::entry::FileEntry;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Selected row indices plus the anchor used for shift-click ranges.
#[derive(Default)]
pub struct SelectionState {
    rows: BTreeSet<usize>,
    anchor: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain click: select only this row.
    pub fn select(&mut self, index: usize) {
        self.rows.clear();
        self.rows.insert(index);
        self.anchor = Some(index);
    }

    /// Ctrl-click: toggle this row, keeping the rest of the selection.
    pub fn toggle(&mut self, index: usize) {
        if !self.rows.remove(&index) {
            self.rows.insert(index);
        }
        self.anchor = Some(index);
    }

    /// Shift-click: select the contiguous range from the anchor.
    pub fn extend_to(&mut self, index: usize) {
        let anchor = self.anchor.unwrap_or(index);
        let (lo, hi) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        self.rows.clear();
        self.rows.extend(lo..=hi);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.anchor = None;
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rows.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Drop indices that no longer exist after a refresh shrank the listing.
    pub fn retain_valid(&mut self, entry_count: usize) {
        self.rows.retain(|&i| i < entry_count);
        if matches!(self.anchor, Some(a) if a >= entry_count) {
            self.anchor = None;
        }
    }

    /// Resolve the selected rows against the current listing.
    pub fn selected_paths(&self, entries: &[FileEntry]) -> Vec<PathBuf> {
        self.rows
            .iter()
            .filter_map(|&i| entries.get(i))
            .map(|e| e.path.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_click_replaces_selection() {
        let mut sel = SelectionState::new();
        sel.select(2);
        sel.select(5);
        assert!(sel.contains(5));
        assert!(!sel.contains(2));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_ctrl_click_toggles() {
        let mut sel = SelectionState::new();
        sel.select(1);
        sel.toggle(3);
        assert!(sel.contains(1) && sel.contains(3));
        sel.toggle(1);
        assert!(!sel.contains(1));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_shift_click_selects_range() {
        let mut sel = SelectionState::new();
        sel.select(2);
        sel.extend_to(5);
        assert_eq!(sel.len(), 4);
        assert!((2..=5).all(|i| sel.contains(i)));

        // Range works in both directions from the anchor
        sel.extend_to(0);
        assert!((0..=2).all(|i| sel.contains(i)));
        assert!(!sel.contains(5));
    }

    #[test]
    fn test_retain_valid_after_shrink() {
        let mut sel = SelectionState::new();
        sel.select(1);
        sel.toggle(7);
        sel.retain_valid(4);
        assert!(sel.contains(1));
        assert!(!sel.contains(7));
    }
}
