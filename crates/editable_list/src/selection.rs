use std::{collections::BTreeSet, ops::Range};

/// Selected rows of a list, tracked by index.
///
/// Indices are patched when rows are inserted or removed, the same way a list view keeps its
/// selection model in sync. Patching by index cannot follow rows that were moved, so after a
/// drop the selection is rebuilt from the model's drop result instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    rows: BTreeSet<usize>,
    anchor: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.rows.iter().copied().collect()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.anchor = None;
    }

    pub fn select_only(&mut self, row: usize) {
        self.rows.clear();
        self.rows.insert(row);
        self.anchor = Some(row);
    }

    /// Adds `row` without deselecting anything. The first row added becomes the anchor.
    pub fn insert(&mut self, row: usize) {
        self.rows.insert(row);
        self.anchor.get_or_insert(row);
    }

    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        self.rows.retain(|&row| keep(row));
    }

    pub fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
        self.anchor = Some(row);
    }

    /// Select everything between the anchor and `row`, keeping the anchor.
    pub fn extend_to(&mut self, row: usize) {
        let Some(anchor) = self.anchor else {
            self.select_only(row);
            return;
        };
        self.rows.clear();
        self.rows.extend(anchor.min(row)..=anchor.max(row));
    }

    pub fn select_range(&mut self, range: Range<usize>) {
        self.anchor = Some(range.start);
        self.rows.extend(range);
    }

    pub fn rows_inserted(&mut self, at: usize, count: usize) {
        if count == 0 {
            return;
        }
        let shift = |row: usize| if row >= at { row + count } else { row };
        self.rows = self.rows.iter().map(|&row| shift(row)).collect();
        self.anchor = self.anchor.map(shift);
    }

    /// `removed` must be sorted ascending.
    pub fn rows_removed(&mut self, removed: &[usize]) {
        if removed.is_empty() {
            return;
        }
        let shift = |row: usize| {
            if removed.binary_search(&row).is_ok() {
                None
            } else {
                Some(row - removed.partition_point(|&r| r < row))
            }
        };
        self.rows = self.rows.iter().filter_map(|&row| shift(row)).collect();
        self.anchor = self.anchor.and_then(shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_modifiers() {
        let mut selection = Selection::new();
        selection.select_only(2);
        selection.toggle(5);
        assert_eq!(selection.to_vec(), vec![2, 5]);

        selection.toggle(2);
        assert_eq!(selection.to_vec(), vec![5]);

        selection.extend_to(3);
        assert_eq!(selection.to_vec(), vec![2, 3]);
        assert_eq!(selection.anchor(), Some(2));

        selection.extend_to(6);
        assert_eq!(selection.to_vec(), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn extend_without_anchor_selects_the_row() {
        let mut selection = Selection::new();
        selection.extend_to(4);
        assert_eq!(selection.to_vec(), vec![4]);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut selection = Selection::new();
        for row in [1, 1, 4] {
            selection.insert(row);
        }
        assert_eq!(selection.to_vec(), vec![1, 4]);
        assert_eq!(selection.anchor(), Some(1));
    }

    #[test]
    fn retain_keeps_matching_rows() {
        let mut selection = Selection::new();
        selection.select_only(1);
        selection.extend_to(4);
        selection.retain(|row| row != 2);
        assert_eq!(selection.to_vec(), vec![1, 3, 4]);
        assert_eq!(selection.anchor(), Some(1));
    }

    #[test]
    fn insertion_shifts_rows_at_and_after() {
        let mut selection = Selection::new();
        selection.select_range(1..4);
        selection.rows_inserted(2, 2);
        assert_eq!(selection.to_vec(), vec![1, 4, 5]);
        assert_eq!(selection.anchor(), Some(1));
    }

    #[test]
    fn removal_drops_and_shifts() {
        let mut selection = Selection::new();
        selection.select_range(0..6);
        selection.rows_removed(&[1, 3]);
        assert_eq!(selection.to_vec(), vec![0, 1, 2, 3]);

        let mut selection = Selection::new();
        selection.select_only(4);
        selection.rows_removed(&[4]);
        assert!(selection.is_empty());
        assert_eq!(selection.anchor(), None);
    }
}
