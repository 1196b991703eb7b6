//! Selection set for bulk actions.

use std::collections::HashSet;
use std::hash::Hash;

/// Ids picked for a bulk action, always a subset of one fetched page.
///
/// Selection survives filter changes (matching the dashboard behavior) but
/// is pruned whenever the underlying collection shrinks, so a deleted item
/// can never linger selected.
#[derive(Debug, Clone)]
pub struct Selection<Id: Clone + Eq + Hash> {
    picked: HashSet<Id>,
}

impl<Id: Clone + Eq + Hash> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            picked: HashSet::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> Selection<Id> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: Id) {
        if !self.picked.remove(&id) {
            self.picked.insert(id);
        }
    }

    /// Select-all scoped to the current filter view: if the selected count
    /// equals the nonzero visible count, clear; otherwise select exactly
    /// the visible set. Calling twice returns to the prior state.
    pub fn toggle_all(&mut self, visible: &[Id]) {
        if !visible.is_empty() && self.picked.len() == visible.len() {
            self.picked.clear();
        } else {
            self.picked = visible.iter().cloned().collect();
        }
    }

    pub fn clear(&mut self) {
        self.picked.clear();
    }

    /// Drop selected ids that no longer exist in the collection
    pub fn prune(&mut self, existing: &[Id]) {
        let existing: HashSet<&Id> = existing.iter().collect();
        self.picked.retain(|id| existing.contains(id));
    }

    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.picked.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// Selected ids in the order they appear in `visible`, so bulk actions
    /// run in list order.
    #[must_use]
    pub fn in_order(&self, visible: &[Id]) -> Vec<Id> {
        visible
            .iter()
            .filter(|id| self.picked.contains(id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selection = Selection::new();
        selection.toggle(1);
        assert!(selection.contains(&1));
        selection.toggle(1);
        assert!(!selection.contains(&1));
    }

    #[test]
    fn toggle_all_selects_exactly_the_visible_set() {
        let mut selection = Selection::new();
        selection.toggle(99); // selected but filtered out of view
        selection.toggle_all(&[1, 2, 3]);
        assert_eq!(selection.len(), 3);
        assert!(!selection.contains(&99));
    }

    #[test]
    fn toggle_all_twice_is_pair_idempotent() {
        let visible = vec![1, 2, 3];

        // From empty: select-all then clear returns to empty.
        let mut selection = Selection::new();
        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 3);
        selection.toggle_all(&visible);
        assert!(selection.is_empty());

        // From full: clear then select-all returns to full.
        selection.toggle_all(&visible);
        selection.toggle_all(&visible);
        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn toggle_all_on_empty_view_clears_nothing_selects_nothing() {
        let mut selection: Selection<i32> = Selection::new();
        selection.toggle_all(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn prune_drops_deleted_ids() {
        let mut selection = Selection::new();
        selection.toggle_all(&[1, 2, 3]);
        selection.prune(&[1, 3]);
        assert_eq!(selection.len(), 2);
        assert!(!selection.contains(&2));
    }

    #[test]
    fn in_order_follows_visible_order() {
        let mut selection = Selection::new();
        selection.toggle(3);
        selection.toggle(1);
        assert_eq!(selection.in_order(&[1, 2, 3]), vec![1, 3]);
        assert_eq!(selection.in_order(&[3, 2, 1]), vec![3, 1]);
    }
}
