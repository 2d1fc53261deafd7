//! Checklist Selection Controller
//!
//! Multi-select over the flattened tree with parent/child propagation:
//! toggling a node cascades its new state to every descendant, and ancestors
//! are re-derived bottom-up so a parent reads selected exactly when its whole
//! subtree is. Partial subtrees surface as the indeterminate checkbox state,
//! which is recomputed on demand and never stored.

use std::collections::{HashMap, HashSet};

use crate::models::PermissionItem;
use crate::tree;

/// Tri-state selection over a flattened item tree.
///
/// Membership is keyed by item id rather than object identity, so the
/// selection survives re-flattening when the underlying tree is mutated.
#[derive(Debug, Clone, Default)]
pub struct ChecklistSelection {
    flat: Vec<PermissionItem>,
    index_by_id: HashMap<u32, usize>,
    selected: HashSet<u32>,
}

impl ChecklistSelection {
    pub fn new(roots: &[PermissionItem]) -> Self {
        let mut selection = Self::default();
        selection.set_data(roots);
        selection
    }

    /// Replace the underlying tree, keeping the selection for ids that still
    /// exist. The `selected` seed flag of a root is consumed the first time
    /// that root shows up: its branch is pre-selected.
    pub fn set_data(&mut self, roots: &[PermissionItem]) {
        let known: HashSet<u32> = self.index_by_id.keys().copied().collect();
        self.flat = tree::flatten_tree(roots);
        self.index_by_id = self
            .flat
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id, index))
            .collect();
        self.selected.retain(|id| self.index_by_id.contains_key(id));

        let seeds: Vec<u32> = self
            .flat
            .iter()
            .filter(|node| node.level == 0 && node.selected && !known.contains(&node.id))
            .map(|node| node.id)
            .collect();
        for id in seeds {
            self.select_subtree(id);
        }
    }

    /// The flat pre-order sequence backing this selection
    pub fn nodes(&self) -> &[PermissionItem] {
        &self.flat
    }

    /// Flip the node and cascade the new state to all of its descendants,
    /// then re-derive every ancestor. Afterwards the whole subtree carries
    /// the node's new state uniformly.
    pub fn toggle_node(&mut self, id: u32) {
        let Some(&index) = self.index_by_id.get(&id) else {
            return;
        };
        if self.selected.contains(&id) {
            self.selected.remove(&id);
            for node in tree::descendants(&self.flat, index) {
                self.selected.remove(&node.id);
            }
        } else {
            self.selected.insert(id);
            for node in tree::descendants(&self.flat, index) {
                self.selected.insert(node.id);
            }
        }
        self.resync_ancestors(index);
    }

    /// Flip a single leaf and re-derive every ancestor. An expandable node
    /// must keep its subtree in step, so it falls through to the cascading
    /// toggle instead of desyncing its descendants.
    pub fn toggle_leaf(&mut self, id: u32) {
        let Some(&index) = self.index_by_id.get(&id) else {
            return;
        };
        if self.flat[index].expandable {
            return self.toggle_node(id);
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.resync_ancestors(index);
    }

    /// Raw membership; the checkbox state of a leaf
    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    /// At least one descendant and all of them selected. A node with no
    /// descendants is never reported fully selected here; read
    /// [`is_selected`](Self::is_selected) for leaves.
    pub fn is_fully_selected(&self, id: u32) -> bool {
        self.index_by_id
            .get(&id)
            .is_some_and(|&index| self.all_descendants_selected(index))
    }

    /// Some but not all of the descendants selected
    pub fn is_partially_selected(&self, id: u32) -> bool {
        let Some(&index) = self.index_by_id.get(&id) else {
            return false;
        };
        let any = tree::descendants(&self.flat, index)
            .iter()
            .any(|node| self.selected.contains(&node.id));
        any && !self.all_descendants_selected(index)
    }

    /// Parent entry of a node, via backward scan over the flat sequence
    pub fn parent_of(&self, id: u32) -> Option<&PermissionItem> {
        let &index = self.index_by_id.get(&id)?;
        tree::parent_of(&self.flat, index).map(|i| &self.flat[i])
    }

    /// Selected items in display order
    pub fn selected_items(&self) -> Vec<&PermissionItem> {
        self.flat
            .iter()
            .filter(|node| self.selected.contains(&node.id))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn select_subtree(&mut self, id: u32) {
        let Some(&index) = self.index_by_id.get(&id) else {
            return;
        };
        self.selected.insert(id);
        for node in tree::descendants(&self.flat, index) {
            self.selected.insert(node.id);
        }
    }

    /// Walk the parent chain upward. A selected ancestor with a not fully
    /// selected subtree is deselected; a deselected ancestor whose subtree
    /// became fully selected is selected.
    fn resync_ancestors(&mut self, index: usize) {
        let mut parent = tree::parent_of(&self.flat, index);
        while let Some(parent_index) = parent {
            let parent_id = self.flat[parent_index].id;
            let all = self.all_descendants_selected(parent_index);
            if self.selected.contains(&parent_id) && !all {
                self.selected.remove(&parent_id);
            } else if !self.selected.contains(&parent_id) && all {
                self.selected.insert(parent_id);
            }
            parent = tree::parent_of(&self.flat, parent_index);
        }
    }

    fn all_descendants_selected(&self, index: usize) -> bool {
        let descendants = tree::descendants(&self.flat, index);
        !descendants.is_empty()
            && descendants
                .iter()
                .all(|node| self.selected.contains(&node.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_tree_data;

    fn make_item(id: u32, name: &str, children: Vec<PermissionItem>) -> PermissionItem {
        PermissionItem {
            children,
            ..PermissionItem::new(id, name)
        }
    }

    /// Parent1 -> { Child1.1 -> { Child1.1.1 }, Child1.2, Child1.3 }, no seed flags
    fn parent1_roots() -> Vec<PermissionItem> {
        vec![make_item(
            1,
            "Parent1",
            vec![
                make_item(3, "Child1.1", vec![make_item(9, "Child1.1.1", vec![])]),
                make_item(4, "Child1.2", vec![]),
                make_item(5, "Child1.3", vec![]),
            ],
        )]
    }

    #[test]
    fn test_toggle_node_selects_whole_subtree() {
        let mut selection = ChecklistSelection::new(&parent1_roots());

        selection.toggle_node(1);

        assert!(selection.is_selected(1));
        assert!(selection.is_fully_selected(1));
        for id in [3, 9, 4, 5] {
            assert!(selection.is_selected(id), "descendant {id} not selected");
        }
    }

    #[test]
    fn test_toggle_node_deselects_whole_subtree() {
        let mut selection = ChecklistSelection::new(&parent1_roots());

        selection.toggle_node(1);
        selection.toggle_node(1);

        assert!(!selection.is_selected(1));
        for id in [3, 9, 4, 5] {
            assert!(!selection.is_selected(id), "descendant {id} still selected");
        }
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_toggle_node_on_mid_level_resyncs_ancestors() {
        let mut selection = ChecklistSelection::new(&parent1_roots());

        // Select everything, then cascade-deselect a branch: the root must
        // drop out of the selection as its subtree is no longer complete.
        selection.toggle_node(1);
        selection.toggle_node(3);

        assert!(!selection.is_selected(3));
        assert!(!selection.is_selected(9));
        assert!(!selection.is_selected(1));
        assert!(selection.is_partially_selected(1));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut selection = ChecklistSelection::new(&parent1_roots());
        selection.toggle_leaf(4);
        let before: Vec<u32> = selection.selected_items().iter().map(|n| n.id).collect();

        selection.toggle_node(3);
        selection.toggle_node(3);

        let after: Vec<u32> = selection.selected_items().iter().map(|n| n.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_full_and_partial_are_mutually_exclusive() {
        let mut selection = ChecklistSelection::new(&parent1_roots());
        selection.toggle_leaf(4);
        selection.toggle_node(3);

        for node in selection.nodes().to_vec() {
            assert!(
                !(selection.is_fully_selected(node.id) && selection.is_partially_selected(node.id)),
                "node {} reported both full and partial",
                node.id
            );
        }
    }

    #[test]
    fn test_leaf_never_fully_selected() {
        let mut selection = ChecklistSelection::new(&parent1_roots());
        selection.toggle_leaf(4);

        assert!(selection.is_selected(4));
        assert!(!selection.is_fully_selected(4));
        assert!(!selection.is_partially_selected(4));
    }

    #[test]
    fn test_ancestor_selected_only_after_last_leaf() {
        // Root -> { A, B }, both leaves
        let roots = vec![make_item(
            1,
            "Root",
            vec![make_item(2, "A", vec![]), make_item(3, "B", vec![])],
        )];
        let mut selection = ChecklistSelection::new(&roots);

        selection.toggle_leaf(2);
        assert!(!selection.is_selected(1));
        assert!(selection.is_partially_selected(1));

        selection.toggle_leaf(3);
        assert!(selection.is_selected(1));
        assert!(selection.is_fully_selected(1));
    }

    #[test]
    fn test_single_leaf_leaves_parent_partial() {
        let mut selection = ChecklistSelection::new(&parent1_roots());

        selection.toggle_leaf(4);

        assert!(selection.is_partially_selected(1));
        assert!(!selection.is_fully_selected(1));
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn test_deselecting_leaf_drops_ancestors() {
        let mut selection = ChecklistSelection::new(&parent1_roots());
        selection.toggle_node(1);

        selection.toggle_leaf(9);

        // Child1.1 lost its only descendant, and Parent1 its completeness
        assert!(!selection.is_selected(3));
        assert!(!selection.is_selected(1));
        assert!(selection.is_partially_selected(1));
        assert!(selection.is_selected(4));
    }

    #[test]
    fn test_toggle_leaf_on_expandable_cascades() {
        let mut selection = ChecklistSelection::new(&parent1_roots());

        selection.toggle_leaf(3);

        // Falls through to the cascading toggle, so the subtree stays in step
        assert!(selection.is_selected(3));
        assert!(selection.is_selected(9));
        assert!(selection.is_fully_selected(3));
    }

    #[test]
    fn test_parent_lookup() {
        let selection = ChecklistSelection::new(&parent1_roots());

        assert!(selection.parent_of(1).is_none());
        assert_eq!(selection.parent_of(9).map(|n| n.id), Some(3));
        assert_eq!(selection.parent_of(5).map(|n| n.id), Some(1));
    }

    #[test]
    fn test_seed_flag_preselects_branch() {
        let selection = ChecklistSelection::new(&load_tree_data());

        // Parent2 carries the seed flag; its branch starts selected
        assert!(selection.is_selected(2));
        assert!(selection.is_fully_selected(2));
        for id in [6, 7, 8] {
            assert!(selection.is_selected(id));
        }
        // Parent1 does not, and the seed flag of leaf Child1.2 is advisory
        // only at the root level
        assert!(!selection.is_selected(1));
        assert_eq!(selection.selected_count(), 4);
    }

    #[test]
    fn test_set_data_preserves_selection_by_id() {
        let mut roots = parent1_roots();
        let mut selection = ChecklistSelection::new(&roots);
        selection.toggle_node(3);

        // Mutate the tree (append a sibling) and republish
        roots[0]
            .children
            .push(make_item(10, "Child1.4", vec![]));
        selection.set_data(&roots);

        assert!(selection.is_selected(3));
        assert!(selection.is_selected(9));
        assert!(!selection.is_selected(10));
        assert!(selection.is_partially_selected(1));
    }

    #[test]
    fn test_set_data_drops_vanished_ids() {
        let mut roots = parent1_roots();
        let mut selection = ChecklistSelection::new(&roots);
        selection.toggle_node(1);

        roots[0].children.remove(0);
        selection.set_data(&roots);

        assert_eq!(
            selection.selected_items().iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![1, 4, 5]
        );
    }

    #[test]
    fn test_seed_not_reapplied_on_republish() {
        let roots = load_tree_data();
        let mut selection = ChecklistSelection::new(&roots);

        // Clear the pre-selected branch, then republish the same tree: the
        // seed flag was already consumed and must not reassert itself.
        selection.toggle_node(2);
        selection.set_data(&roots);

        assert!(!selection.is_selected(2));
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut selection = ChecklistSelection::new(&parent1_roots());
        selection.toggle_node(999);
        selection.toggle_leaf(999);

        assert_eq!(selection.selected_count(), 0);
        assert!(!selection.is_fully_selected(999));
        assert!(!selection.is_partially_selected(999));
        assert!(selection.parent_of(999).is_none());
    }
}
