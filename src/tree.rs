//! Tree Utilities
//!
//! Flattening of the nested item tree into the pre-order list the view
//! renders, plus the structural queries the selection controller needs.

use std::collections::HashSet;

use crate::models::PermissionItem;

/// Flatten nested roots into display order using recursive DFS.
///
/// Each emitted entry gets `level` from its depth and `expandable` from
/// child presence; `children` are not carried into the flat entries.
pub fn flatten_tree(roots: &[PermissionItem]) -> Vec<PermissionItem> {
    fn collect(nodes: &[PermissionItem], level: usize, out: &mut Vec<PermissionItem>) {
        for node in nodes {
            let mut flat = node.clone();
            flat.level = level;
            flat.expandable = !node.children.is_empty();
            flat.children = Vec::new();
            out.push(flat);
            collect(&node.children, level + 1, out);
        }
    }

    let mut out = Vec::new();
    collect(roots, 0, &mut out);
    out
}

/// Descendants of the node at `index`: the run of entries after it whose
/// `level` is greater than its own.
pub fn descendants(flat: &[PermissionItem], index: usize) -> &[PermissionItem] {
    let level = flat[index].level;
    let end = flat[index + 1..]
        .iter()
        .position(|node| node.level <= level)
        .map_or(flat.len(), |offset| index + 1 + offset);
    &flat[index + 1..end]
}

/// Position of the parent of the node at `index`.
///
/// Roots have no parent. Otherwise scan backward for the first entry with a
/// strictly smaller `level`; an exhausted scan (malformed sequence) also
/// reads as "no parent".
pub fn parent_of(flat: &[PermissionItem], index: usize) -> Option<usize> {
    let current = flat[index].level;
    if current < 1 {
        return None;
    }
    (0..index).rev().find(|&i| flat[i].level < current)
}

/// Rows to render given the set of collapsed node ids: a collapsed node
/// stays visible, its subtree does not.
pub fn visible_nodes(flat: &[PermissionItem], collapsed: &HashSet<u32>) -> Vec<PermissionItem> {
    let mut out = Vec::new();
    let mut hidden_below: Option<usize> = None;
    for node in flat {
        if let Some(level) = hidden_below {
            if node.level > level {
                continue;
            }
            hidden_below = None;
        }
        out.push(node.clone());
        if collapsed.contains(&node.id) {
            hidden_below = Some(node.level);
        }
    }
    out
}
