//! Permission Tree View Component
//!
//! Renders the flattened checklist rows in display order, skipping the
//! subtrees of collapsed nodes.

use leptos::prelude::*;
use std::collections::HashSet;

use crate::components::PermissionTreeNode;
use crate::selection::ChecklistSelection;
use crate::tree::visible_nodes;

/// Flat list of checklist rows
#[component]
pub fn PermissionTreeView(
    selection: RwSignal<ChecklistSelection>,
    collapsed: RwSignal<HashSet<u32>>,
) -> impl IntoView {
    let rows = move || {
        selection.with(|sel| collapsed.with(|hidden| visible_nodes(sel.nodes(), hidden)))
    };

    view! {
        <div class="tree-view">
            <For
                each=rows
                key=|node| {
                    // Rename and structural changes must recreate the row
                    (node.id, node.level, node.expandable, node.friendly_name.clone())
                }
                children=move |node| {
                    view! {
                        <PermissionTreeNode node=node selection=selection collapsed=collapsed />
                    }
                }
            />
        </div>
    }
}
