//! Tree Node Component
//!
//! One checklist row: collapse toggle, tri-state checkbox, name with inline
//! rename, and an add-child button that arms the form below the tree.

use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::database::ChecklistDatabase;
use crate::models::PermissionItem;
use crate::selection::ChecklistSelection;

/// A single permission row in the tree
#[component]
pub fn PermissionTreeNode(
    node: PermissionItem,
    selection: RwSignal<ChecklistSelection>,
    collapsed: RwSignal<HashSet<u32>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let database =
        use_context::<RwSignal<ChecklistDatabase>>().expect("database should be provided");

    let id = node.id;
    let expandable = node.expandable;
    let friendly_name = node.friendly_name.clone();
    let description = node.description.clone();
    let indent = node.level * 24;

    let is_collapsed = move || collapsed.with(|hidden| hidden.contains(&id));

    // Parents read checked from their subtree, leaves from the set itself
    let checked = move || {
        selection.with(|sel| {
            if expandable {
                sel.is_fully_selected(id)
            } else {
                sel.is_selected(id)
            }
        })
    };
    let indeterminate = move || selection.with(|sel| sel.is_partially_selected(id));

    let toggle = move |_| {
        selection.update(|sel| {
            if expandable {
                sel.toggle_node(id)
            } else {
                sel.toggle_leaf(id)
            }
        });
        web_sys::console::log_1(&format!("[TREE] toggled #{}", id).into());
    };

    // Inline rename state
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let start_edit = {
        let name = friendly_name.clone();
        move || {
            set_draft.set(name.clone());
            set_editing.set(true);
        }
    };
    let commit_edit = move || {
        database.update(|db| {
            let _ = db.update_item(id, &draft.get());
        });
        set_editing.set(false);
    };

    view! {
        <div class="item-row" style=format!("margin-left: {}px;", indent)>
            // Collapse toggle
            {if expandable {
                view! {
                    <button
                        class="collapse-btn"
                        on:click=move |_| {
                            collapsed.update(|hidden| {
                                if !hidden.remove(&id) {
                                    hidden.insert(id);
                                }
                            });
                        }
                    >
                        {move || if is_collapsed() { "▶" } else { "▼" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            // Tri-state checkbox
            <input
                type="checkbox"
                prop:checked=checked
                prop:indeterminate=indeterminate
                on:change=toggle
            />

            // Name, double-click to rename
            {move || {
                if editing.get() {
                    view! {
                        <input
                            class="rename-input"
                            type="text"
                            prop:value=move || draft.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_draft.set(input.value());
                            }
                            on:keydown=move |ev| match ev.key().as_str() {
                                "Enter" => commit_edit(),
                                "Escape" => set_editing.set(false),
                                _ => {}
                            }
                        />
                    }.into_any()
                } else {
                    let name = friendly_name.clone();
                    let start_edit = start_edit.clone();
                    view! {
                        <span
                            class="item-text"
                            title=description.clone()
                            on:dblclick=move |_| start_edit()
                        >
                            {name}
                        </span>
                    }.into_any()
                }
            }}

            // Add child button
            <button class="add-child-btn" on:click=move |_| ctx.set_adding_under(Some(id))>
                "+"
            </button>
        </div>
    }
}
