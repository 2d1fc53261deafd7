//! Permission Tree App
//!
//! Root component. Owns the checklist database and the selection controller
//! and wires the database's change subject into the reactive graph: every
//! republished tree is re-flattened into the controller, which the view
//! reads.

use leptos::prelude::*;
use std::collections::HashSet;

use crate::components::{NewItemForm, PermissionTreeView};
use crate::context::AppContext;
use crate::database::ChecklistDatabase;
use crate::selection::ChecklistSelection;

#[component]
pub fn App() -> impl IntoView {
    let selection = RwSignal::new(ChecklistSelection::default());
    let collapsed = RwSignal::new(HashSet::<u32>::new());
    let (adding_under, set_adding_under) = signal::<Option<u32>>(None);

    // The database is constructed here and handed down explicitly. Its
    // subscribe replays the seed tree straight into the selection
    // controller, which consumes the pre-selected branch flags.
    let database = RwSignal::new(ChecklistDatabase::new());
    database.update(|db| {
        db.on_change(move |roots| {
            selection.update(|sel| sel.set_data(roots));
        });
    });

    provide_context(AppContext::new((adding_under, set_adding_under)));
    provide_context(database);

    let counts = move || {
        selection.with(|sel| format!("{} items, {} selected", sel.nodes().len(), sel.selected_count()))
    };

    let save_selection = move |_| {
        selection.with(|sel| {
            let names: Vec<&str> = sel
                .selected_items()
                .iter()
                .map(|node| node.name.as_str())
                .collect();
            web_sys::console::log_1(
                &format!("[SAVE] {} permissions: {:?}", names.len(), names).into(),
            );
        });
    };

    view! {
        <main class="app-layout">
            <h1>"Role Permissions"</h1>

            <PermissionTreeView selection=selection collapsed=collapsed />

            <NewItemForm />

            <div class="save-row">
                <button class="save-btn" on:click=save_selection>"Save"</button>
                <p class="item-count">{counts}</p>
            </div>
        </main>
    }
}
