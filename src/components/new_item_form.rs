//! New Item Form Component
//!
//! Appends a child permission under the node armed via the row "+" button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::database::ChecklistDatabase;

/// Form for adding a child permission under an armed parent
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let database =
        use_context::<RwSignal<ChecklistDatabase>>().expect("database should be provided");

    let (new_name, set_new_name) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.is_empty() {
            return;
        }
        let Some(parent) = ctx.adding_under.get() else {
            return;
        };
        let mut inserted = false;
        database.update(|db| {
            inserted = db.insert_item(parent, &name).is_ok();
        });
        if inserted {
            set_new_name.set(String::new());
            ctx.set_adding_under(None);
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder=move || {
                        if let Some(pid) = ctx.adding_under.get() {
                            format!("Add permission under #{}...", pid)
                        } else {
                            "Arm a parent with + first...".to_string()
                        }
                    }
                    prop:value=move || new_name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_name.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </div>

            {move || ctx.adding_under.get().map(|pid| view! {
                <button type="button" class="cancel-btn" on:click=move |_| ctx.set_adding_under(None)>
                    "Cancel (#" {pid} ")"
                </button>
            })}
        </form>
    }
}
