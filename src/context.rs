//! Application Context
//!
//! Shared UI-interaction state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which item the add-child form targets (None = form disarmed) - read
    pub adding_under: ReadSignal<Option<u32>>,
    /// Which item the add-child form targets - write
    set_adding_under: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(adding_under: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>)) -> Self {
        Self {
            adding_under: adding_under.0,
            set_adding_under: adding_under.1,
        }
    }

    /// Arm the add-child form for a parent node (None disarms it)
    pub fn set_adding_under(&self, parent_id: Option<u32>) {
        self.set_adding_under.set(parent_id);
    }
}
