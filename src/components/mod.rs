//! UI Components
//!
//! Reusable Leptos components.

mod new_item_form;
mod tree_node;
mod tree_view;

pub use new_item_form::NewItemForm;
pub use tree_node::PermissionTreeNode;
pub use tree_view::PermissionTreeView;
