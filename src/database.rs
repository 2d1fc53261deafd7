//! Checklist Database
//!
//! In-memory source of truth for the nested role-permission tree. The roots
//! live behind a last-value [`DataSubject`]; every mutation republishes the
//! whole tree so derived views (flattening, selection) can rebuild.

use crate::data;
use crate::models::{DomainError, DomainResult, PermissionItem};
use crate::subject::{DataSubject, SubscriptionId};

pub struct ChecklistDatabase {
    subject: DataSubject<Vec<PermissionItem>>,
    next_id: u32,
}

impl ChecklistDatabase {
    /// Database holding the embedded seed dataset
    pub fn new() -> Self {
        Self::with_roots(data::load_tree_data())
    }

    pub fn with_roots(roots: Vec<PermissionItem>) -> Self {
        let next_id = max_id(&roots) + 1;
        Self {
            subject: DataSubject::new(roots),
            next_id,
        }
    }

    /// Current nested roots
    pub fn data(&self) -> &[PermissionItem] {
        self.subject.value()
    }

    /// Subscribe to tree changes; the current roots are replayed immediately
    pub fn on_change(
        &mut self,
        callback: impl Fn(&Vec<PermissionItem>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.subject.subscribe(callback)
    }

    pub fn cancel(&mut self, id: SubscriptionId) {
        self.subject.unsubscribe(id);
    }

    /// Append a child with a fresh id under `parent_id` and republish.
    /// Unknown parents leave the tree untouched.
    pub fn insert_item(&mut self, parent_id: u32, name: &str) -> DomainResult<u32> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("item name is empty".into()));
        }
        let id = self.next_id;
        let mut roots = self.subject.value().clone();
        match find_node_mut(&mut roots, parent_id) {
            Some(parent) => parent
                .children
                .push(PermissionItem::new_child(id, name, parent_id)),
            None => {
                return Err(DomainError::NotFound(format!(
                    "no item with id {parent_id}"
                )))
            }
        }
        self.next_id += 1;
        self.subject.publish(roots);
        Ok(id)
    }

    /// Rename the item with `id` and republish
    pub fn update_item(&mut self, id: u32, name: &str) -> DomainResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("item name is empty".into()));
        }
        let mut roots = self.subject.value().clone();
        match find_node_mut(&mut roots, id) {
            Some(node) => {
                node.name = name.to_string();
                node.friendly_name = name.to_string();
            }
            None => return Err(DomainError::NotFound(format!("no item with id {id}"))),
        }
        self.subject.publish(roots);
        Ok(())
    }
}

impl Default for ChecklistDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn max_id(nodes: &[PermissionItem]) -> u32 {
    nodes
        .iter()
        .map(|node| node.id.max(max_id(&node.children)))
        .max()
        .unwrap_or(0)
}

fn find_node_mut(nodes: &mut [PermissionItem], id: u32) -> Option<&mut PermissionItem> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}
