//! Data Model
//!
//! The role-permission entry used by both representations of the tree: the
//! nested form carries `children`; the flattened form carries `level` and
//! `expandable` and leaves `children` empty.

use serde::{Deserialize, Serialize};

/// One role-permission entry in the checklist tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionItem {
    /// Unique identifier within the whole tree
    pub id: u32,
    /// Display name shown in the tree
    pub friendly_name: String,
    /// Technical permission name
    pub name: String,
    /// Longer description
    pub description: String,
    /// Parent item ID (None = root level)
    pub parent_id: Option<u32>,
    /// Seed flag from the dataset: pre-select this branch once at startup
    #[serde(default)]
    pub selected: bool,
    /// True iff the node has children; assigned during flattening
    #[serde(default)]
    pub expandable: bool,
    /// Depth in the tree (root = 0); assigned during flattening
    #[serde(default)]
    pub level: usize,
    /// Nested children; empty on flattened entries
    #[serde(default)]
    pub children: Vec<PermissionItem>,
}

impl PermissionItem {
    /// Create a new root item
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            friendly_name: name.to_string(),
            name: name.to_string(),
            description: String::new(),
            parent_id: None,
            selected: false,
            expandable: false,
            level: 0,
            children: Vec::new(),
        }
    }

    /// Create a new child item under a parent
    pub fn new_child(id: u32, name: &str, parent_id: u32) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Self::new(id, name)
        }
    }

    /// Check if this is a root item (no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Common result type for tree mutations
pub type DomainResult<T> = Result<T, DomainError>;

/// Mutation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
