//! Seed Dataset
//!
//! Hard-coded role-permission tree the app starts from. Kept as embedded
//! JSON so the wire shape of the items stays visible in one place.

use crate::models::PermissionItem;

pub const TREE_DATA: &str = r#"[
    {
        "id": 1,
        "friendlyName": "Parent1",
        "name": "Parent1",
        "description": "Parent 1",
        "selected": false,
        "parentId": null,
        "children": [
            {
                "id": 3,
                "friendlyName": "Child 1.1",
                "name": "Child1.1",
                "description": "Child 1.1",
                "selected": false,
                "parentId": 1,
                "children": [
                    {
                        "id": 9,
                        "friendlyName": "Child 1.1.1",
                        "name": "Child1.1.1",
                        "description": "Child 1.1.1",
                        "selected": false,
                        "parentId": 3,
                        "children": []
                    }
                ]
            },
            {
                "id": 4,
                "friendlyName": "Child 1.2",
                "name": "Child1.2",
                "description": "Child 1.2",
                "selected": true,
                "parentId": 1,
                "children": []
            },
            {
                "id": 5,
                "friendlyName": "Child 1.3",
                "name": "Child1.3",
                "description": "Child 1.3",
                "selected": false,
                "parentId": 1,
                "children": []
            }
        ]
    },
    {
        "id": 2,
        "friendlyName": "Parent2",
        "name": "Parent2",
        "description": "Parent 2",
        "selected": true,
        "parentId": null,
        "children": [
            {
                "id": 6,
                "friendlyName": "Child 2.1",
                "name": "Child 2.1",
                "description": "Child 2.1",
                "selected": true,
                "parentId": 2,
                "children": []
            },
            {
                "id": 7,
                "friendlyName": "Child 2.2",
                "name": "Child 2.2",
                "description": "Child 2.2",
                "selected": true,
                "parentId": 2,
                "children": []
            },
            {
                "id": 8,
                "friendlyName": "Child 2.3",
                "name": "Child 2.3",
                "description": "Child 2.3",
                "selected": true,
                "parentId": 2,
                "children": []
            }
        ]
    }
]"#;

/// Parse the embedded dataset into nested root items
pub fn load_tree_data() -> Vec<PermissionItem> {
    serde_json::from_str(TREE_DATA).expect("seed dataset is valid JSON")
}
