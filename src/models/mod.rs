use serde::{Deserialize, Serialize};

/// A single task record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub content: String,
    pub completed: bool,
}
impl Todo {
    pub fn new(id: u64, content: String) -> Self {
        Self {
            id,
            content,
            completed: false,
        }
    }
}
