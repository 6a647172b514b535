use anyhow::Result;

use crate::{db::driver::Db, models::Todo};

const PREFIX: &str = "todo:";

/// Todo-specific query layer over the generic driver. Clones share the same
/// underlying sled handle.
#[derive(Debug, Clone)]
pub struct TodoStore {
    db: Db,
}
impl TodoStore {
    pub fn open(path: &str) -> Result<Self> {
        Ok(Self { db: Db::open(path)? })
    }

    // Ids are zero-padded so lexicographic key order matches numeric id
    // order, which matches insertion order (ids are monotonic).
    fn key(id: u64) -> String {
        format!("{PREFIX}{id:020}")
    }

    pub fn list_all(&self) -> Result<Vec<Todo>> {
        self.db
            .scan_prefix::<Todo>(PREFIX)
            .map(|row| row.map(|(_, todo)| todo))
            .collect()
    }

    pub fn get(&self, id: u64) -> Result<Option<Todo>> {
        self.db.get(Self::key(id))
    }

    pub fn insert(&self, content: String) -> Result<Todo> {
        let todo = Todo::new(self.db.generate_id()?, content);
        self.db.put(Self::key(todo.id), &todo)?;
        Ok(todo)
    }

    /// Returns the updated row, or `None` if the id is absent.
    pub fn set_completed(&self, id: u64, completed: bool) -> Result<Option<Todo>> {
        let Some(mut todo) = self.get(id)? else {
            return Ok(None);
        };
        todo.completed = completed;
        self.db.put(Self::key(id), &todo)?;
        Ok(Some(todo))
    }

    /// Deleting an absent id is not an error.
    pub fn delete(&self, id: u64) -> Result<()> {
        self.db.remove(Self::key(id))
    }
}
