use log::debug;

use super::db::{release, TodoStore};
use super::error::{StoreError, StoreResult};
use crate::entities::{NewTodo, Todo};
use crate::repositories::TodoRepository;

/// Row cap used when the caller does not pick one
pub const DEFAULT_LIMIT: u64 = 10;

impl TodoStore {
    /// Persist a new todo and return its id. The id is always assigned by the store.
    pub async fn insert(&self, todo: &NewTodo) -> StoreResult<i64> {
        todo.validate()?;
        let conn = self.open().await?;
        let result = TodoRepository::insert(&conn, self.table_name(), todo).await;
        release(conn).await;

        let id = result.map_err(|e| self.db_err(e))?;
        debug!("Inserted todo {}", id);
        Ok(id)
    }

    /// Fetch one todo, failing with [`StoreError::NotFound`] if it does not exist.
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Todo> {
        let conn = self.open().await?;
        let result = TodoRepository::get_by_id(&conn, self.table_name(), id).await;
        release(conn).await;

        result.map_err(|e| self.db_err(e))?.ok_or(StoreError::NotFound(id))
    }

    /// Up to `limit` todos, incomplete first, then by descending priority.
    /// A `limit` of 0 means no cap; callers without a preference should pass [`DEFAULT_LIMIT`].
    pub async fn get_all(&self, limit: u64) -> StoreResult<Vec<Todo>> {
        self.query(None, limit).await
    }

    /// Same ordering as [`TodoStore::get_all`], restricted to one completion status.
    pub async fn get_by_status(&self, completed: bool, limit: u64) -> StoreResult<Vec<Todo>> {
        self.query(Some(completed), limit).await
    }

    async fn query(&self, completed: Option<bool>, limit: u64) -> StoreResult<Vec<Todo>> {
        debug!("Querying todos (completed: {:?}, limit: {})", completed, limit);
        let conn = self.open().await?;
        let result = TodoRepository::get_ordered(&conn, self.table_name(), completed, limit).await;
        release(conn).await;

        result.map_err(|e| self.db_err(e))
    }

    /// Total number of stored todos
    pub async fn count(&self) -> StoreResult<u64> {
        self.count_matching(None).await
    }

    /// Number of stored todos with the given completion status
    pub async fn count_by_status(&self, completed: bool) -> StoreResult<u64> {
        self.count_matching(Some(completed)).await
    }

    async fn count_matching(&self, completed: Option<bool>) -> StoreResult<u64> {
        let conn = self.open().await?;
        let result = TodoRepository::count(&conn, self.table_name(), completed).await;
        release(conn).await;

        result.map_err(|e| self.db_err(e))
    }

    /// Overwrite name, content, priority and completion of the todo at `id`.
    /// The id carried by `todo` is ignored.
    pub async fn update(&self, id: i64, todo: &Todo) -> StoreResult<()> {
        todo.validate()?;
        let conn = self.open().await?;
        let result = TodoRepository::update(&conn, self.table_name(), id, todo).await;
        release(conn).await;

        match result.map_err(|e| self.db_err(e))? {
            0 => Err(StoreError::NotFound(id)),
            _ => {
                debug!("Updated todo {}", id);
                Ok(())
            }
        }
    }

    /// Mark the todo at `id` as completed, leaving its other fields untouched.
    pub async fn complete(&self, id: i64) -> StoreResult<()> {
        let conn = self.open().await?;
        let result = TodoRepository::set_completed(&conn, self.table_name(), id, true).await;
        release(conn).await;

        match result.map_err(|e| self.db_err(e))? {
            0 => Err(StoreError::NotFound(id)),
            _ => {
                debug!("Completed todo {}", id);
                Ok(())
            }
        }
    }

    /// Delete the todo at `id` and return the id that was removed.
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<i64> {
        let conn = self.open().await?;
        let result = TodoRepository::delete(&conn, self.table_name(), id).await;
        release(conn).await;

        match result.map_err(|e| self.db_err(e))? {
            0 => Err(StoreError::NotFound(id)),
            _ => {
                debug!("Deleted todo {}", id);
                Ok(id)
            }
        }
    }

    /// Delete every todo and return how many were removed. Ids keep advancing afterwards.
    pub async fn delete_all(&self) -> StoreResult<u64> {
        let conn = self.open().await?;
        let result = TodoRepository::delete_all(&conn, self.table_name()).await;
        release(conn).await;

        let removed = result.map_err(|e| self.db_err(e))?;
        debug!("Deleted {} todos", removed);
        Ok(removed)
    }
}
