//! Todo repository for database operations.
//!
//! The table name is chosen at runtime, so statements are built with
//! `sea_query` against an [`Alias`] rather than through a derived entity.

use sea_orm::sea_query::{
    Alias, Asterisk, ColumnDef, Expr, Func, Order, Query, SelectStatement, Table, TableCreateStatement,
};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, DeriveIden, FromQueryResult, Statement};

use crate::entities::todo::{NewTodo, Todo, DEFAULT_PRIORITY};

/// Column identifiers of the todo table
#[derive(DeriveIden, Clone, Copy, Debug)]
pub enum TodoColumn {
    Id,
    Name,
    Content,
    Priority,
    Completed,
}

const ALL_COLUMNS: [TodoColumn; 5] = [
    TodoColumn::Id,
    TodoColumn::Name,
    TodoColumn::Content,
    TodoColumn::Priority,
    TodoColumn::Completed,
];

/// Repository for todo table operations on an already open connection.
pub struct TodoRepository;

impl TodoRepository {
    /// Schema of the todo table. `AUTOINCREMENT` keeps ids from being reused after deletes.
    pub fn create_table_statement(table: &str) -> TableCreateStatement {
        Table::create()
            .table(Alias::new(table))
            .if_not_exists()
            .col(
                ColumnDef::new(TodoColumn::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(TodoColumn::Name).text().not_null())
            .col(ColumnDef::new(TodoColumn::Content).text().not_null().default(""))
            .col(
                ColumnDef::new(TodoColumn::Priority)
                    .integer()
                    .not_null()
                    .default(DEFAULT_PRIORITY),
            )
            .col(ColumnDef::new(TodoColumn::Completed).integer().not_null().default(0))
            .to_owned()
    }

    /// Whether the todo table exists in the connected database
    pub async fn table_exists<C>(conn: &C, table: &str) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
            [table.into()],
        );
        Ok(conn.query_one(stmt).await?.is_some())
    }

    /// Create the table if it does not exist yet
    pub async fn create_table<C>(conn: &C, table: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let backend = conn.get_database_backend();
        conn.execute(backend.build(&Self::create_table_statement(table)))
            .await?;
        Ok(())
    }

    /// Insert a todo and return the id assigned by the database.
    pub async fn insert<C>(conn: &C, table: &str, todo: &NewTodo) -> Result<i64, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Query::insert()
            .into_table(Alias::new(table))
            .columns([
                TodoColumn::Name,
                TodoColumn::Content,
                TodoColumn::Priority,
                TodoColumn::Completed,
            ])
            .values([
                todo.name.as_str().into(),
                todo.content.as_str().into(),
                todo.priority.into(),
                todo.completed.into(),
            ])
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_owned();

        let backend = conn.get_database_backend();
        let result = conn.execute(backend.build(&stmt)).await?;
        i64::try_from(result.last_insert_id()).map_err(|e| DbErr::Custom(e.to_string()))
    }

    /// Get a single todo by id.
    pub async fn get_by_id<C>(conn: &C, table: &str, id: i64) -> Result<Option<Todo>, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Self::select(table)
            .and_where(Expr::col(TodoColumn::Id).eq(id))
            .to_owned();
        let backend = conn.get_database_backend();
        Todo::find_by_statement(backend.build(&stmt)).one(conn).await
    }

    /// Get todos ordered by completion status then priority, optionally
    /// filtered by completion status. A `limit` of 0 means no cap.
    pub async fn get_ordered<C>(
        conn: &C,
        table: &str,
        completed: Option<bool>,
        limit: u64,
    ) -> Result<Vec<Todo>, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Self::ordered_query(table, completed, limit);
        let backend = conn.get_database_backend();
        Todo::find_by_statement(backend.build(&stmt)).all(conn).await
    }

    /// Count rows, optionally restricted to one completion status.
    pub async fn count<C>(conn: &C, table: &str, completed: Option<bool>) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut stmt = Query::select()
            .expr_as(Func::count(Expr::col(Asterisk)), Alias::new("total"))
            .from(Alias::new(table))
            .to_owned();
        if let Some(completed) = completed {
            stmt.and_where(Expr::col(TodoColumn::Completed).eq(completed));
        }

        let backend = conn.get_database_backend();
        let total: i64 = match conn.query_one(backend.build(&stmt)).await? {
            Some(row) => row.try_get("", "total")?,
            None => 0,
        };
        u64::try_from(total).map_err(|e| DbErr::Custom(e.to_string()))
    }

    /// Overwrite every mutable field of the row at `id`. Returns the number of rows touched.
    pub async fn update<C>(conn: &C, table: &str, id: i64, todo: &Todo) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Query::update()
            .table(Alias::new(table))
            .values([
                (TodoColumn::Name, todo.name.as_str().into()),
                (TodoColumn::Content, todo.content.as_str().into()),
                (TodoColumn::Priority, todo.priority.into()),
                (TodoColumn::Completed, todo.completed.into()),
            ])
            .and_where(Expr::col(TodoColumn::Id).eq(id))
            .to_owned();

        let backend = conn.get_database_backend();
        Ok(conn.execute(backend.build(&stmt)).await?.rows_affected())
    }

    /// Set the completion flag of the row at `id`, leaving everything else alone.
    pub async fn set_completed<C>(conn: &C, table: &str, id: i64, completed: bool) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Query::update()
            .table(Alias::new(table))
            .value(TodoColumn::Completed, completed)
            .and_where(Expr::col(TodoColumn::Id).eq(id))
            .to_owned();

        let backend = conn.get_database_backend();
        Ok(conn.execute(backend.build(&stmt)).await?.rows_affected())
    }

    /// Delete the row at `id`. Returns the number of rows removed.
    pub async fn delete<C>(conn: &C, table: &str, id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Query::delete()
            .from_table(Alias::new(table))
            .and_where(Expr::col(TodoColumn::Id).eq(id))
            .to_owned();

        let backend = conn.get_database_backend();
        Ok(conn.execute(backend.build(&stmt)).await?.rows_affected())
    }

    /// Delete every row. The autoincrement counter is left alone.
    pub async fn delete_all<C>(conn: &C, table: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Query::delete().from_table(Alias::new(table)).to_owned();
        let backend = conn.get_database_backend();
        Ok(conn.execute(backend.build(&stmt)).await?.rows_affected())
    }

    fn select(table: &str) -> SelectStatement {
        Query::select().columns(ALL_COLUMNS).from(Alias::new(table)).to_owned()
    }

    /// Query used by the list views: incomplete and urgent first.
    pub fn ordered_query(table: &str, completed: Option<bool>, limit: u64) -> SelectStatement {
        let mut stmt = Self::select(table);
        if let Some(completed) = completed {
            stmt.and_where(Expr::col(TodoColumn::Completed).eq(completed));
        }
        stmt.order_by(TodoColumn::Completed, Order::Asc)
            .order_by(TodoColumn::Priority, Order::Desc);
        // SQLite binds LIMIT as a signed 64-bit integer
        if limit > 0 {
            stmt.limit(limit.min(i64::MAX as u64));
        }
        stmt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::SqliteQueryBuilder;

    #[test]
    fn test_create_table_uses_autoincrement() {
        let sql = TodoRepository::create_table_statement("todo").to_string(SqliteQueryBuilder);
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"todo\""));
        assert!(sql.contains("AUTOINCREMENT"));
        assert!(sql.contains("\"completed\""));
    }

    #[test]
    fn test_ordered_query_with_filter_and_limit() {
        let sql = TodoRepository::ordered_query("todo", Some(false), 10).to_string(SqliteQueryBuilder);
        assert!(sql.contains("WHERE \"completed\" = FALSE") || sql.contains("WHERE \"completed\" = 0"));
        assert!(sql.contains("ORDER BY \"completed\" ASC, \"priority\" DESC"));
        assert!(sql.ends_with("LIMIT 10"));
    }

    #[test]
    fn test_ordered_query_without_cap() {
        let sql = TodoRepository::ordered_query("todo", None, 0).to_string(SqliteQueryBuilder);
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn test_oversized_limit_is_capped() {
        let sql = TodoRepository::ordered_query("todo", None, u64::MAX).to_string(SqliteQueryBuilder);
        assert!(sql.ends_with(&format!("LIMIT {}", i64::MAX)));
    }

    #[test]
    fn test_table_name_is_quoted() {
        let sql = TodoRepository::ordered_query("my todos", None, 0).to_string(SqliteQueryBuilder);
        assert!(sql.contains("FROM \"my todos\""));
    }
}
