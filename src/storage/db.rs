use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions;
use sea_orm::{DatabaseConnection, DbErr, SqlxSqliteConnector};

use super::error::{StoreError, StoreResult};
use crate::repositories::TodoRepository;

/// Local todo store: one table inside one SQLite file.
///
/// Every operation opens its own connection and closes it before returning.
/// Nothing is shared between calls, so concurrent writers from separate
/// processes are serialized by SQLite's file locking, not by this type.
#[derive(Debug, Clone)]
pub struct TodoStore {
    location: PathBuf,
    table: String,
}

impl TodoStore {
    pub fn new(location: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            table: table.into(),
        }
    }

    /// Path of the database file
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Create the database file, its parent directory and the todo table if
    /// they are missing. Returns `true` when the table was created by this call.
    pub async fn initialize(&self) -> StoreResult<bool> {
        if let Some(parent) = self.location.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let conn = self.connect(true).await?;
        let result: Result<bool, DbErr> = async {
            let existed = TodoRepository::table_exists(&conn, &self.table).await?;
            TodoRepository::create_table(&conn, &self.table).await?;
            Ok(!existed)
        }
        .await;
        release(conn).await;

        let created = result?;
        if created {
            info!("Created table {} in {}", self.table, self.location.display());
        } else {
            debug!("Table {} already present in {}", self.table, self.location.display());
        }
        Ok(created)
    }

    /// Remove the database file. Returns `false` when there was nothing to remove.
    pub async fn destroy(&self) -> StoreResult<bool> {
        match tokio::fs::remove_file(&self.location).await {
            Ok(()) => {
                info!("Removed todo store {}", self.location.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Open a connection to an existing store.
    pub(crate) async fn open(&self) -> StoreResult<DatabaseConnection> {
        if !self.location.exists() {
            return Err(self.not_initialized());
        }
        self.connect(false).await
    }

    /// The location is handed to sqlx as a file name, never as a URL, so
    /// characters such as `%` or `?` in the path are taken literally.
    async fn connect(&self, create: bool) -> StoreResult<DatabaseConnection> {
        let options = SqliteConnectOptions::new()
            .filename(&self.location)
            .create_if_missing(create)
            .disable_statement_logging();

        debug!("Opening {}", self.location.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;
        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    pub(crate) fn not_initialized(&self) -> StoreError {
        StoreError::NotInitialized {
            location: self.location.clone(),
        }
    }

    /// Map an engine error for this store
    pub(crate) fn db_err(&self, err: DbErr) -> StoreError {
        StoreError::from_db(err, &self.location)
    }
}

/// Close a connection, logging rather than failing if the close itself errors
pub(crate) async fn release(conn: DatabaseConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection: {}", e);
    }
}
