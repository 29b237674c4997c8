use std::path::PathBuf;

use sea_orm::DbErr;

/// Errors raised by store operations.
///
/// Nothing here is retried: local file errors are not expected to be transient.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file or the todo table does not exist yet
    #[error("todo store at {} is not initialized, run `todo init` first", location.display())]
    NotInitialized { location: PathBuf },

    #[error("no todo with id {0}")]
    NotFound(i64),

    /// I/O level failure opening or writing the store
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("invalid todo: {0}")]
    Validation(String),
}

impl StoreError {
    /// Errors the user can act on, as opposed to fatal storage faults
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::StorageUnavailable(_))
    }

    /// Map an engine error, recognising the "missing table" case
    pub(crate) fn from_db(err: DbErr, location: &std::path::Path) -> Self {
        if is_missing_table(&err) {
            Self::NotInitialized {
                location: location.to_path_buf(),
            }
        } else {
            Self::StorageUnavailable(err.to_string())
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

fn is_missing_table(err: &DbErr) -> bool {
    err.to_string().contains("no such table")
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_missing_table_maps_to_not_initialized() {
        let err = DbErr::Custom("error returned from database: no such table: todo".to_string());
        let mapped = StoreError::from_db(err, Path::new("/tmp/todo.db"));
        assert!(matches!(mapped, StoreError::NotInitialized { .. }));
    }

    #[test]
    fn test_other_errors_are_storage_unavailable() {
        let err = DbErr::Custom("disk I/O error".to_string());
        let mapped = StoreError::from_db(err, Path::new("/tmp/todo.db"));
        assert!(matches!(mapped, StoreError::StorageUnavailable(_)));
        assert!(!mapped.is_user_error());
    }

    #[test]
    fn test_user_errors() {
        assert!(StoreError::NotFound(3).is_user_error());
        assert!(StoreError::Validation("empty".to_string()).is_user_error());
        assert_eq!(StoreError::NotFound(3).to_string(), "no todo with id 3");
    }
}
