//! Error types for the plan synthesis engine.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between selecting tasks and rendering a plan.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Plan generation was requested with no selected tasks
    #[error("Nothing to plan: select at least one task first")]
    EmptyPlan,
    /// Persisted selection data is unavailable or malformed
    #[error("Failed to read persisted value '{key}': {reason}")]
    PersistenceRead { key: String, reason: String },
    /// Persisting the selection failed
    #[error("Failed to persist value '{key}': {reason}")]
    PersistenceWrite { key: String, reason: String },
    /// The SQLite backend rejected an operation
    #[error("Storage error: {context}")]
    Storage {
        context: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No catalog task has this id
    #[error("Unknown task '{id}'")]
    TaskNotFound { id: String },
    /// A catalog entry is missing a required field or clashes with another
    #[error("Invalid catalog entry, field '{field}': {reason}")]
    InvalidTask { field: String, reason: String },
    /// A catalog is not a JSON array of task records
    #[error("Malformed catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),
    /// Reading a catalog or preparing the database directory failed
    #[error("Cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// No data directory could be determined for the default database
    #[error("Cannot locate data directory: {0}")]
    DataDirectory(String),
}

impl PlannerError {
    /// Creates a catalog validation error.
    pub fn invalid_task(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTask {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an I/O error tied to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a read error for a persisted key.
    pub fn persistence_read(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::PersistenceRead {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a write error for a persisted key.
    pub fn persistence_write(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error is a user-facing validation failure rather than a
    /// fault.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyPlan | Self::InvalidTask { .. } | Self::TaskNotFound { .. }
        )
    }
}

/// Attaches context to SQLite results.
pub trait StorageResultExt<T> {
    fn storage_context(self, context: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, context: &str) -> Result<T> {
        self.map_err(|source| PlannerError::Storage {
            context: context.to_string(),
            source,
        })
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PlannerError>;
