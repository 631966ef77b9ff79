//! Data storage layer
//!
//! Provides database services for the application:
//! - `filters` - Car filter query builder (validation, SQL, in-memory evaluation)
//! - `sqlite` - Embedded SQLite backend (default)
//! - `memory` - Non-persistent in-memory backend
//! - `types` - Shared data types across all backends
//! - `traits` - Repository trait for multi-backend support
//! - `error` - Unified error type for all backends

pub mod error;
pub mod filters;
pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;

#[cfg(test)]
mod parity_tests;

pub use error::DataError;
pub use memory::MemoryStore;
pub use sqlite::SqliteService;
pub use traits::CarRepository;

use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::config::DatabaseBackend;

/// Database service enum
///
/// Wraps the configured backend. Services are stored as Arc so repository
/// handles can be cloned cheaply into request handlers.
pub enum DatabaseService {
    /// SQLite backend (default, persistent)
    Sqlite(Arc<SqliteService>),
    /// In-memory backend (non-persistent)
    Memory(Arc<MemoryStore>),
}

impl DatabaseService {
    /// Initialize the database service based on configuration
    ///
    /// `db_path` is only used by the SQLite backend.
    pub async fn init(backend: DatabaseBackend, db_path: &Path) -> Result<Self, DataError> {
        match backend {
            DatabaseBackend::Sqlite => {
                let service = SqliteService::init(db_path).await?;
                Ok(Self::Sqlite(Arc::new(service)))
            }
            DatabaseBackend::Memory => Ok(Self::memory()),
        }
    }

    /// Empty in-memory database
    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    /// Run a WAL checkpoint (no-op for the memory backend)
    pub async fn checkpoint(&self) -> Result<(), DataError> {
        match self {
            Self::Sqlite(s) => s.checkpoint().await.map_err(Into::into),
            Self::Memory(_) => Ok(()),
        }
    }

    /// Close the database gracefully
    pub async fn close(&self) {
        match self {
            Self::Sqlite(s) => s.close().await,
            Self::Memory(_) => tracing::debug!("Memory store dropped"),
        }
    }

    /// Start the background checkpoint task (SQLite only)
    pub fn start_checkpoint_task(
        &self,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Option<JoinHandle<()>> {
        match self {
            Self::Sqlite(s) => Some(s.start_checkpoint_task(shutdown_rx)),
            Self::Memory(_) => None,
        }
    }

    pub fn backend(&self) -> DatabaseBackend {
        match self {
            Self::Sqlite(_) => DatabaseBackend::Sqlite,
            Self::Memory(_) => DatabaseBackend::Memory,
        }
    }

    /// Get the repository trait object for data operations
    pub fn repository(&self) -> Arc<dyn CarRepository> {
        match self {
            Self::Sqlite(s) => Arc::new(Arc::clone(s)),
            Self::Memory(m) => Arc::clone(m) as Arc<dyn CarRepository>,
        }
    }
}
