//! Platform-aware data storage directory management
//!
//! ## Platform Paths
//!
//! | Type | Windows | macOS | Linux |
//! |------|---------|-------|-------|
//! | Data | `%APPDATA%\EvGrid\` | `~/Library/Application Support/EvGrid/` | `$XDG_DATA_HOME/evgrid/` |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::config::{AppConfig, DatabaseBackend};
use super::constants::{APP_DOT_FOLDER, APP_NAME, ENV_DATA_DIR, SQLITE_DB_FILENAME};
use crate::utils::file::expand_path;

/// Data subdirectories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSubdir {
    Sqlite,
}

impl DataSubdir {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataSubdir::Sqlite => "sqlite",
        }
    }
}

/// Application storage manager
#[derive(Debug, Clone)]
pub struct AppStorage {
    data_dir: PathBuf,
}

impl AppStorage {
    /// Initialize storage with platform-appropriate data directory
    ///
    /// The sqlite subdirectory is only created when that backend is in use
    /// and no explicit database path was given.
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let data_dir = Self::resolve_data_dir();

        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        if config.database.backend == DatabaseBackend::Sqlite && config.database.path.is_none() {
            let path = data_dir.join(DataSubdir::Sqlite.as_str());
            tokio::fs::create_dir_all(&path)
                .await
                .with_context(|| format!("Failed to create sqlite directory: {}", path.display()))?;
        }

        // Canonicalize requires the path to exist
        let data_dir = data_dir.canonicalize().unwrap_or(data_dir);
        tracing::debug!(data_dir = %data_dir.display(), "Storage initialized");

        Ok(Self { data_dir })
    }

    /// Resolve data directory from env var or platform default
    pub fn resolve_data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            return expand_path(&dir);
        }

        if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            return proj_dirs.data_dir().to_path_buf();
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        cwd.join(APP_DOT_FOLDER)
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to a file within a subdirectory
    pub fn subdir_path(&self, subdir: DataSubdir, filename: &str) -> PathBuf {
        self.data_dir.join(subdir.as_str()).join(filename)
    }

    /// SQLite database file: the configured path or `<data_dir>/sqlite/evgrid.db`
    pub fn database_path(&self, config: &AppConfig) -> PathBuf {
        config
            .database
            .path
            .clone()
            .unwrap_or_else(|| self.subdir_path(DataSubdir::Sqlite, SQLITE_DB_FILENAME))
    }

    /// Create AppStorage for testing with a specific data directory
    #[cfg(test)]
    pub fn init_for_test(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DatabaseConfig, ServerConfig};

    fn config(path: Option<PathBuf>) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                cors_origins: Vec::new(),
            },
            database: DatabaseConfig {
                backend: DatabaseBackend::Sqlite,
                path,
                seed_csv: None,
            },
            debug: false,
        }
    }

    #[test]
    fn test_data_subdir_as_str() {
        assert_eq!(DataSubdir::Sqlite.as_str(), "sqlite");
    }

    #[test]
    fn test_database_path_default() {
        let storage = AppStorage::init_for_test(PathBuf::from("/data"));
        assert_eq!(
            storage.database_path(&config(None)),
            PathBuf::from("/data/sqlite/evgrid.db")
        );
    }

    #[test]
    fn test_database_path_override() {
        let storage = AppStorage::init_for_test(PathBuf::from("/data"));
        let custom = PathBuf::from("/srv/cars.db");
        assert_eq!(storage.database_path(&config(Some(custom.clone()))), custom);
    }

    #[test]
    fn test_resolve_data_dir_non_empty() {
        let path = AppStorage::resolve_data_dir();
        assert!(!path.as_os_str().is_empty());
    }
}
