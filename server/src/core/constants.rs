// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "EvGrid";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "evgrid";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".evgrid";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "evgrid.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "EVGRID_CONFIG";

// =============================================================================
// Environment Variables - Debug
// =============================================================================

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "EVGRID_DEBUG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "EVGRID_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "EVGRID_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "EVGRID_LOG";

/// Environment variable for allowed CORS origins (comma-separated)
pub const ENV_CORS_ORIGINS: &str = "EVGRID_CORS_ORIGINS";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5000;

/// Default request body limit (1MB)
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "EVGRID_DATA_DIR";

/// Environment variable for the database backend (`sqlite` or `memory`)
pub const ENV_BACKEND: &str = "EVGRID_BACKEND";

/// Environment variable for an explicit SQLite database file
pub const ENV_DATABASE_PATH: &str = "EVGRID_DATABASE_PATH";

/// Environment variable for the CSV imported into an empty database
pub const ENV_SEED_CSV: &str = "EVGRID_SEED_CSV";

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "evgrid.db";

/// SQLite connection pool max connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 8;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -16000 = 16MB)
pub const SQLITE_CACHE_SIZE: &str = "-16000";

/// SQLite WAL auto-checkpoint threshold (pages, ~4MB at 1000)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// WAL checkpoint interval in seconds (5 minutes)
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Car Filters
// =============================================================================

/// Maximum size of the raw `filters` query parameter (64KB)
pub const MAX_FILTER_JSON_SIZE: usize = 64 * 1024;

/// Maximum number of filters in one request
pub const MAX_FILTERS: usize = 50;

/// Maximum length of the search term
pub const MAX_SEARCH_LEN: u64 = 200;

// =============================================================================
// Shutdown
// =============================================================================

/// Time to wait for background tasks during shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
