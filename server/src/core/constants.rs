// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "qparser";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".qparser";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "qparser.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "QPARSER_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "QPARSER_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "QPARSER_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "QPARSER_LOG";

/// Environment variable for the SQLite connection URL
pub const ENV_DATABASE_URL: &str = "QPARSER_DATABASE_URL";

/// Environment variable for the maximum page size
pub const ENV_MAX_LIMIT: &str = "QPARSER_MAX_LIMIT";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5390;

/// Default SQLite database URL
pub const DEFAULT_DATABASE_URL: &str = "sqlite://qparser.db";

// =============================================================================
// Query Defaults
// =============================================================================

/// Limit applied when a request does not ask for one
pub const DEFAULT_PAGE_LIMIT: u64 = 50;

/// Upper bound for requested limits
pub const DEFAULT_MAX_LIMIT: u64 = 500;

// =============================================================================
// SQLite
// =============================================================================

pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// Shutdown
// =============================================================================

/// Maximum time to wait for in-flight work during shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;
