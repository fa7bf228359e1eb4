/// Earliest year the API accepts
pub const MIN_YEAR: i32 = 2000;

/// Latest year the API accepts
pub const MAX_YEAR: i32 = 2100;

/// Lifetime of a cached aggregation, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Maximum number of cached years
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 100;

/// Per-source fetch timeout, in milliseconds
pub const DEFAULT_SOURCE_TIMEOUT_MS: u64 = 30_000;

/// Date format accepted by date lookups
pub const DATE_FORMAT: &str = "%Y-%m-%d";
