/// Cookie carrying the opaque visitor identifier
pub const USER_ID_COOKIE: &str = "user_id";

/// Cookie carrying the most recently searched city
pub const LAST_CITY_COOKIE: &str = "last_city";

/// Visitor cookie lifetime: 1 year
pub const USER_ID_MAX_AGE_SECS: u64 = 31_536_000;

/// Last-city cookie lifetime: 30 days
pub const LAST_CITY_MAX_AGE_SECS: u64 = 2_592_000;

/// Number of hourly forecast entries returned to the client
pub const HOURLY_WINDOW: usize = 24;

/// Minimum query length before autocomplete hits the geocoding provider
pub const AUTOCOMPLETE_MIN_QUERY_LEN: usize = 2;

/// Maximum number of autocomplete suggestions requested upstream
pub const AUTOCOMPLETE_MAX_RESULTS: u32 = 5;

/// Number of geocoding results requested when resolving a search
pub const SEARCH_GEOCODE_RESULTS: u32 = 1;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message when the geocoding provider cannot resolve a city
pub const ERR_CITY_NOT_FOUND: &str = "City not found";

/// Error message for a missing or blank city form field
pub const ERR_CITY_REQUIRED: &str = "City must not be empty";
