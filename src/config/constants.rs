//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Domain registration
// =============================================================================

/// Shortest registration period offered, in years
pub const MIN_REGISTERED_PERIOD: i32 = 1;

/// Longest registration period offered, in years
pub const MAX_REGISTERED_PERIOD: i32 = 9;

/// A registration year is a flat 365 days; expiry dates are an
/// integer-year approximation with no leap-year correction.
pub const DAYS_PER_REGISTRATION_YEAR: i64 = 365;

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length in characters (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Bearer token prefix in the Authorization header
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type returned in login responses
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Seconds per hour, for token expiry reporting
pub const SECONDS_PER_HOUR: i64 = 3600;

// =============================================================================
// Server defaults
// =============================================================================

/// Default database connection string
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/registrar";

/// Default host to bind the HTTP server to
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default port for the HTTP server
pub const DEFAULT_SERVER_PORT: u16 = 3000;
