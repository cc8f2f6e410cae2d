//! Constants shared across the gateway.

/// Header carrying the client API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Rate limit headers
pub const RATE_LIMIT_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

/// Chain id used by prepare-tx when the request names none
pub const PREPARE_TX_DEFAULT_CHAIN_ID: &str = "1";

/// Message returned in place of 5xx details in production
pub const GENERIC_ERROR_MESSAGE: &str = "Internal server error";
