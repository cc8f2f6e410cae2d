//! Request middleware, applied as `actix_web::middleware::from_fn` layers.
//!
//! Order from the outside in: request context (id + access log), rate limiting,
//! server error masking, and API key authentication on protected scopes.

mod auth;
mod error_handler;
mod rate_limit;
mod request_context;

pub use auth::require_api_key;
pub use error_handler::mask_server_errors;
pub use rate_limit::{enforce_rate_limit, RateLimitInfo, RateLimiter};
pub use request_context::request_context;
