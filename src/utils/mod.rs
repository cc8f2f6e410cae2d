//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - constants: Constants for the application
//! - http: Construction of the shared upstream HTTP client
//! - logging: Logging utilities
//! - metrics: Metrics utilities

pub mod constants;
pub mod http;
pub mod logging;
pub mod metrics;

pub use constants::*;
