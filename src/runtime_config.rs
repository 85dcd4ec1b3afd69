//! # Runtime Configuration Module
//!
//! The runtime configuration module provides environment variable-based
//! configuration for navrouter's runtime behavior.
//!
//! ## Overview
//!
//! This module loads configuration from environment variables that affect:
//! - Duplicate route registration policy
//! - The default animation flag applied when a caller leaves it unset
//!
//! ## Environment Variables
//!
//! ### `NAVR_DUPLICATE_ROUTES`
//!
//! Controls what happens when two registrations produce the same routing key
//! (scheme + host). Accepted values:
//! - `last_wins` - the later registration silently replaces the earlier one
//!   (a warning diagnostic is emitted)
//! - `reject` - the later registration fails with a duplicate-route error
//!
//! Default: `last_wins`
//!
//! ### `NAVR_DEFAULT_ANIMATED`
//!
//! Whether presentations are animated when the caller does not specify the
//! flag explicitly. Accepts `1`/`true`/`on` and `0`/`false`/`off`.
//!
//! Default: `true`
//!
//! ## Usage
//!
//! ```rust
//! use navrouter::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("duplicate routes: {:?}", config.duplicate_routes);
//! ```

use crate::router::DuplicateRoutes;
use std::env;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`], or build one by
/// hand and pass it to `Navigator::with_config` when env-driven behavior is
/// not wanted (e.g., in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Policy applied when a registration collides with an existing routing key
    pub duplicate_routes: DuplicateRoutes,
    /// Animation flag used when a caller leaves `animated` unset
    pub default_animated: bool,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let duplicate_routes = match env::var("NAVR_DUPLICATE_ROUTES") {
            Ok(val) if val.eq_ignore_ascii_case("reject") => DuplicateRoutes::Reject,
            _ => DuplicateRoutes::LastWins,
        };
        let default_animated = match env::var("NAVR_DEFAULT_ANIMATED") {
            Ok(val) => !matches!(val.to_ascii_lowercase().as_str(), "0" | "false" | "off"),
            Err(_) => true,
        };
        RuntimeConfig {
            duplicate_routes,
            default_animated,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            duplicate_routes: DuplicateRoutes::LastWins,
            default_animated: true,
        }
    }
}
