//! # Router Module
//!
//! The router module provides the route registry for navrouter: pattern
//! parsing, routing-key derivation, and the keyed table that maps each key to
//! a registered payload (in practice, a route factory).
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Parsing `scheme://host/path` pattern strings at registration time
//! - Deriving the routing key `(scheme, host)` that identifies a route
//! - Storing one payload per distinct key, under a configurable duplicate
//!   policy
//! - Matching runtime URLs to entries and extracting path-template values
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: at registration, pattern strings (e.g.,
//!    `app://user/:id`) are validated and their path templates compiled into
//!    regex matchers that extract named values.
//!
//! 2. **Matching**: for each navigation event, the parsed URL's scheme and
//!    host select the entry; the entry's template then runs against the
//!    URL's path to extract values. The path never participates in entry
//!    selection, so a URL whose path does not fit the template still matches
//!    its key, just with no extracted values.
//!
//! ## Example
//!
//! ```rust,ignore
//! use navrouter::router::{DuplicateRoutes, RoutePattern, RouteTable};
//! use url::Url;
//!
//! let mut table = RouteTable::new(DuplicateRoutes::LastWins);
//! let pattern = RoutePattern::parse("app://user/:id")?;
//! table.insert(pattern, "user-factory")?;
//!
//! let url = Url::parse("app://user/42?tab=posts")?;
//! let hit = table.find(&url).unwrap();
//! assert_eq!(hit.get_value("id"), Some("42"));
//! ```
//!
//! ## Performance
//!
//! Lookup is a single hash probe on the routing key plus one regex run for
//! value extraction. The table keeps atomic lookup/hit/miss counters so hosts
//! can observe routing behavior without wrapping the calls.

mod core;

pub use core::{
    DuplicateRouteError, DuplicateRoutes, PatternError, RegisterError, RouteEntry, RouteHit,
    RoutePattern, RouteTable, RoutingKey,
};
