//! # Screen Resolution Module
//!
//! Resolution turns a URL string into a constructed, navigator-aware screen.
//! It is the read side of the route table: registration stores a
//! [`RouteFactory`] per routing key, and [`resolve`] walks the pipeline that
//! invokes it.
//!
//! ## Pipeline
//!
//! 1. Parse the URL. Malformed input is rejected here, before the route
//!    table is consulted.
//! 2. Look up the routing key (scheme plus host) in the table.
//! 3. Collect query parameters and pick the parameter source: a non-empty
//!    query wins, otherwise caller-supplied context, otherwise nothing.
//! 4. Invoke the registered factory to build the parameter object and the
//!    screen.
//! 5. Inject the navigation handle into the screen.
//!
//! Every step is fail-soft: a failure logs a warning with the navigation id
//! and yields `None`, leaving the navigator free to fall back to other
//! behavior.
//!
//! ## Example
//!
//! ```rust,ignore
//! let table: RouteTable<RouteFactory> = RouteTable::new();
//! // ... register factories via the navigator ...
//! let resolved = resolver::resolve(&table, handle, "app://profile?id=42", None);
//! if let Some(resolved) = resolved {
//!     println!("built screen {}", resolved.screen.id());
//! }
//! ```

mod core;


pub use core::{factory_for, resolve, ResolvedScreen, RouteFactory};
