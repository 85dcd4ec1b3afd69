//! # navrouter
//!
//! **navrouter** is a URL-driven screen navigation library for Rust: register
//! `scheme://host/path` patterns against screen types, then resolve, present,
//! push, and pop screens using plain URL strings.
//!
//! ## Overview
//!
//! navrouter turns deep links into screens. A [`Navigator`] owns a route
//! table mapping routing keys (scheme plus host) to typed screen factories
//! and drives a pluggable navigation stack. Incoming URLs are parsed, their
//! query decoded into typed parameter objects, and the constructed screen is
//! mounted modally or by push. The whole pipeline is fail-soft: malformed
//! URLs, unknown routes, rejected parameters, and vetoed presentations all
//! degrade to `None` with a warning diagnostic, never a panic, because a
//! deep link is external input.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`router`]** - Route patterns, routing keys, and the registration table
//! - **[`params`]** - Query parsing and typed parameter objects
//! - **[`resolver`]** - The URL-to-screen construction pipeline
//! - **[`screen`]** - Screen and container traits plus presentation styles
//! - **[`navigator`]** - The coordinating facade: registration, presentation, unwinding
//! - **[`stack`]** - The navigation-stack collaborator contract and an in-memory implementation
//! - **[`ids`]** - ULID-based screen and navigation correlation ids
//! - **[`runtime_config`]** - Environment-driven runtime configuration
//!
//! ### Resolution Flow
//!
//! A URL travels through the pipeline like this:
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Navigator
//!     participant RouteTable as router::RouteTable
//!     participant Factory as resolver::RouteFactory
//!     participant Stack as stack::NavStack
//!
//!     App->>Navigator: present_url("app://profile?id=42")
//!     Navigator->>RouteTable: find(url)
//!     RouteTable->>RouteTable: Derive routing key<br/>(scheme + host)
//!     RouteTable-->>Navigator: RouteHit (factory, path values)
//!     Navigator->>Factory: construct(handle, ParamSource::Query)
//!     Factory->>Factory: Decode typed params
//!     Factory-->>Navigator: BoxedScreen
//!     Navigator->>Navigator: Anchor + delegate gate + wrap
//!     Navigator->>Stack: present_screen(entry, animated)
//!     Stack-->>Navigator: mounted
//!     Navigator-->>App: Some(ScreenId)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::any::Any;
//! use navrouter::{
//!     BoxedParams, MemoryStack, NavHandle, Navigator, PresentOptions, Screen, ScreenId,
//! };
//!
//! struct ProfileScreen {
//!     id: ScreenId,
//! }
//!
//! impl Screen for ProfileScreen {
//!     fn new(_navigator: NavHandle, _params: Option<BoxedParams>) -> Option<Self> {
//!         Some(ProfileScreen { id: ScreenId::new() })
//!     }
//!     fn id(&self) -> ScreenId {
//!         self.id
//!     }
//!     fn set_navigator(&mut self, _navigator: NavHandle) {}
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!     fn as_any_mut(&mut self) -> &mut dyn Any {
//!         self
//!     }
//! }
//!
//! let navigator = Navigator::new(MemoryStack::boxed());
//! navigator.register::<ProfileScreen>("app://profile")?;
//!
//! // Seed a root, then drive navigation with URLs.
//! navigator.push_url("app://profile", None, false);
//! let presented = navigator.present_url("app://profile?id=42", None, PresentOptions::new());
//! assert!(presented.is_some());
//! assert_eq!(navigator.depth(), 2);
//! # Ok::<(), navrouter::RegisterError>(())
//! ```
//!
//! ## Parameter Sources
//!
//! A screen's parameter object comes from exactly one place per resolution:
//! a non-empty URL query (decoded, typically via [`TypedParams`]), or a
//! caller-supplied context object passed through by identity, or nowhere.
//! Query and context are never merged; a non-empty query always shadows
//! context. Path template values (`app://user/:id`) are captured separately
//! on the resolution result and never become part of the parameter object.
//!
//! ## Performance
//!
//! Route lookup is a single hash-map probe on the routing key; path
//! templates only run against the path after the key matches. Query pairs
//! and path values live in stack-allocated [`smallvec`] vectors sized for
//! typical URLs, so resolution does not allocate for small queries. The
//! route table keeps relaxed atomic lookup/hit/miss counters that make
//! no-lookup guarantees observable in tests.
//!
//! ## Thread Safety
//!
//! [`Navigator`] is `Send + Sync` and cheap to clone; the table, stack, and
//! delegate sit behind locks. Navigation is typically driven from one
//! thread, the way a UI event loop does, but nothing breaks when it is not.

pub mod ids;
pub mod navigator;
pub mod params;
pub mod resolver;
pub mod router;
pub mod runtime_config;
pub mod screen;
pub mod stack;

pub use ids::{NavigationId, ScreenId};
pub use navigator::{NavHandle, Navigator, NavigatorDelegate, PresentOptions, RouteSet};
pub use params::{
    BoxedParams, DefaultParams, ParamSource, ParamVec, QueryMap, RouteParams, TypedParams,
};
pub use resolver::{ResolvedScreen, RouteFactory};
pub use router::{
    DuplicateRouteError, DuplicateRoutes, PatternError, RegisterError, RouteHit, RoutePattern,
    RouteTable, RoutingKey,
};
pub use runtime_config::RuntimeConfig;
pub use screen::{BoxedScreen, ContainerScreen, ContainerSpec, PresentationStyle, Screen};
pub use stack::{Completion, MemoryStack, NavStack, StackEntry};
