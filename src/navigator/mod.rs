//! # Navigator Module
//!
//! The navigator is the coordinating facade of the crate: it owns the route
//! table, drives URL resolution, and presents the resulting screens onto a
//! [`NavStack`](crate::stack::NavStack) collaborator.
//!
//! ## Overview
//!
//! A [`Navigator`] is created around a stack implementation, routes are
//! registered against it, and from then on navigation is URL-driven:
//!
//! - **Registration** binds a `scheme://host/path` pattern to a screen type
//!   (optionally with a typed parameter object).
//! - **Resolution** turns a URL string plus optional caller context into a
//!   constructed screen with the navigation handle injected.
//! - **Presentation** mounts screens modally (with optional container
//!   wrapping and a delegate gate) or by push, and unwinds them with the pop
//!   family.
//!
//! Every navigation operation is fail-soft: failures are reported through
//! `Option`/empty returns and warning diagnostics, never panics, so a bad
//! deep link degrades to "nothing happened".
//!
//! ## Architecture
//!
//! The presentation pipeline runs these steps in order:
//!
//! 1. Resolve the URL (URL-driven entry points only).
//! 2. Determine the anchor: the caller-supplied screen id, or else the
//!    current stack top. No anchor means no presentation.
//! 3. Consult the delegate with the *originally resolved* screen and the
//!    anchor. A `false` veto abandons the attempt with the stack untouched.
//! 4. Wrap the screen in a container when one is requested and the screen is
//!    not already of that container type.
//! 5. Hand the mounted entry to the stack and report the root screen's id
//!    back to the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use navrouter::navigator::{Navigator, PresentOptions};
//! use navrouter::stack::MemoryStack;
//!
//! let navigator = Navigator::new(MemoryStack::boxed());
//! navigator.register::<HomeScreen>("app://home")?;
//! navigator.register_with_params::<ProfileScreen, TypedParams<ProfileParams>>(
//!     "app://profile",
//! )?;
//!
//! // Seed the root, then navigate by URL.
//! navigator.push_url("app://home", None, false);
//! navigator.present_url("app://profile?id=42", None, PresentOptions::new());
//! ```
//!
//! ## Thread Safety
//!
//! The route table, stack, and delegate sit behind locks, so a `Navigator`
//! can be shared across threads. Delegate callbacks run with no internal
//! lock held, so a delegate may call back into the navigator from its gate
//! methods. Screen constructors run under a read lock on the route table:
//! resolving concurrently is fine, registering routes from inside a
//! constructor is not supported.

mod core;


pub use core::{NavHandle, Navigator, NavigatorDelegate, PresentOptions, RouteSet};
