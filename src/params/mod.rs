//! # Parameter Module
//!
//! The parameter module provides the parameter capability for navrouter:
//! query-string storage, the contract parameter types implement, and the
//! explicit decision between the two parameter sources a resolution can use.
//!
//! ## Overview
//!
//! This module is responsible for:
//! - Parsing query strings into ordered key-value mappings ([`QueryMap`])
//! - The [`RouteParams`] contract: "construct an instance from a string-keyed,
//!   string-valued mapping"
//! - The fallback carrier [`DefaultParams`] used when a route declares no
//!   parameter type
//! - The [`ParamSource`] decision: query pairs, ambient context, or absent
//!
//! ## Parameter sources
//!
//! A resolution uses exactly one parameter source, never a merge of both:
//!
//! 1. **Query**: the URL carries one or more query pairs. The registered
//!    parameter type (or [`DefaultParams`]) is constructed from them. Ambient
//!    context is ignored even if supplied.
//! 2. **Context**: the query string is empty and the caller supplied an
//!    ambient parameter object. It is passed through as-is, by identity.
//! 3. **Absent**: neither source is usable. This is not an error; the screen
//!    constructor decides whether it can live without parameters.
//!
//! ## Example
//!
//! ```rust
//! use navrouter::params::{QueryMap, RouteParams, DefaultParams};
//!
//! let query = QueryMap::parse("id=42&tab=posts&tab=likes");
//! assert_eq!(query.get("id"), Some("42"));
//! // last write wins for duplicate keys
//! assert_eq!(query.get("tab"), Some("likes"));
//!
//! let params = DefaultParams::from_query(&query).unwrap();
//! assert_eq!(params.get("id"), Some("42"));
//! ```

mod core;
pub mod typed;

pub use core::{
    BoxedParams, DefaultParams, ParamSource, ParamVec, QueryMap, RouteParams, MAX_INLINE_PARAMS,
};
pub use typed::{decode, TypedParams};
