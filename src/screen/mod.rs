//! # Screen Module
//!
//! The screen module provides the screen capability for navrouter: the
//! contract a type implements to become navigable, plus the container
//! wrapping used by modal presentation.
//!
//! ## Overview
//!
//! This module is responsible for:
//! - The [`Screen`] contract: "construct an instance given a navigation
//!   handle and an optional parameter object"
//! - Intrinsic screen identity ([`crate::ids::ScreenId`]) used by the
//!   presenter and the pop family
//! - The [`ContainerScreen`] contract and [`ContainerSpec`] descriptor for
//!   wrap-on-present
//! - The [`PresentationStyle`] hint forwarded to the navigation stack
//!
//! ## Example
//!
//! ```rust,ignore
//! use navrouter::{NavHandle, Screen, ScreenId};
//! use navrouter::params::BoxedParams;
//! use std::any::Any;
//!
//! struct ProfileScreen {
//!     id: ScreenId,
//!     navigator: NavHandle,
//!     user_id: Option<String>,
//! }
//!
//! impl Screen for ProfileScreen {
//!     fn new(navigator: NavHandle, params: Option<BoxedParams>) -> Option<Self> {
//!         let user_id = params
//!             .as_deref()
//!             .and_then(|p| p.downcast_ref::<navrouter::DefaultParams>())
//!             .and_then(|p| p.get("id"))
//!             .map(str::to_string);
//!         Some(Self { id: ScreenId::new(), navigator, user_id })
//!     }
//!
//!     fn id(&self) -> ScreenId {
//!         self.id
//!     }
//!
//!     fn set_navigator(&mut self, navigator: NavHandle) {
//!         self.navigator = navigator;
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!
//!     fn as_any_mut(&mut self) -> &mut dyn Any {
//!         self
//!     }
//! }
//! ```

mod core;

pub use core::{BoxedScreen, ContainerScreen, ContainerSpec, PresentationStyle, Screen};
