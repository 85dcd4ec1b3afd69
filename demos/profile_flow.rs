//! Deep-link walkthrough: register routes, then drive the navigator with URL
//! strings the way a host application would.
//!
//! Run with:
//! ```bash
//! cargo run --example profile_flow
//! ```

use std::any::Any;
use std::sync::Arc;

use navrouter::{
    BoxedParams, BoxedScreen, ContainerScreen, MemoryStack, NavHandle, Navigator,
    NavigatorDelegate, PresentOptions, PresentationStyle, RouteSet, RuntimeConfig, Screen,
    ScreenId, TypedParams,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProfileParams {
    id: String,
    tab: Option<String>,
}

struct HomeScreen {
    id: ScreenId,
}

impl Screen for HomeScreen {
    fn new(_navigator: NavHandle, _params: Option<BoxedParams>) -> Option<Self> {
        println!("[home] constructed");
        Some(HomeScreen { id: ScreenId::new() })
    }

    fn id(&self) -> ScreenId {
        self.id
    }

    fn set_navigator(&mut self, _navigator: NavHandle) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct ProfileScreen {
    id: ScreenId,
}

impl Screen for ProfileScreen {
    fn new(_navigator: NavHandle, params: Option<BoxedParams>) -> Option<Self> {
        if let Some(profile) = params
            .as_deref()
            .and_then(|p| p.downcast_ref::<TypedParams<ProfileParams>>())
        {
            println!("[profile] constructed for id={} tab={:?}", profile.id, profile.tab);
        } else {
            println!("[profile] constructed without parameters");
        }
        Some(ProfileScreen { id: ScreenId::new() })
    }

    fn id(&self) -> ScreenId {
        self.id
    }

    fn set_navigator(&mut self, _navigator: NavHandle) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Stand-in for a platform navigation controller.
struct NavContainer {
    id: ScreenId,
    root: BoxedScreen,
}

impl Screen for NavContainer {
    fn new(_navigator: NavHandle, _params: Option<BoxedParams>) -> Option<Self> {
        None
    }

    fn id(&self) -> ScreenId {
        self.id
    }

    fn set_navigator(&mut self, _navigator: NavHandle) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ContainerScreen for NavContainer {
    fn wrap(root: BoxedScreen) -> Option<Self> {
        Some(NavContainer {
            id: ScreenId::new(),
            root,
        })
    }
}

struct AuditDelegate;

impl NavigatorDelegate for AuditDelegate {
    fn should_present(&self, _screen: &dyn Screen, from: ScreenId) -> bool {
        println!("[delegate] allowing presentation over {from}");
        true
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("navrouter=debug")),
        )
        .init();

    let navigator = Navigator::with_config(MemoryStack::boxed(), RuntimeConfig::default());
    navigator.set_delegate(Arc::new(AuditDelegate));

    navigator
        .register_routes(
            RouteSet::new()
                .route::<HomeScreen>("app://home")
                .route_with_params::<ProfileScreen, TypedParams<ProfileParams>>("app://profile"),
        )
        .expect("route patterns are valid");

    let root = navigator
        .push_url("app://home", None, false)
        .expect("home route is registered");
    println!("mounted root {root}");

    // Deep link with a typed query, wrapped like a modal flow.
    if let Some(id) = navigator.present_url(
        "app://profile?id=42&tab=posts",
        None,
        PresentOptions::new()
            .wrap_in::<NavContainer>()
            .style(PresentationStyle::Sheet),
    ) {
        println!("presented profile {id}, depth now {}", navigator.depth());
    }

    // Malformed and unknown links degrade to nothing.
    assert!(navigator.resolve("not a url").is_none());
    assert!(navigator.resolve("app://payments").is_none());
    println!(
        "lookups: {} ({} hits, {} misses)",
        navigator.lookup_count(),
        navigator.hit_count(),
        navigator.miss_count()
    );

    // Unwind the modal; the mounted entry is the wrapper.
    if let Some(popped) = navigator.pop(true) {
        if let Some(container) = popped.downcast_ref::<NavContainer>() {
            println!("popped container around {}", container.root.id());
        }
    }
    println!(
        "back on {:?}, depth {}",
        navigator.top(),
        navigator.depth()
    );
}
