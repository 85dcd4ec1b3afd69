use std::fmt;
use std::sync::{Arc, Mutex, RwLock, Weak};

use tracing::{debug, info, warn};

use crate::ids::ScreenId;
use crate::params::{BoxedParams, DefaultParams, RouteParams};
use crate::resolver::{factory_for, RouteFactory};
use crate::router::{RegisterError, RoutePattern, RouteTable};
use crate::runtime_config::RuntimeConfig;
use crate::screen::{BoxedScreen, ContainerScreen, ContainerSpec, PresentationStyle, Screen};
use crate::stack::{Completion, NavStack, StackEntry};

/// Hook for vetoing navigation before the stack is touched.
///
/// Both methods default to allowing the operation, so a delegate only
/// overrides the gates it cares about.
pub trait NavigatorDelegate: Send + Sync {
    /// Gate modal presentation. `screen` is the originally resolved screen,
    /// never the wrapping container; `from` is the anchor it would be
    /// presented over.
    fn should_present(&self, screen: &dyn Screen, from: ScreenId) -> bool {
        let _ = (screen, from);
        true
    }

    /// Gate push navigation.
    fn should_push(&self, screen: &dyn Screen) -> bool {
        let _ = screen;
        true
    }
}

/// Options for a modal presentation.
///
/// Consuming builder; the zero-configuration default presents unwrapped,
/// with the default style, anchored on the current stack top, animated per
/// the runtime configuration.
#[derive(Default)]
pub struct PresentOptions {
    style: PresentationStyle,
    wrap: Option<ContainerSpec>,
    from: Option<ScreenId>,
    animated: Option<bool>,
    completion: Option<Completion>,
}

impl PresentOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presentation style recorded on the mounted entry (the wrapper when
    /// wrapping applies).
    #[must_use]
    pub fn style(mut self, style: PresentationStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap the screen in this container before mounting, unless it already
    /// is one.
    #[must_use]
    pub fn wrap(mut self, spec: ContainerSpec) -> Self {
        self.wrap = Some(spec);
        self
    }

    /// Shorthand for [`PresentOptions::wrap`] with a container type.
    #[must_use]
    pub fn wrap_in<C: ContainerScreen>(self) -> Self {
        self.wrap(ContainerSpec::of::<C>())
    }

    /// Present over this screen instead of the stack top.
    #[must_use]
    pub fn from_screen(mut self, from: ScreenId) -> Self {
        self.from = Some(from);
        self
    }

    /// Override the runtime configuration's default animation flag.
    #[must_use]
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = Some(animated);
        self
    }

    /// Callback invoked by the stack once the presentation completes.
    #[must_use]
    pub fn on_complete(mut self, completion: impl FnOnce() + Send + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }
}

impl fmt::Debug for PresentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentOptions")
            .field("style", &self.style)
            .field("wrap", &self.wrap)
            .field("from", &self.from)
            .field("animated", &self.animated)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

/// Batch of route registrations applied in one call.
///
/// ```rust,ignore
/// navigator.register_routes(
///     RouteSet::new()
///         .route::<HomeScreen>("app://home")
///         .route_with_params::<ProfileScreen, TypedParams<ProfileParams>>("app://profile"),
/// )?;
/// ```
#[derive(Default)]
pub struct RouteSet {
    routes: Vec<(String, RouteFactory)>,
}

impl RouteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route to a screen constructed without a typed parameter object; a
    /// non-empty query still reaches it as [`DefaultParams`].
    #[must_use]
    pub fn route<S: Screen>(mut self, pattern: impl Into<String>) -> Self {
        self.routes
            .push((pattern.into(), factory_for::<S, DefaultParams>()));
        self
    }

    /// Route to a screen with a typed parameter object decoded from the
    /// query.
    #[must_use]
    pub fn route_with_params<S, P>(mut self, pattern: impl Into<String>) -> Self
    where
        S: Screen,
        P: RouteParams,
    {
        self.routes.push((pattern.into(), factory_for::<S, P>()));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

struct NavigatorCore {
    table: RwLock<RouteTable<RouteFactory>>,
    stack: Mutex<Box<dyn NavStack>>,
    delegate: RwLock<Option<Arc<dyn NavigatorDelegate>>>,
    config: RuntimeConfig,
}

/// URL-driven screen navigator.
///
/// Cloning is cheap and clones share the same route table, stack, and
/// delegate.
#[derive(Clone)]
pub struct Navigator {
    core: Arc<NavigatorCore>,
}

/// Weak reference to a navigator, injected into every resolved screen.
///
/// Screens hold a handle rather than the navigator itself so that a screen
/// sitting on the stack does not keep its navigator alive. Call
/// [`NavHandle::upgrade`] to navigate from inside a screen.
#[derive(Clone)]
pub struct NavHandle {
    core: Weak<NavigatorCore>,
}

impl NavHandle {
    /// Handle attached to nothing; upgrading always fails. Useful when
    /// constructing screens outside a navigator, mostly in tests.
    #[must_use]
    pub fn detached() -> Self {
        Self { core: Weak::new() }
    }

    /// The navigator this handle points at, if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Navigator> {
        self.core.upgrade().map(|core| Navigator { core })
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.core.strong_count() > 0
    }
}

impl fmt::Debug for NavHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Navigator {
    /// Create a navigator over a stack, reading configuration from the
    /// environment.
    #[must_use]
    pub fn new(stack: Box<dyn NavStack>) -> Self {
        Self::with_config(stack, RuntimeConfig::from_env())
    }

    /// Create a navigator with an explicit configuration.
    #[must_use]
    pub fn with_config(stack: Box<dyn NavStack>, config: RuntimeConfig) -> Self {
        debug!(?config, "Navigator created");
        Self {
            core: Arc::new(NavigatorCore {
                table: RwLock::new(RouteTable::new(config.duplicate_routes)),
                stack: Mutex::new(stack),
                delegate: RwLock::new(None),
                config,
            }),
        }
    }

    /// Weak handle suitable for storing inside screens.
    #[must_use]
    pub fn handle(&self) -> NavHandle {
        NavHandle {
            core: Arc::downgrade(&self.core),
        }
    }

    #[must_use]
    pub fn config(&self) -> RuntimeConfig {
        self.core.config
    }

    // ---- registration ----

    /// Register a screen without a typed parameter object. A non-empty
    /// query still reaches the constructor as [`DefaultParams`].
    pub fn register<S: Screen>(&self, pattern: &str) -> Result<(), RegisterError> {
        self.register_factory(pattern, factory_for::<S, DefaultParams>())
    }

    /// Register a screen with a typed parameter object decoded from the
    /// query.
    pub fn register_with_params<S, P>(&self, pattern: &str) -> Result<(), RegisterError>
    where
        S: Screen,
        P: RouteParams,
    {
        self.register_factory(pattern, factory_for::<S, P>())
    }

    /// Register a hand-built factory. The other registration methods funnel
    /// through here.
    pub fn register_factory(
        &self,
        pattern: &str,
        factory: RouteFactory,
    ) -> Result<(), RegisterError> {
        let pattern = RoutePattern::parse(pattern)?;
        let mut table = self.core.table.write().unwrap();
        table.insert(pattern, factory)?;
        Ok(())
    }

    /// Apply a whole [`RouteSet`]. Stops at the first failing registration.
    pub fn register_routes(&self, routes: RouteSet) -> Result<(), RegisterError> {
        for (pattern, factory) in routes.routes {
            self.register_factory(&pattern, factory)?;
        }
        Ok(())
    }

    // ---- resolution ----

    /// Resolve a URL into a constructed screen without mounting it.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<BoxedScreen> {
        self.resolve_with_context(url, None)
    }

    /// Resolve with caller-supplied context parameters. The context is used
    /// only when the URL carries no query; the two sources are never merged.
    #[must_use]
    pub fn resolve_with_context(
        &self,
        url: &str,
        context: Option<BoxedParams>,
    ) -> Option<BoxedScreen> {
        let table = self.core.table.read().unwrap();
        crate::resolver::resolve(&table, self.handle(), url, context)
            .map(|resolved| resolved.screen)
    }

    // ---- presentation ----

    /// Resolve a URL and present the screen modally. Returns the id of the
    /// resolved screen, or `None` when any pipeline step declines.
    pub fn present_url(
        &self,
        url: &str,
        context: Option<BoxedParams>,
        options: PresentOptions,
    ) -> Option<ScreenId> {
        let screen = self.resolve_with_context(url, context)?;
        self.present_screen(screen, options)
    }

    /// Present an already-constructed screen modally.
    ///
    /// The id returned is always the given screen's, even when wrapping
    /// mounts a container around it. The navigation handle is not injected
    /// here; screens built by hand take one from [`Navigator::handle`].
    pub fn present_screen(
        &self,
        screen: BoxedScreen,
        options: PresentOptions,
    ) -> Option<ScreenId> {
        let PresentOptions {
            style,
            wrap,
            from,
            animated,
            completion,
        } = options;
        let root_id = screen.id();

        let anchor = match from.or_else(|| self.top()) {
            Some(anchor) => anchor,
            None => {
                warn!(screen_id = %root_id, "No presentation anchor, presentation abandoned");
                return None;
            }
        };

        if !self.delegate_allows_present(screen.as_ref(), anchor) {
            info!(
                screen_id = %root_id,
                from = %anchor,
                "Presentation vetoed by delegate"
            );
            return None;
        }

        let entry = match wrap {
            Some(spec) if !spec.matches(screen.as_ref()) => match spec.wrap(screen) {
                Some(container) => StackEntry::styled(container, style),
                None => {
                    warn!(
                        container = spec.type_name(),
                        screen_id = %root_id,
                        "Container declined to wrap screen, presentation abandoned"
                    );
                    return None;
                }
            },
            _ => StackEntry::styled(screen, style),
        };

        let animated = animated.unwrap_or(self.core.config.default_animated);
        let mut stack = self.core.stack.lock().unwrap();
        stack.present_screen(entry, animated, completion);
        info!(
            screen_id = %root_id,
            from = %anchor,
            style = ?style,
            animated,
            depth = stack.depth(),
            "Screen presented"
        );
        Some(root_id)
    }

    /// Resolve a URL and push the screen.
    pub fn push_url(
        &self,
        url: &str,
        context: Option<BoxedParams>,
        animated: bool,
    ) -> Option<ScreenId> {
        let screen = self.resolve_with_context(url, context)?;
        self.push_screen(screen, animated)
    }

    /// Push an already-constructed screen. Pushing onto an empty stack
    /// seeds the root.
    pub fn push_screen(&self, screen: BoxedScreen, animated: bool) -> Option<ScreenId> {
        if !self.delegate_allows_push(screen.as_ref()) {
            info!(screen_id = %screen.id(), "Push vetoed by delegate");
            return None;
        }
        let id = screen.id();
        let mut stack = self.core.stack.lock().unwrap();
        stack.push_screen(StackEntry::new(screen), animated);
        info!(screen_id = %id, animated, depth = stack.depth(), "Screen pushed");
        Some(id)
    }

    // ---- unwinding ----

    /// Pop the topmost screen and hand it back. The stack keeps its root.
    pub fn pop(&self, animated: bool) -> Option<BoxedScreen> {
        let mut stack = self.core.stack.lock().unwrap();
        let entry = stack.pop_topmost(animated)?;
        info!(screen_id = %entry.id(), depth = stack.depth(), "Screen popped");
        Some(entry.screen)
    }

    /// Pop everything above the root, topmost-first.
    pub fn pop_to_root(&self, animated: bool) -> Vec<BoxedScreen> {
        let mut stack = self.core.stack.lock().unwrap();
        let popped = stack.pop_to_root(animated);
        if !popped.is_empty() {
            info!(count = popped.len(), depth = stack.depth(), "Popped to root");
        }
        popped.into_iter().map(|entry| entry.screen).collect()
    }

    /// Pop until `target` is topmost. `None` (stack untouched) when the
    /// target is not mounted.
    pub fn pop_to(&self, target: ScreenId, animated: bool) -> Option<Vec<BoxedScreen>> {
        let mut stack = self.core.stack.lock().unwrap();
        match stack.pop_to(target, animated) {
            Some(popped) => {
                info!(target_id = %target, count = popped.len(), "Popped to screen");
                Some(popped.into_iter().map(|entry| entry.screen).collect())
            }
            None => {
                warn!(target_id = %target, "Target screen not mounted, stack unchanged");
                None
            }
        }
    }

    // ---- observation ----

    /// Id of the topmost mounted screen.
    #[must_use]
    pub fn top(&self) -> Option<ScreenId> {
        self.core.stack.lock().unwrap().top().map(StackEntry::id)
    }

    /// Run a closure against the topmost screen without removing it.
    pub fn with_top<R>(&self, f: impl FnOnce(&dyn Screen) -> R) -> Option<R> {
        let stack = self.core.stack.lock().unwrap();
        stack.top().map(|entry| f(entry.screen.as_ref()))
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.core.stack.lock().unwrap().depth()
    }

    #[must_use]
    pub fn contains(&self, id: ScreenId) -> bool {
        self.core.stack.lock().unwrap().contains(id)
    }

    #[must_use]
    pub fn route_count(&self) -> usize {
        self.core.table.read().unwrap().len()
    }

    /// Total keyed probes against the route table. Unparseable URLs and
    /// URLs without a routing key do not count.
    #[must_use]
    pub fn lookup_count(&self) -> u64 {
        self.core.table.read().unwrap().lookup_count()
    }

    #[must_use]
    pub fn hit_count(&self) -> u64 {
        self.core.table.read().unwrap().hit_count()
    }

    #[must_use]
    pub fn miss_count(&self) -> u64 {
        self.core.table.read().unwrap().miss_count()
    }

    /// Print the registered routes to stdout, for debugging.
    pub fn dump_routes(&self) {
        self.core.table.read().unwrap().dump_routes();
    }

    // ---- delegate ----

    pub fn set_delegate(&self, delegate: Arc<dyn NavigatorDelegate>) {
        *self.core.delegate.write().unwrap() = Some(delegate);
    }

    pub fn clear_delegate(&self) {
        *self.core.delegate.write().unwrap() = None;
    }

    fn delegate_allows_present(&self, screen: &dyn Screen, from: ScreenId) -> bool {
        let delegate = self.core.delegate.read().unwrap().clone();
        match delegate {
            Some(delegate) => delegate.should_present(screen, from),
            None => true,
        }
    }

    fn delegate_allows_push(&self, screen: &dyn Screen) -> bool {
        let delegate = self.core.delegate.read().unwrap().clone();
        match delegate {
            Some(delegate) => delegate.should_push(screen),
            None => true,
        }
    }
}
