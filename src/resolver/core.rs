use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use url::Url;

use crate::ids::NavigationId;
use crate::navigator::NavHandle;
use crate::params::{BoxedParams, ParamSource, ParamVec, QueryMap, RouteParams};
use crate::router::{RouteTable, RoutingKey};
use crate::screen::{BoxedScreen, Screen};

/// Constructor closure stored per route.
///
/// A factory receives the navigation handle and the already-determined
/// parameter source and returns a fully constructed screen, or `None` when
/// the parameters or the screen constructor reject the input.
pub type RouteFactory = Arc<dyn Fn(NavHandle, ParamSource) -> Option<BoxedScreen> + Send + Sync>;

/// Builds the factory registered for a screen type.
///
/// `P` decodes a non-empty query; caller context is passed through untouched
/// and an empty source constructs the screen without parameters. A query
/// that `P` rejects is logged and treated as absent rather than failing the
/// whole resolution, so a screen that tolerates missing parameters still
/// comes up.
#[must_use]
pub fn factory_for<S, P>() -> RouteFactory
where
    S: Screen,
    P: RouteParams,
{
    Arc::new(|handle: NavHandle, source: ParamSource| {
        let params: Option<BoxedParams> = match source {
            ParamSource::Query(query) => match P::from_query(&query) {
                Some(params) => Some(Box::new(params) as BoxedParams),
                None => {
                    warn!(
                        screen_type = std::any::type_name::<S>(),
                        params_type = std::any::type_name::<P>(),
                        "Query parameters rejected, constructing screen without them"
                    );
                    None
                }
            },
            ParamSource::Context(params) => Some(params),
            ParamSource::Absent => None,
        };
        S::new(handle, params).map(|screen| Box::new(screen) as BoxedScreen)
    })
}

/// Outcome of a successful resolution.
pub struct ResolvedScreen {
    /// The constructed screen, navigation handle already injected.
    pub screen: BoxedScreen,
    /// Routing key the URL matched.
    pub key: RoutingKey,
    /// Correlation id minted for this resolution attempt.
    pub navigation_id: NavigationId,
    /// Values captured from the URL path by the route's template. Empty when
    /// the path did not fit the template; the match itself is decided by the
    /// routing key alone.
    pub path_values: ParamVec,
}

impl std::fmt::Debug for ResolvedScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedScreen")
            .field("screen_id", &self.screen.id())
            .field("key", &self.key)
            .field("navigation_id", &self.navigation_id)
            .field("path_values", &self.path_values)
            .finish()
    }
}

/// Resolves a URL string into a constructed screen using `table`.
///
/// Fail-soft end to end: a URL that does not parse is rejected before the
/// table is consulted (malformed input never counts as a lookup), an
/// unregistered routing key is a logged miss, and a factory that declines
/// yields `None`.
pub fn resolve(
    table: &RouteTable<RouteFactory>,
    handle: NavHandle,
    url: &str,
    context: Option<BoxedParams>,
) -> Option<ResolvedScreen> {
    let navigation_id = NavigationId::new();
    let started = Instant::now();

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(error) => {
            warn!(
                navigation_id = %navigation_id,
                url,
                error = %error,
                "URL failed to parse, nothing resolved"
            );
            return None;
        }
    };

    let hit = table.find(&parsed)?;
    let query = QueryMap::from_url(&parsed);
    let source = ParamSource::determine(query, context);
    debug!(
        navigation_id = %navigation_id,
        routing_key = %hit.key,
        param_source = source.kind(),
        "Route matched, constructing screen"
    );

    let mut screen = match (hit.entry.payload())(handle.clone(), source) {
        Some(screen) => screen,
        None => {
            warn!(
                navigation_id = %navigation_id,
                routing_key = %hit.key,
                "Screen construction failed"
            );
            return None;
        }
    };
    screen.set_navigator(handle);

    info!(
        navigation_id = %navigation_id,
        routing_key = %hit.key,
        screen_id = %screen.id(),
        duration_us = started.elapsed().as_micros() as u64,
        "Screen resolved"
    );
    Some(ResolvedScreen {
        screen,
        key: hit.key,
        navigation_id,
        path_values: hit.path_values,
    })
}
