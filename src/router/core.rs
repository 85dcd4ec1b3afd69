//! Router core module - hot path for URL-to-route matching.

use crate::params::ParamVec;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Shape of a `:name` path parameter segment.
static PARAM_NAME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("param name regex is valid"));

/// Routing identity derived from a URL's scheme and host.
///
/// Both components are lowercased on construction, so `APP://Profile` and
/// `app://profile` select the same route. The path never participates in
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutingKey {
    scheme: String,
    host: String,
}

impl RoutingKey {
    #[must_use]
    pub fn new(scheme: &str, host: &str) -> Self {
        Self {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
        }
    }

    /// Derive the key from an already-parsed URL.
    ///
    /// Returns `None` when the URL has no host (e.g., `mailto:` style URLs).
    #[must_use]
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        if host.is_empty() {
            return None;
        }
        Some(Self::new(url.scheme(), host))
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// A parsed and validated registration pattern.
///
/// Pattern strings have the shape `scheme://host/path`, where path segments
/// starting with `:` declare named values to extract from runtime URLs
/// (e.g., `app://user/:id`). The scheme and host become the routing key; the
/// path becomes an extraction template and nothing more.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    key: RoutingKey,
    path_template: String,
    path_regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl RoutePattern {
    /// Parse and validate a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let url = Url::parse(pattern).map_err(|e| PatternError::Invalid {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let key = RoutingKey::from_url(&url).ok_or_else(|| PatternError::MissingHost {
            pattern: pattern.to_string(),
        })?;

        if url.query().is_some() {
            return Err(PatternError::UnexpectedComponent {
                pattern: pattern.to_string(),
                component: "query",
            });
        }
        if url.fragment().is_some() {
            return Err(PatternError::UnexpectedComponent {
                pattern: pattern.to_string(),
                component: "fragment",
            });
        }

        let path_template = url.path().to_string();
        let (path_regex, param_names) = Self::path_to_regex(&path_template, pattern)?;

        Ok(Self {
            raw: pattern.to_string(),
            key,
            path_template,
            path_regex,
            param_names,
        })
    }

    #[must_use]
    pub fn key(&self) -> &RoutingKey {
        &self.key
    }

    /// The pattern string exactly as registered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Ordered names of the `:name` segments in the template.
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    /// Run the path template against a runtime URL path.
    ///
    /// A path that fits the template yields one value per `:name` segment.
    /// A path that does not fit yields no values; the route still matched by
    /// key, the template just had nothing to contribute.
    #[must_use]
    pub fn extract(&self, path: &str) -> ParamVec {
        let mut values = ParamVec::new();
        if let Some(captures) = self.path_regex.captures(path) {
            for (index, name) in self.param_names.iter().enumerate() {
                if let Some(group) = captures.get(index + 1) {
                    values.push((Arc::clone(name), group.as_str().to_string()));
                }
            }
        }
        values
    }

    /// Convert a path template to a regex and extract parameter names.
    ///
    /// Transforms templates like `/user/:id` into patterns like
    /// `^/user/([^/]+)$` and collects the names `["id"]`. Literal segments
    /// are regex-escaped.
    fn path_to_regex(
        template: &str,
        pattern: &str,
    ) -> Result<(Regex, Vec<Arc<str>>), PatternError> {
        if template.is_empty() || template == "/" {
            let regex = Regex::new(r"^/?$").map_err(|e| PatternError::Invalid {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            return Ok((regex, Vec::new()));
        }

        let mut regex_src = String::with_capacity(template.len() + 5);
        regex_src.push('^');
        let mut param_names: Vec<Arc<str>> = Vec::with_capacity(template.matches(':').count());

        for segment in template.split('/') {
            if let Some(name) = segment.strip_prefix(':') {
                if !PARAM_NAME_SHAPE.is_match(name) {
                    return Err(PatternError::InvalidParamName {
                        pattern: pattern.to_string(),
                        segment: segment.to_string(),
                    });
                }
                regex_src.push_str("/([^/]+)");
                param_names.push(Arc::from(name));
            } else if !segment.is_empty() {
                regex_src.push('/');
                regex_src.push_str(&regex::escape(segment));
            }
        }

        regex_src.push('$');
        let regex = Regex::new(&regex_src).map_err(|e| PatternError::Invalid {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok((regex, param_names))
    }
}

/// Policy applied when a registration collides with an existing routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateRoutes {
    /// The later registration silently replaces the earlier one. A warning
    /// diagnostic is emitted so the replacement is visible in logs.
    #[default]
    LastWins,
    /// The later registration fails with [`DuplicateRouteError`].
    Reject,
}

/// One registered route: the compiled pattern plus its payload.
#[derive(Debug, Clone)]
pub struct RouteEntry<T> {
    pattern: RoutePattern,
    payload: T,
}

impl<T> RouteEntry<T> {
    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// Result of successfully matching a URL against the table.
#[derive(Debug)]
pub struct RouteHit<'a, T> {
    /// The routing key derived from the URL.
    pub key: RoutingKey,
    /// The matched entry.
    pub entry: &'a RouteEntry<T>,
    /// Values extracted by the entry's path template (possibly empty).
    pub path_values: ParamVec,
}

impl<'a, T> RouteHit<'a, T> {
    /// Get an extracted path value by name.
    ///
    /// Uses "last write wins" semantics when a template repeats a name at
    /// different depths.
    #[inline]
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.path_values
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        self.entry.pattern()
    }

    #[must_use]
    pub fn payload(&self) -> &T {
        self.entry.payload()
    }
}

/// Route registry: one payload per distinct routing key.
///
/// Registration is expected at start-up, after which the table is only read;
/// the lookup counters use atomics so `find` works through a shared
/// reference.
pub struct RouteTable<T> {
    entries: HashMap<RoutingKey, RouteEntry<T>>,
    policy: DuplicateRoutes,
    lookups: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T> RouteTable<T> {
    #[must_use]
    pub fn new(policy: DuplicateRoutes) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            lookups: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn policy(&self) -> DuplicateRoutes {
        self.policy
    }

    /// Store a payload under the pattern's routing key.
    ///
    /// On a key collision the configured [`DuplicateRoutes`] policy decides:
    /// `LastWins` replaces the stored entry, `Reject` returns an error and
    /// leaves the table unchanged.
    pub fn insert(&mut self, pattern: RoutePattern, payload: T) -> Result<(), DuplicateRouteError> {
        let key = pattern.key().clone();
        if self.entries.contains_key(&key) {
            match self.policy {
                DuplicateRoutes::Reject => {
                    return Err(DuplicateRouteError {
                        key,
                        pattern: pattern.raw().to_string(),
                    });
                }
                DuplicateRoutes::LastWins => {
                    warn!(
                        routing_key = %key,
                        pattern = %pattern.raw(),
                        "Route replaced, last registration wins"
                    );
                }
            }
        }
        debug!(
            routing_key = %key,
            pattern = %pattern.raw(),
            path_template = %pattern.path_template(),
            "Route registered"
        );
        self.entries.insert(key, RouteEntry { pattern, payload });
        Ok(())
    }

    /// Match a URL against the table.
    ///
    /// Selection uses only the routing key; the matched entry's template then
    /// extracts path values. A URL that yields no routing key (no host) is
    /// rejected without counting; every keyed probe counts as one lookup,
    /// resolving as a hit or a miss.
    #[must_use]
    pub fn find(&self, url: &Url) -> Option<RouteHit<'_, T>> {
        let Some(key) = RoutingKey::from_url(url) else {
            warn!(url = %url, "URL has no host, no routing key to look up");
            return None;
        };
        self.lookups.fetch_add(1, Ordering::Relaxed);

        match self.entries.get(&key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                let path_values = entry.pattern.extract(url.path());
                debug!(
                    routing_key = %key,
                    pattern = %entry.pattern.raw(),
                    path_values = ?path_values,
                    "Routing key matched"
                );
                Some(RouteHit {
                    key,
                    entry,
                    path_values,
                })
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(routing_key = %key, "No route registered for routing key");
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &RoutingKey) -> Option<&RouteEntry<T>> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &RoutingKey) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RoutingKey> {
        self.entries.keys()
    }

    /// Print all registered routes to stdout.
    ///
    /// Useful for debugging and verifying that routes are loaded correctly.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.entries.len());
        let mut patterns: Vec<&str> = self.entries.values().map(|e| e.pattern.raw()).collect();
        patterns.sort_unstable();
        for pattern in patterns {
            println!("[route] {pattern}");
        }
    }

    /// Total `find` calls since construction.
    #[must_use]
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Lookups that matched a registered key.
    #[must_use]
    pub fn hit_count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that matched nothing.
    #[must_use]
    pub fn miss_count(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new(DuplicateRoutes::default())
    }
}

/// Pattern string rejected at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern failed structured URL parsing.
    Invalid { pattern: String, reason: String },
    /// The pattern has no host component.
    MissingHost { pattern: String },
    /// Patterns must not carry a query or fragment component.
    UnexpectedComponent {
        pattern: String,
        component: &'static str,
    },
    /// A `:` path segment is not a valid parameter name.
    InvalidParamName { pattern: String, segment: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Invalid { pattern, reason } => {
                write!(
                    f,
                    "Route pattern error: '{}' is not a parseable URL ({}). \
                    Expected shape: scheme://host/path (e.g., app://profile/:id)",
                    pattern, reason
                )
            }
            PatternError::MissingHost { pattern } => {
                write!(
                    f,
                    "Route pattern error: '{}' has no host. \
                    Both scheme and host are required to form a routing key.",
                    pattern
                )
            }
            PatternError::UnexpectedComponent { pattern, component } => {
                write!(
                    f,
                    "Route pattern error: '{}' carries a {} component. \
                    Patterns must contain only scheme, host, and path.",
                    pattern, component
                )
            }
            PatternError::InvalidParamName { pattern, segment } => {
                write!(
                    f,
                    "Route pattern error: '{}' declares invalid parameter segment '{}'. \
                    Parameter names must match [A-Za-z_][A-Za-z0-9_]*.",
                    pattern, segment
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// A registration collided with an existing routing key under
/// [`DuplicateRoutes::Reject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRouteError {
    /// The colliding routing key.
    pub key: RoutingKey,
    /// The pattern of the rejected registration.
    pub pattern: String,
}

impl fmt::Display for DuplicateRouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate route registration for {} (pattern '{}'): \
            a factory is already registered for this scheme and host",
            self.key, self.pattern
        )
    }
}

impl std::error::Error for DuplicateRouteError {}

/// Why a registration was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The pattern string did not validate.
    Pattern(PatternError),
    /// The routing key is already taken and the policy rejects duplicates.
    Duplicate(DuplicateRouteError),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::Pattern(e) => e.fmt(f),
            RegisterError::Duplicate(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for RegisterError {}

impl From<PatternError> for RegisterError {
    fn from(e: PatternError) -> Self {
        RegisterError::Pattern(e)
    }
}

impl From<DuplicateRouteError> for RegisterError {
    fn from(e: DuplicateRouteError) -> Self {
        RegisterError::Duplicate(e)
    }
}
