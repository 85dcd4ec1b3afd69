use smallvec::SmallVec;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use url::Url;

/// Maximum number of query parameters before heap allocation.
/// Most deep links carry ≤4 pairs (e.g., `app://profile?id=42&tab=posts`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the resolution hot path.
///
/// Param names use `Arc<str>` instead of `String` because names repeat across
/// navigation events while values are per-event data from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Ordered query-string mapping with duplicate keys preserved.
///
/// Pairs are kept in the order they appear in the URL. Keyed access uses
/// "last write wins" semantics: `?tab=posts&tab=likes` answers `likes` for
/// `tab`, but both pairs remain visible through [`QueryMap::iter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: ParamVec,
}

impl QueryMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pairs: ParamVec::new(),
        }
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Percent-encoding is decoded and `+` is treated as a space, matching
    /// form-urlencoded rules. Pairs appear in source order.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut map = Self::new();
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            map.push(name.as_ref(), value.as_ref());
        }
        map
    }

    /// Extract the query pairs of an already-parsed URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let mut map = Self::new();
        for (name, value) in url.query_pairs() {
            map.push(name.as_ref(), value.as_ref());
        }
        map
    }

    /// Append a pair, keeping any earlier pair with the same name.
    pub fn push(&mut self, name: impl Into<Arc<str>>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Get a query parameter by name.
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// (e.g., `?limit=10&limit=20`), returns the last occurrence.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter parsed into `T`.
    ///
    /// Returns `None` when the parameter is missing or does not parse.
    #[inline]
    #[must_use]
    pub fn get_parsed<T: FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over all pairs in source order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Convert to a `HashMap` for compatibility with map-shaped consumers.
    /// Note: this allocates and collapses duplicates (last value per key wins);
    /// use [`QueryMap::get`] in hot paths instead.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<Arc<str>>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (name, value) in iter {
            map.push(name, value);
        }
        map
    }
}

/// Contract for parameter objects: constructible from a query mapping.
///
/// A route can declare the concrete type that should carry its parameters;
/// the resolver constructs it through [`RouteParams::from_query`] when the
/// URL brings query pairs. Construction is allowed to fail (for example a
/// typed decode that does not fit the incoming pairs), in which case the
/// resolution continues with the parameter absent.
///
/// The `Any` accessors exist so screens can recover the concrete type from a
/// boxed parameter object:
///
/// ```rust
/// use navrouter::params::{DefaultParams, QueryMap, RouteParams};
///
/// let query = QueryMap::parse("id=7");
/// let boxed: Box<dyn RouteParams> = Box::new(DefaultParams::from_query(&query).unwrap());
/// let params = boxed.downcast_ref::<DefaultParams>().unwrap();
/// assert_eq!(params.get("id"), Some("7"));
/// ```
pub trait RouteParams: Send + 'static {
    /// Construct an instance from the parsed query mapping.
    fn from_query(query: &QueryMap) -> Option<Self>
    where
        Self: Sized;

    fn as_any(&self) -> &dyn Any;

    /// Consuming `Any` access, for owned downcasts:
    /// `params.into_any().downcast::<MyParams>()`.
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

/// Owned, type-erased parameter object.
pub type BoxedParams = Box<dyn RouteParams>;

impl dyn RouteParams {
    /// Returns true if the boxed parameter object is a `P`.
    #[must_use]
    pub fn is<P: RouteParams>(&self) -> bool {
        self.as_any().is::<P>()
    }

    /// Borrowing downcast to the concrete parameter type.
    #[must_use]
    pub fn downcast_ref<P: RouteParams>(&self) -> Option<&P> {
        self.as_any().downcast_ref()
    }
}

/// Parameter object used when a route declares no parameter type.
///
/// Simply stores the raw query mapping so the screen can pick values out of
/// it by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultParams {
    query: QueryMap,
}

impl DefaultParams {
    #[must_use]
    pub fn new(query: QueryMap) -> Self {
        Self { query }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }

    #[must_use]
    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    #[must_use]
    pub fn into_query(self) -> QueryMap {
        self.query
    }
}

impl RouteParams for DefaultParams {
    fn from_query(query: &QueryMap) -> Option<Self> {
        Some(Self {
            query: query.clone(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

/// The parameter source chosen for one resolution.
///
/// Query pairs represent explicit, URL-encoded intent and always take
/// precedence over ambient context; context is a convenience for programmatic
/// navigation where building a query string would be pointless. Exactly one
/// arm is ever used, the two are never merged.
pub enum ParamSource {
    /// The URL carried one or more query pairs.
    Query(QueryMap),
    /// The query string was empty and the caller supplied a parameter object.
    Context(BoxedParams),
    /// Neither source was usable.
    Absent,
}

impl ParamSource {
    /// Apply the precedence rule to a parsed query and optional context.
    #[must_use]
    pub fn determine(query: QueryMap, context: Option<BoxedParams>) -> Self {
        if !query.is_empty() {
            ParamSource::Query(query)
        } else if let Some(ctx) = context {
            ParamSource::Context(ctx)
        } else {
            ParamSource::Absent
        }
    }

    /// Short label for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ParamSource::Query(_) => "query",
            ParamSource::Context(_) => "context",
            ParamSource::Absent => "absent",
        }
    }
}

impl fmt::Debug for ParamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamSource::Query(query) => f.debug_tuple("Query").field(query).finish(),
            ParamSource::Context(_) => f.write_str("Context(..)"),
            ParamSource::Absent => f.write_str("Absent"),
        }
    }
}
