use std::any::Any;

use navrouter::params::decode;
use navrouter::{DefaultParams, ParamSource, QueryMap, RouteParams};
use serde::Deserialize;
use url::Url;

struct Marker;

impl RouteParams for Marker {
    fn from_query(_query: &QueryMap) -> Option<Self> {
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

#[test]
fn test_query_map_percent_and_plus_decoding() {
    let query = QueryMap::parse("name=Jane%20Doe&title=a+b&emoji=%F0%9F%9A%80");
    assert_eq!(query.get("name"), Some("Jane Doe"));
    assert_eq!(query.get("title"), Some("a b"));
    assert_eq!(query.get("emoji"), Some("🚀"));
}

#[test]
fn test_query_map_last_value_wins() {
    let query = QueryMap::parse("tab=first&tab=second&tab=third");
    assert_eq!(query.get("tab"), Some("third"));
    assert_eq!(query.len(), 3, "all pairs are retained in order");
}

#[test]
fn test_query_map_bare_and_empty_values() {
    let query = QueryMap::parse("flag&empty=&x=1");
    assert_eq!(query.get("flag"), Some(""));
    assert_eq!(query.get("empty"), Some(""));
    assert_eq!(query.get("missing"), None);
}

#[test]
fn test_query_map_get_parsed() {
    let query = QueryMap::parse("page=7&ratio=0.5&bad=seven");
    assert_eq!(query.get_parsed::<u32>("page"), Some(7));
    assert_eq!(query.get_parsed::<f64>("ratio"), Some(0.5));
    assert_eq!(query.get_parsed::<u32>("bad"), None);
    assert_eq!(query.get_parsed::<u32>("missing"), None);
}

#[test]
fn test_query_map_spills_past_inline_capacity() {
    let source: String = (0..12)
        .map(|i| format!("k{i}={i}"))
        .collect::<Vec<_>>()
        .join("&");
    let query = QueryMap::parse(&source);
    assert_eq!(query.len(), 12);
    assert_eq!(query.get("k11"), Some("11"));
}

#[test]
fn test_query_map_from_url() {
    let url = Url::parse("app://profile?id=42&tab=posts").unwrap();
    let query = QueryMap::from_url(&url);
    assert_eq!(query.get("id"), Some("42"));
    assert_eq!(query.get("tab"), Some("posts"));

    let bare = Url::parse("app://profile").unwrap();
    assert!(QueryMap::from_url(&bare).is_empty());
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Sort {
    Newest,
    Oldest,
}

#[derive(Debug, Deserialize, PartialEq)]
struct SearchParams {
    q: String,
    #[serde(rename = "max")]
    limit: u32,
    exact: bool,
    boost: f64,
    initial: char,
    sort: Sort,
    cursor: Option<String>,
}

#[test]
fn test_decode_full_scalar_spread() {
    let query = QueryMap::parse("q=rust&max=25&exact=true&boost=1.5&initial=r&sort=newest");
    let params: SearchParams = decode(&query).unwrap();
    assert_eq!(
        params,
        SearchParams {
            q: "rust".to_string(),
            limit: 25,
            exact: true,
            boost: 1.5,
            initial: 'r',
            sort: Sort::Newest,
            cursor: None,
        }
    );
}

#[test]
fn test_decode_optional_field_present() {
    let query = QueryMap::parse("q=rust&max=1&exact=false&boost=0&initial=x&sort=oldest&cursor=abc");
    let params: SearchParams = decode(&query).unwrap();
    assert_eq!(params.cursor.as_deref(), Some("abc"));
}

#[test]
fn test_decode_numeric_string_stays_string() {
    #[derive(Debug, Deserialize)]
    struct IdParams {
        id: String,
    }
    let query = QueryMap::parse("id=42");
    let params: IdParams = decode(&query).unwrap();
    assert_eq!(params.id, "42");
}

#[test]
fn test_decode_error_names_target_type() {
    #[derive(Debug, Deserialize)]
    struct Strict {
        n: u8,
    }
    let query = QueryMap::parse("n=300");
    let err = decode::<Strict>(&query).unwrap_err();
    assert!(err.to_string().contains("failed to decode query into"));
    assert!(err.to_string().contains("Strict"));
}

#[test]
fn test_param_source_precedence() {
    let query = QueryMap::parse("a=1");
    let context: Box<dyn RouteParams> = Box::new(Marker);
    let source = ParamSource::determine(query, Some(context));
    assert_eq!(source.kind(), "query");

    let context: Box<dyn RouteParams> = Box::new(Marker);
    let source = ParamSource::determine(QueryMap::new(), Some(context));
    assert_eq!(source.kind(), "context");

    let source = ParamSource::determine(QueryMap::new(), None);
    assert_eq!(source.kind(), "absent");
}

#[test]
fn test_default_params_round_trip() {
    let query = QueryMap::parse("tab=posts&tab=likes");
    let params = DefaultParams::from_query(&query).unwrap();
    assert_eq!(params.get("tab"), Some("likes"));
    assert_eq!(params.query().len(), 2);
    let recovered = params.into_query();
    assert_eq!(recovered, query);
}
