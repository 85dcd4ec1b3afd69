mod common;

use common::fixtures::{test_navigator, HomeScreen};
use navrouter::{
    DuplicateRoutes, PatternError, RegisterError, RoutePattern, RouteTable, RoutingKey,
};
use url::Url;

#[test]
fn test_register_rejects_malformed_pattern() {
    let nav = test_navigator();
    let err = nav.register::<HomeScreen>("not a pattern").unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Pattern(PatternError::Invalid { .. })
    ));
    assert_eq!(nav.route_count(), 0);
}

#[test]
fn test_register_rejects_missing_host() {
    let nav = test_navigator();
    let err = nav.register::<HomeScreen>("app:profile").unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Pattern(PatternError::MissingHost { .. })
    ));
}

#[test]
fn test_register_rejects_query_and_fragment_components() {
    let query = RoutePattern::parse("app://search?q=1").unwrap_err();
    assert!(matches!(
        query,
        PatternError::UnexpectedComponent {
            component: "query",
            ..
        }
    ));

    let fragment = RoutePattern::parse("app://search#results").unwrap_err();
    assert!(matches!(
        fragment,
        PatternError::UnexpectedComponent {
            component: "fragment",
            ..
        }
    ));
}

#[test]
fn test_register_rejects_invalid_param_name() {
    let err = RoutePattern::parse("app://user/:9lives").unwrap_err();
    assert!(matches!(err, PatternError::InvalidParamName { .. }));
}

#[test]
fn test_pattern_accessors() {
    let pattern = RoutePattern::parse("app://User/:id/detail").unwrap();
    assert_eq!(pattern.raw(), "app://User/:id/detail");
    assert_eq!(pattern.key().to_string(), "app://user");
    assert_eq!(pattern.path_template(), "/:id/detail");
    let names: Vec<&str> = pattern.param_names().iter().map(|n| n.as_ref()).collect();
    assert_eq!(names, vec!["id"]);
}

#[test]
fn test_extract_fits_and_misfits() {
    let pattern = RoutePattern::parse("app://user/:id/post/:pid").unwrap();

    let values = pattern.extract("/7/post/9");
    let pairs: Vec<(&str, &str)> = values
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_str()))
        .collect();
    assert_eq!(pairs, vec![("id", "7"), ("pid", "9")]);

    assert!(pattern.extract("/7").is_empty());
    assert!(pattern.extract("/7/post/9/extra").is_empty());
}

#[test]
fn test_routing_key_is_case_insensitive_end_to_end() {
    let nav = test_navigator();
    nav.register::<HomeScreen>("APP://Profile").unwrap();
    assert!(nav.resolve("app://profile").is_some());
    assert!(nav.resolve("App://PROFILE").is_some());
    assert_eq!(nav.hit_count(), 2);
}

#[test]
fn test_route_table_with_plain_payloads() {
    let mut table: RouteTable<&str> = RouteTable::new(DuplicateRoutes::LastWins);
    table
        .insert(RoutePattern::parse("app://user/:id").unwrap(), "user")
        .unwrap();
    table
        .insert(RoutePattern::parse("app://home").unwrap(), "home")
        .unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.contains(&RoutingKey::new("app", "user")));

    let url = Url::parse("app://user/42").unwrap();
    let hit = table.find(&url).unwrap();
    assert_eq!(*hit.payload(), "user");
    assert_eq!(hit.get_value("id"), Some("42"));

    assert!(table.find(&Url::parse("app://nowhere").unwrap()).is_none());
    assert_eq!(table.lookup_count(), 2);
    assert_eq!(table.hit_count(), 1);
    assert_eq!(table.miss_count(), 1);
}

#[test]
fn test_duplicate_policies_at_table_level() {
    let mut last_wins: RouteTable<&str> = RouteTable::new(DuplicateRoutes::LastWins);
    last_wins
        .insert(RoutePattern::parse("app://home").unwrap(), "first")
        .unwrap();
    last_wins
        .insert(RoutePattern::parse("app://home/:tab").unwrap(), "second")
        .unwrap();
    assert_eq!(last_wins.len(), 1);
    let url = Url::parse("app://home/settings").unwrap();
    let hit = last_wins.find(&url).unwrap();
    assert_eq!(*hit.payload(), "second");
    assert_eq!(hit.get_value("tab"), Some("settings"));

    let mut reject: RouteTable<&str> = RouteTable::new(DuplicateRoutes::Reject);
    reject
        .insert(RoutePattern::parse("app://home").unwrap(), "first")
        .unwrap();
    let err = reject
        .insert(RoutePattern::parse("app://home").unwrap(), "second")
        .unwrap_err();
    assert_eq!(err.key, RoutingKey::new("app", "home"));
    let url = Url::parse("app://home").unwrap();
    assert_eq!(*reject.find(&url).unwrap().payload(), "first");
}
