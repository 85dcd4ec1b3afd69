mod common;
mod tracing_util;

use common::delegates::RecordingDelegate;
use common::fixtures::{test_navigator, HomeScreen, ProfileScreen};
use navrouter::PresentOptions;
use tracing_util::TestTracing;

#[test]
fn test_malformed_url_emits_diagnostic_with_reason() {
    let tracing = TestTracing::init();
    let nav = test_navigator();
    nav.register::<HomeScreen>("app://home").unwrap();

    assert!(nav.resolve("notaurl").is_none());

    let output = tracing.output();
    assert!(output.contains("URL failed to parse"));
    assert!(output.contains("notaurl"));
}

#[test]
fn test_unknown_routing_key_is_quiet_but_traceable() {
    let tracing = TestTracing::init();
    let nav = test_navigator();
    nav.register::<HomeScreen>("app://home").unwrap();

    assert!(nav.resolve("app://missing").is_none());

    let output = tracing.output();
    assert!(output.contains("No route registered for routing key"));
    assert!(output.contains("app://missing"));
}

#[test]
fn test_hostless_url_warns() {
    let tracing = TestTracing::init();
    let nav = test_navigator();
    nav.register::<HomeScreen>("app://home").unwrap();

    assert!(nav.resolve("mailto:someone@example.com").is_none());
    assert!(tracing
        .output()
        .contains("URL has no host, no routing key to look up"));
}

#[test]
fn test_route_replacement_warns() {
    let tracing = TestTracing::init();
    let nav = test_navigator();
    nav.register::<HomeScreen>("app://home").unwrap();
    nav.register::<ProfileScreen>("app://home").unwrap();

    let output = tracing.output();
    assert!(output.contains("Route replaced, last registration wins"));
    assert!(output.contains("app://home"));
}

#[test]
fn test_successful_resolution_logs_correlation_ids() {
    let tracing = TestTracing::init();
    let nav = test_navigator();
    nav.register::<HomeScreen>("app://home").unwrap();

    let screen = nav.resolve("app://home").unwrap();
    let output = tracing.output();
    assert!(output.contains("Screen resolved"));
    assert!(output.contains("navigation_id"));
    assert!(output.contains(&screen.id().to_string()));
}

#[test]
fn test_presentation_aborts_are_visible() {
    let tracing = TestTracing::init();
    let nav = test_navigator();
    nav.register::<HomeScreen>("app://home").unwrap();
    nav.register::<ProfileScreen>("app://profile").unwrap();

    // No anchor on an empty stack.
    assert!(nav
        .present_url("app://profile", None, PresentOptions::new())
        .is_none());
    assert!(tracing.output().contains("No presentation anchor"));

    // Delegate veto.
    nav.push_url("app://home", None, false).unwrap();
    nav.set_delegate(RecordingDelegate::denying());
    assert!(nav
        .present_url("app://profile", None, PresentOptions::new())
        .is_none());
    assert!(tracing.output().contains("Presentation vetoed by delegate"));
}

#[test]
fn test_rejected_query_parameters_warn_but_continue() {
    let tracing = TestTracing::init();
    let nav = test_navigator();
    nav.register_with_params::<ProfileScreen, navrouter::TypedParams<common::fixtures::PagingParams>>(
        "app://feed",
    )
    .unwrap();

    assert!(nav.resolve("app://feed?page=abc").is_some());

    let output = tracing.output();
    assert!(output.contains("Query decode failed, parameter treated as absent"));
    assert!(output.contains("Query parameters rejected, constructing screen without them"));
    assert!(output.contains("Screen resolved"));
}
