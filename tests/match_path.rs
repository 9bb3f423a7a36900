use slim_router_rs::matcher::{MatchOptions, PathSpec, match_any, match_path, match_spec};
use slim_router_rs::path::normalize_path;
use slim_router_rs::{RouteParams, compile_path};

#[test]
fn compile_when_pattern_has_parameters_then_keys_follow_occurrence_order() {
    let compiled = compile_path("/orgs/:org/repos/:repo/issues/:number")
        .expect("pattern should compile");

    assert_eq!(compiled.keys(), ["org", "repo", "number"]);
}

#[test]
fn compile_when_pattern_is_static_then_keys_are_empty() {
    let compiled = compile_path("/settings/profile").expect("pattern should compile");
    assert!(compiled.keys().is_empty());
}

#[test]
fn compile_when_called_twice_then_matchers_are_equal() {
    let first = compile_path("/users/:id").expect("pattern should compile");
    let second = compile_path("/users/:id").expect("pattern should compile");
    assert_eq!(first, second);
}

#[test]
fn match_when_static_pattern_equals_pathname_then_exact_without_params() {
    let found = match_path("/home", "/home").expect("static route should match");

    assert_eq!(found.path, "/home");
    assert_eq!(found.url, "/home");
    assert!(found.is_exact);
    assert!(found.params.is_empty());
}

#[test]
fn match_when_static_pattern_differs_then_returns_none() {
    assert!(match_path("/about", "/home").is_none());
}

#[test]
fn match_when_single_parameter_then_extracts_value() {
    let found = match_path("/users/123", "/users/:id").expect("parameter route should match");

    assert!(found.is_exact);
    assert_eq!(found.params.get("id"), Some("123"));
    assert_eq!(found.params.len(), 1);
}

#[test]
fn match_when_multiple_parameters_then_extracts_each_in_order() {
    let found = match_path("/users/123/posts/456", "/users/:userId/posts/:postId")
        .expect("nested parameter route should match");

    let expected: RouteParams = [("userId", "123"), ("postId", "456")].into_iter().collect();
    assert_eq!(found.params, expected);
    assert_eq!(found.params.keys().collect::<Vec<_>>(), ["userId", "postId"]);
}

#[test]
fn match_when_capture_would_cross_a_slash_then_returns_none() {
    assert!(match_path("/users/123/extra", "/users/:id").is_none());
}

#[test]
fn match_when_exact_requested_and_pathname_is_longer_then_returns_none() {
    let options = MatchOptions::new("/users/:id").exact(true);
    assert!(match_path("/users/123/posts", options).is_none());
}

#[test]
fn match_when_exact_requested_and_pathname_fits_then_returns_match() {
    let options = MatchOptions::new("/users/:id").exact(true);
    let found = match_path("/users/9", options).expect("exact match should succeed");
    assert!(found.is_exact);
}

#[test]
fn match_when_trailing_slash_differs_then_both_directions_match() {
    let with_slash = match_path("/home/", "/home").expect("pathname slash should be tolerated");
    let pattern_slash = match_path("/home", "/home/").expect("pattern slash should be tolerated");

    assert_eq!(with_slash.url, "/home");
    assert!(with_slash.is_exact);
    assert_eq!(pattern_slash.url, "/home");
    assert!(pattern_slash.is_exact);
}

#[test]
fn match_when_parameter_value_is_empty_then_returns_none() {
    assert!(match_path("/users/", "/users/:id").is_none());
    assert!(match_path("/users//posts", "/users/:id/posts").is_none());
}

#[test]
fn match_when_root_pattern_then_only_root_matches() {
    let found = match_path("/", "/").expect("root should match");
    assert_eq!(found.url, "/");
    assert!(match_path("/home", "/").is_none());
}

#[test]
fn match_when_pattern_contains_regex_metacharacters_then_they_match_literally() {
    assert!(match_path("/files/report.pdf", "/files/report.pdf").is_some());
    assert!(match_path("/files/reportxpdf", "/files/report.pdf").is_none());
    assert!(match_path("/c++", "/c++").is_some());
}

#[test]
fn match_when_colon_is_not_followed_by_a_name_then_it_is_literal() {
    assert!(match_path("/time/12:", "/time/12:").is_some());
}

#[test]
fn match_any_when_several_patterns_fit_then_first_pattern_wins() {
    let patterns = ["/users/:id", "/users/:name"];
    let found = match_any("/users/ada", &patterns, false).expect("one of the patterns should match");

    assert_eq!(found.path, "/users/:id");
    assert_eq!(found.params.get("id"), Some("ada"));
    assert!(!found.params.contains_key("name"));
}

#[test]
fn match_any_when_only_later_pattern_fits_then_it_is_reported() {
    let patterns = ["/teams/:team", "/users/:id"];
    let found = match_any("/users/1", &patterns, false).expect("second pattern should match");
    assert_eq!(found.path, "/users/:id");
}

#[test]
fn match_any_when_nothing_fits_then_returns_none() {
    let patterns: [&str; 2] = ["/a", "/b"];
    assert!(match_any("/c", &patterns, false).is_none());
}

#[test]
fn match_spec_when_no_pattern_then_catches_everything() {
    let found = match_spec("/any/where", None, true).expect("catch-all should always match");

    assert_eq!(found.path, "/");
    assert_eq!(found.url, "/any/where");
    assert!(found.is_exact);
    assert!(found.params.is_empty());
}

#[test]
fn match_spec_when_list_given_then_behaves_like_match_any() {
    let spec = PathSpec::from(["/docs", "/docs/:page"]);
    let found = match_spec("/docs/intro", Some(&spec), false).expect("second entry should match");
    assert_eq!(found.params.get("page"), Some("intro"));
}

#[test]
fn route_match_when_serialized_then_params_form_an_object() {
    let found = match_path("/users/5", "/users/:id").expect("route should match");
    let json = serde_json::to_value(&found).expect("match should serialize");

    assert_eq!(
        json,
        serde_json::json!({
            "path": "/users/:id",
            "url": "/users/5",
            "is_exact": true,
            "params": { "id": "5" }
        })
    );
}

#[test]
fn normalize_when_given_messy_paths_then_collapses_and_trims() {
    assert_eq!(normalize_path("/home//about///page"), "/home/about/page");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/home/"), "/home");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("//"), "/");
}

#[test]
fn match_spec_when_single_pattern_is_empty_then_catches_everything() {
    let spec = PathSpec::from("");
    let found = match_spec("/users/7", Some(&spec), true).expect("empty pattern should catch all");

    assert_eq!(found.path, "/");
    assert_eq!(found.url, "/users/7");
    assert!(found.is_exact);
    assert!(found.params.is_empty());
}

#[test]
fn match_spec_when_pattern_list_is_empty_then_returns_none() {
    let spec = PathSpec::Any(Vec::new());
    assert!(match_spec("/users/7", Some(&spec), false).is_none());
}
