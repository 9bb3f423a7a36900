use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use slim_router_rs::history::{HistoryMode, MemoryBackend};
use slim_router_rs::{Location, NavigateOptions, PathSpec, Router, RouterOptions, SearchParams};

fn memory_router(initial: &str, mode: HistoryMode) -> (Rc<MemoryBackend>, Router) {
    let backend = MemoryBackend::shared(initial).expect("initial href should resolve");
    let options = RouterOptions::builder()
        .mode(mode)
        .build()
        .expect("options should build");
    let router = Router::new(backend.clone(), options).expect("router should activate");
    (backend, router)
}

fn record(router: &Router) -> Rc<RefCell<Vec<Location>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    router.subscribe(move |location| sink.borrow_mut().push(location.clone()));
    seen
}

#[test]
fn router_when_activated_then_reads_initial_location() {
    let (_backend, router) = memory_router("/inbox?page=2", HistoryMode::Path);
    let location = router.location();

    assert_eq!(location.pathname, "/inbox");
    assert_eq!(location.search, "?page=2");
}

#[test]
fn navigate_when_path_given_then_pushes_and_notifies_subscribers() {
    let (backend, router) = memory_router("/", HistoryMode::Path);
    let seen = record(&router);

    router
        .navigate("/users/42", NavigateOptions::default().with_state(json!({ "id": 42 })))
        .expect("navigate should succeed");

    assert_eq!(backend.len(), 2);
    assert_eq!(router.location().pathname, "/users/42");
    assert_eq!(router.location().state, Some(json!({ "id": 42 })));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].pathname, "/users/42");
}

#[test]
fn navigate_when_replace_requested_then_entry_count_stays() {
    let (backend, router) = memory_router("/login", HistoryMode::Path);

    router
        .navigate("/dashboard", NavigateOptions::replace())
        .expect("navigate should succeed");

    assert_eq!(backend.len(), 1);
    assert_eq!(router.location().pathname, "/dashboard");
}

#[test]
fn navigate_when_delta_given_then_traverses_and_ignores_options() {
    let (backend, router) = memory_router("/", HistoryMode::Path);
    router.navigate("/a", NavigateOptions::default()).expect("navigate should succeed");
    let seen = record(&router);

    let options = NavigateOptions::replace().with_state(json!("ignored"));
    router.navigate(-1, options).expect("traversal should be accepted");

    assert_eq!(backend.len(), 2, "traversal must not push or replace");
    assert_eq!(router.location().pathname, "/a");
    assert!(seen.borrow().is_empty());

    backend.flush();

    assert_eq!(router.location().pathname, "/");
    assert_eq!(router.location().state, None);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn navigate_when_several_traversals_queued_then_subscribers_end_on_settled_location() {
    let (backend, router) = memory_router("/", HistoryMode::Path);
    for path in ["/a", "/b", "/c"] {
        router.navigate(path, NavigateOptions::default()).expect("navigate should succeed");
    }
    let seen = record(&router);

    router.navigate(-1, NavigateOptions::default()).expect("traversal should be accepted");
    router.navigate(-1, NavigateOptions::default()).expect("traversal should be accepted");
    backend.flush();

    assert_eq!(router.location().pathname, "/a");
    assert_eq!(
        seen.borrow().last().map(|location| location.pathname.clone()),
        Some("/a".to_string())
    );
}

#[test]
fn navigate_when_fragment_mode_then_hashchange_drives_updates() {
    let (backend, router) = memory_router("/app", HistoryMode::Fragment);
    let seen = record(&router);

    router.navigate("/one", NavigateOptions::default()).expect("navigate should succeed");
    router.navigate("/two", NavigateOptions::default()).expect("navigate should succeed");
    router.navigate(-1, NavigateOptions::default()).expect("traversal should be accepted");
    backend.flush();

    assert_eq!(backend.current_href(), "/app#/one");
    assert_eq!(router.location().pathname, "/one");
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn router_when_location_changes_outside_router_then_it_refreshes() {
    let (backend, router) = memory_router("/", HistoryMode::Path);
    let seen = record(&router);

    backend.visit("/from-anchor").expect("visit should succeed");

    assert_eq!(router.location().pathname, "/from-anchor");
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn subscriber_when_identical_location_reread_then_still_notified() {
    let (_backend, router) = memory_router("/same", HistoryMode::Path);
    let seen = record(&router);

    router.navigate("/same", NavigateOptions::replace()).expect("navigate should succeed");
    router.navigate("/same", NavigateOptions::replace()).expect("navigate should succeed");

    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn subscriber_when_it_navigates_then_later_subscribers_only_see_final_location() {
    let (_backend, router) = memory_router("/", HistoryMode::Path);
    let context = router.context();
    let _redirect = router.subscribe(move |location| {
        if location.pathname == "/old" {
            context
                .navigate("/new", NavigateOptions::replace())
                .expect("redirect should succeed");
        }
    });
    let seen = record(&router);

    router.navigate("/old", NavigateOptions::default()).expect("navigate should succeed");

    let paths: Vec<_> = seen.borrow().iter().map(|l| l.pathname.clone()).collect();
    assert_eq!(paths, ["/new"]);
    assert_eq!(router.location().pathname, "/new");
}

#[test]
fn unsubscribe_when_called_then_subscriber_stops_receiving() {
    let (_backend, router) = memory_router("/", HistoryMode::Path);
    let calls = Rc::new(RefCell::new(0));
    let tracked = Rc::clone(&calls);
    let subscription = router.subscribe(move |_| *tracked.borrow_mut() += 1);

    router.navigate("/a", NavigateOptions::default()).expect("navigate should succeed");
    subscription.unsubscribe();
    router.navigate("/b", NavigateOptions::default()).expect("navigate should succeed");

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(router.subscriber_count(), 0);
}

#[test]
fn route_match_when_current_path_fits_then_returns_params() {
    let (_backend, router) = memory_router("/users/7", HistoryMode::Path);
    let spec = PathSpec::from("/users/:id");

    let found = router.route_match(Some(&spec), true).expect("route should match");
    assert!(found.is_exact);
    assert_eq!(found.params.get("id"), Some("7"));
    assert!(router.patterns().contains("/users/:id"));

    let nested = PathSpec::from("/users/:id/posts");
    assert!(router.route_match(Some(&nested), false).is_none());

    let catch_all = router.route_match(None, true).expect("catch-all should match");
    assert_eq!(catch_all.url, "/users/7");
}

#[test]
fn search_params_when_set_then_current_entry_is_replaced() {
    let (backend, router) = memory_router("/list?page=1", HistoryMode::Path);
    let mut params = router.search_params();
    assert_eq!(params.get("page"), Some("1"));

    params.set("page", "2");
    params.append("sort", "name");
    router.set_search_params(&params).expect("search update should succeed");

    assert_eq!(backend.len(), 1);
    assert_eq!(router.location().search, "?page=2&sort=name");
    assert_eq!(router.search_params().get("sort"), Some("name"));
}

#[test]
fn search_params_when_cleared_then_query_is_dropped() {
    let (_backend, router) = memory_router("/list?page=1", HistoryMode::Path);
    router
        .set_search_params(&SearchParams::new())
        .expect("search update should succeed");

    assert_eq!(router.location().search, "");
    assert_eq!(router.location().pathname, "/list");
}

#[test]
fn search_params_when_fragment_mode_then_query_lives_in_fragment() {
    let (backend, router) = memory_router("/", HistoryMode::Fragment);
    router.navigate("/list", NavigateOptions::default()).expect("navigate should succeed");

    let params: SearchParams = [("q", "rust")].into_iter().collect();
    router.set_search_params(&params).expect("search update should succeed");

    assert_eq!(backend.current_href(), "/#/list?q=rust");
    assert_eq!(router.search_params().get("q"), Some("rust"));
}
