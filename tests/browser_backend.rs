#![cfg(all(target_arch = "wasm32", feature = "web"))]

use serde_json::json;
use slim_router_rs::history::{BrowserBackend, History, NavigationBackend};
use slim_router_rs::{NavigateOptions, Router, RouterOptions};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_when_pushed_then_url_and_state_round_trip() {
    let backend = BrowserBackend::shared().expect("window should exist");
    let history = History::path_based(backend.clone());

    history
        .push("/wasm/push?x=1", Some(json!({ "n": 1 })))
        .expect("push should succeed");

    let url = backend.url();
    assert_eq!(url.pathname, "/wasm/push");
    assert_eq!(url.search, "?x=1");
    assert_eq!(history.location().state, Some(json!({ "n": 1 })));
}

#[wasm_bindgen_test]
fn browser_when_fragment_router_navigates_then_location_follows() {
    let options = RouterOptions::builder()
        .mode(slim_router_rs::HistoryMode::Fragment)
        .build()
        .expect("options should build");
    let router = Router::browser(options).expect("router should activate");

    router
        .navigate("/wasm/fragment", NavigateOptions::default())
        .expect("navigate should succeed");

    assert_eq!(router.location().pathname, "/wasm/fragment");
    assert_eq!(router.location().hash, "");
}

#[wasm_bindgen_test]
fn browser_when_router_dropped_then_native_listeners_are_detached() {
    let backend = BrowserBackend::shared().expect("window should exist");
    let router = Router::new(backend.clone(), RouterOptions::default())
        .expect("router should activate");
    drop(router);

    let history = History::path_based(backend);
    history.replace("/wasm/after-drop", None).expect("replace should succeed");
    assert_eq!(history.location().pathname, "/wasm/after-drop");
}
