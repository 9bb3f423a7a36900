use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{
    HistoryError, HistoryResult, ListenerId, ListenerRegistry, NativeCallback, NativeEvents,
    NavigationBackend,
};
use crate::path::UrlParts;
use crate::types::HistoryState;

struct BrowserListener {
    closures: Vec<(&'static str, Closure<dyn FnMut(web_sys::Event)>)>,
}

/// Session history of the current browser tab.
///
/// Entry state crosses the JS boundary as JSON: it is stringified with
/// `serde_json` and parsed with `JSON.parse` on write, and the reverse on read.
pub struct BrowserBackend {
    window: web_sys::Window,
    listeners: RefCell<ListenerRegistry<BrowserListener>>,
}

impl std::fmt::Debug for BrowserBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserBackend")
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl BrowserBackend {
    pub fn new() -> HistoryResult<Self> {
        let window = web_sys::window().ok_or(HistoryError::WindowUnavailable)?;
        Ok(Self {
            window,
            listeners: RefCell::new(ListenerRegistry::new()),
        })
    }

    pub fn shared() -> HistoryResult<Rc<Self>> {
        Self::new().map(Rc::new)
    }

    fn history(&self) -> HistoryResult<web_sys::History> {
        self.window.history().map_err(platform("history"))
    }
}

fn platform(operation: &'static str) -> impl Fn(JsValue) -> HistoryError {
    move |err| HistoryError::Platform {
        operation,
        message: format!("{err:?}"),
    }
}

fn read_component(operation: &'static str, value: Result<String, JsValue>) -> String {
    value.unwrap_or_else(|err| {
        tracing::warn!(operation, error = ?err, "location component unavailable");
        String::new()
    })
}

fn state_to_js(state: Option<&HistoryState>) -> HistoryResult<JsValue> {
    match state {
        None => Ok(JsValue::NULL),
        Some(value) => {
            let json = serde_json::to_string(value)?;
            js_sys::JSON::parse(&json).map_err(platform("JSON.parse"))
        }
    }
}

fn state_from_js(value: JsValue) -> HistoryResult<Option<HistoryState>> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let json: String = js_sys::JSON::stringify(&value)
        .map_err(platform("JSON.stringify"))?
        .into();
    Ok(Some(serde_json::from_str(&json)?))
}

impl NavigationBackend for BrowserBackend {
    fn url(&self) -> UrlParts {
        let location = self.window.location();
        UrlParts::new(
            read_component("location.pathname", location.pathname()),
            read_component("location.search", location.search()),
            read_component("location.hash", location.hash()),
        )
    }

    fn state(&self) -> Option<HistoryState> {
        let state = self
            .history()
            .and_then(|history| history.state().map_err(platform("history.state")))
            .and_then(state_from_js);

        match state {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = %err, "history state unreadable; reporting none");
                None
            }
        }
    }

    fn push_state(&self, state: Option<&HistoryState>, href: &str) -> HistoryResult<()> {
        let data = state_to_js(state)?;
        self.history()?
            .push_state_with_url(&data, "", Some(href))
            .map_err(platform("history.pushState"))
    }

    fn replace_state(&self, state: Option<&HistoryState>, href: &str) -> HistoryResult<()> {
        let data = state_to_js(state)?;
        self.history()?
            .replace_state_with_url(&data, "", Some(href))
            .map_err(platform("history.replaceState"))
    }

    fn go(&self, delta: i32) -> HistoryResult<()> {
        self.history()?
            .go_with_delta(delta)
            .map_err(platform("history.go"))
    }

    fn back(&self) -> HistoryResult<()> {
        self.history()?.back().map_err(platform("history.back"))
    }

    fn forward(&self) -> HistoryResult<()> {
        self.history()?
            .forward()
            .map_err(platform("history.forward"))
    }

    fn add_native_listener(
        &self,
        events: NativeEvents,
        callback: NativeCallback,
    ) -> HistoryResult<ListenerId> {
        let mut closures = Vec::new();

        for event in events.event_names() {
            let callback = Rc::clone(&callback);
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                callback();
            }) as Box<dyn FnMut(web_sys::Event)>);

            let added = self
                .window
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());

            if let Err(err) = added {
                for (name, registered) in closures.drain(..) {
                    detach(&self.window, name, &registered);
                }
                return Err(platform("addEventListener")(err));
            }

            closures.push((event, closure));
        }

        let id = self
            .listeners
            .borrow_mut()
            .insert(Rc::new(BrowserListener { closures }));
        Ok(id)
    }

    fn remove_native_listener(&self, id: ListenerId) {
        let Some(listener) = self.listeners.borrow_mut().remove(id) else {
            return;
        };
        for (name, closure) in &listener.closures {
            detach(&self.window, name, closure);
        }
    }
}

fn detach(window: &web_sys::Window, event: &str, closure: &Closure<dyn FnMut(web_sys::Event)>) {
    if let Err(err) =
        window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!(event, error = ?err, "failed to remove native listener");
    }
}
