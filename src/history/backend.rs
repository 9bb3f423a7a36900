use std::rc::Rc;

use super::{HistoryResult, ListenerId};
use crate::path::UrlParts;
use crate::types::HistoryState;

bitflags::bitflags! {
    /// Platform events that announce a location change the router did not make itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NativeEvents: u8 {
        const POP_STATE = 1;
        const HASH_CHANGE = 1 << 1;
    }
}

impl NativeEvents {
    /// DOM event names, in dispatch order.
    pub fn event_names(self) -> impl Iterator<Item = &'static str> {
        [
            (NativeEvents::POP_STATE, "popstate"),
            (NativeEvents::HASH_CHANGE, "hashchange"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

pub type NativeCallback = Rc<dyn Fn()>;

/// The platform's session history: URL, entry state, traversal and native events.
///
/// `push_state`/`replace_state` take the final href (already shaped by the
/// history mode) and must not raise native events. `go` only schedules a
/// traversal; its effect is announced later through the native events.
pub trait NavigationBackend {
    fn url(&self) -> UrlParts;

    fn state(&self) -> Option<HistoryState>;

    fn push_state(&self, state: Option<&HistoryState>, href: &str) -> HistoryResult<()>;

    fn replace_state(&self, state: Option<&HistoryState>, href: &str) -> HistoryResult<()>;

    fn go(&self, delta: i32) -> HistoryResult<()>;

    fn back(&self) -> HistoryResult<()> {
        self.go(-1)
    }

    fn forward(&self) -> HistoryResult<()> {
        self.go(1)
    }

    fn add_native_listener(
        &self,
        events: NativeEvents,
        callback: NativeCallback,
    ) -> HistoryResult<ListenerId>;

    /// Unknown ids are ignored.
    fn remove_native_listener(&self, id: ListenerId);
}
