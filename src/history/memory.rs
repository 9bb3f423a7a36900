use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use url::Url;

use super::{
    HistoryError, HistoryResult, ListenerId, ListenerRegistry, NativeCallback, NativeEvents,
    NavigationBackend,
};
use crate::path::UrlParts;
use crate::types::HistoryState;

const MEMORY_ORIGIN: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq)]
struct MemoryEntry {
    url: UrlParts,
    state: Option<HistoryState>,
}

#[derive(Debug)]
struct MemoryStack {
    entries: Vec<MemoryEntry>,
    index: usize,
}

impl MemoryStack {
    fn current(&self) -> &MemoryEntry {
        &self.entries[self.index]
    }

    fn push(&mut self, entry: MemoryEntry) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, entry: MemoryEntry) {
        self.entries[self.index] = entry;
    }
}

struct NativeListener {
    events: NativeEvents,
    callback: NativeCallback,
}

/// Session history kept in process memory.
///
/// Behaves like a browser tab: `push_state`/`replace_state` apply at once and
/// stay silent, while `go` is only queued. Queued traversals settle when
/// [`MemoryBackend::flush`] runs, which stands in for the next turn of the
/// event loop and raises `popstate` (and `hashchange` when the fragment
/// differs). Every history handle built over the same backend shares its
/// entries and native listeners.
pub struct MemoryBackend {
    stack: RefCell<MemoryStack>,
    pending: RefCell<VecDeque<i32>>,
    listeners: RefCell<ListenerRegistry<NativeListener>>,
}

impl std::fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stack = self.stack.borrow();
        f.debug_struct("MemoryBackend")
            .field("entries", &stack.entries.len())
            .field("index", &stack.index)
            .field("pending", &self.pending.borrow().len())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::with_entry(UrlParts::new("/", "", ""))
    }
}

impl MemoryBackend {
    /// Starts a session whose first entry is `initial_href`, resolved against `/`.
    pub fn new(initial_href: &str) -> HistoryResult<Self> {
        let url = resolve_href(&UrlParts::new("/", "", ""), initial_href)?;
        Ok(Self::with_entry(url))
    }

    pub fn shared(initial_href: &str) -> HistoryResult<Rc<Self>> {
        Self::new(initial_href).map(Rc::new)
    }

    fn with_entry(url: UrlParts) -> Self {
        Self {
            stack: RefCell::new(MemoryStack {
                entries: vec![MemoryEntry { url, state: None }],
                index: 0,
            }),
            pending: RefCell::new(VecDeque::new()),
            listeners: RefCell::new(ListenerRegistry::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.stack.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> usize {
        self.stack.borrow().index
    }

    pub fn current_href(&self) -> String {
        self.stack.borrow().current().url.href()
    }

    pub fn pending_traversals(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn native_listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Settles every queued traversal in order and raises its native events.
    ///
    /// Traversals that would leave the entry list, and `go(0)`, are dropped.
    /// Returns how many traversals moved the session.
    pub fn flush(&self) -> usize {
        let mut settled = 0usize;

        loop {
            let Some(delta) = self.pending.borrow_mut().pop_front() else {
                break;
            };

            let moved = {
                let mut stack = self.stack.borrow_mut();
                let target = stack.index as i64 + i64::from(delta);
                if delta == 0 || target < 0 || target >= stack.entries.len() as i64 {
                    None
                } else {
                    let previous_hash = stack.current().url.hash.clone();
                    stack.index = target as usize;
                    Some(previous_hash != stack.current().url.hash)
                }
            };

            match moved {
                Some(hash_changed) => {
                    tracing::trace!(delta, hash_changed, "memory traversal settled");
                    settled += 1;
                    self.dispatch(NativeEvents::POP_STATE);
                    if hash_changed {
                        self.dispatch(NativeEvents::HASH_CHANGE);
                    }
                }
                None => {
                    tracing::trace!(delta, "memory traversal out of range; ignored");
                }
            }
        }

        settled
    }

    /// Navigation that did not come from the router, such as editing the
    /// address bar fragment or following an in-page anchor.
    ///
    /// Pushes a new entry without state and raises `popstate`, then
    /// `hashchange` when the fragment changed.
    pub fn visit(&self, href: &str) -> HistoryResult<()> {
        let hash_changed = {
            let mut stack = self.stack.borrow_mut();
            let url = resolve_href(&stack.current().url, href)?;
            let hash_changed = url.hash != stack.current().url.hash;
            stack.push(MemoryEntry { url, state: None });
            hash_changed
        };

        self.dispatch(NativeEvents::POP_STATE);
        if hash_changed {
            self.dispatch(NativeEvents::HASH_CHANGE);
        }
        Ok(())
    }

    fn dispatch(&self, event: NativeEvents) {
        let targets = self.listeners.borrow().snapshot();
        for (id, listener) in targets {
            if !listener.events.intersects(event) {
                continue;
            }
            if !self.listeners.borrow().contains(id) {
                continue;
            }
            (listener.callback)();
        }
    }

    fn resolve_entry(
        &self,
        state: Option<&HistoryState>,
        href: &str,
    ) -> HistoryResult<MemoryEntry> {
        let url = resolve_href(&self.stack.borrow().current().url, href)?;
        Ok(MemoryEntry {
            url,
            state: state.cloned(),
        })
    }
}

impl NavigationBackend for MemoryBackend {
    fn url(&self) -> UrlParts {
        self.stack.borrow().current().url.clone()
    }

    fn state(&self) -> Option<HistoryState> {
        self.stack.borrow().current().state.clone()
    }

    fn push_state(&self, state: Option<&HistoryState>, href: &str) -> HistoryResult<()> {
        let entry = self.resolve_entry(state, href)?;
        self.stack.borrow_mut().push(entry);
        Ok(())
    }

    fn replace_state(&self, state: Option<&HistoryState>, href: &str) -> HistoryResult<()> {
        let entry = self.resolve_entry(state, href)?;
        self.stack.borrow_mut().replace(entry);
        Ok(())
    }

    fn go(&self, delta: i32) -> HistoryResult<()> {
        self.pending.borrow_mut().push_back(delta);
        Ok(())
    }

    fn add_native_listener(
        &self,
        events: NativeEvents,
        callback: NativeCallback,
    ) -> HistoryResult<ListenerId> {
        let id = self
            .listeners
            .borrow_mut()
            .insert(Rc::new(NativeListener { events, callback }));
        Ok(id)
    }

    fn remove_native_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(id);
    }
}

/// Resolves `href` the way a browser resolves a `pushState` URL against the
/// current document URL.
fn resolve_href(current: &UrlParts, href: &str) -> HistoryResult<UrlParts> {
    let invalid = |err: url::ParseError| HistoryError::InvalidUrl {
        href: href.to_string(),
        message: err.to_string(),
    };

    let base = Url::parse(&format!("{MEMORY_ORIGIN}{}", current.href())).map_err(invalid)?;
    let joined = base.join(href).map_err(invalid)?;

    if joined.origin() != base.origin() {
        return Err(HistoryError::CrossOrigin {
            href: href.to_string(),
        });
    }

    let search = match joined.query() {
        Some(query) if !query.is_empty() => format!("?{query}"),
        _ => String::new(),
    };
    let hash = match joined.fragment() {
        Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
        _ => String::new(),
    };

    Ok(UrlParts::new(joined.path(), search, hash))
}
