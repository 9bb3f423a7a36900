use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::{
    HistoryMode, HistoryResult, ListenerId, ListenerRegistry, Location, NavigationBackend,
};
use crate::path::{ensure_leading_slash, normalize_path};
use crate::types::HistoryState;

struct HistoryInner {
    backend: Rc<dyn NavigationBackend>,
    mode: HistoryMode,
    normalize_pathname: bool,
    listeners: RefCell<ListenerRegistry<dyn Fn()>>,
}

/// Uniform handle over a navigation backend in path or fragment mode.
///
/// Cloning is cheap and every clone shares the same listener registry.
#[derive(Clone)]
pub struct History {
    inner: Rc<HistoryInner>,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("mode", &self.inner.mode)
            .field("normalize_pathname", &self.inner.normalize_pathname)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl History {
    pub fn new(backend: Rc<dyn NavigationBackend>, mode: HistoryMode) -> Self {
        Self::with_pathname_normalization(backend, mode, true)
    }

    /// Like [`History::new`]; `normalize` controls whether pathnames read from
    /// the backend go through [`normalize_path`].
    pub fn with_pathname_normalization(
        backend: Rc<dyn NavigationBackend>,
        mode: HistoryMode,
        normalize: bool,
    ) -> Self {
        Self {
            inner: Rc::new(HistoryInner {
                backend,
                mode,
                normalize_pathname: normalize,
                listeners: RefCell::new(ListenerRegistry::new()),
            }),
        }
    }

    pub fn path_based(backend: Rc<dyn NavigationBackend>) -> Self {
        Self::new(backend, HistoryMode::Path)
    }

    pub fn fragment_based(backend: Rc<dyn NavigationBackend>) -> Self {
        Self::new(backend, HistoryMode::Fragment)
    }

    pub fn mode(&self) -> HistoryMode {
        self.inner.mode
    }

    pub fn normalizes_pathname(&self) -> bool {
        self.inner.normalize_pathname
    }

    pub fn backend(&self) -> &Rc<dyn NavigationBackend> {
        &self.inner.backend
    }

    /// Reads a fresh location from the backend.
    pub fn location(&self) -> Location {
        let backend = &self.inner.backend;
        let mut location = self
            .inner
            .mode
            .read_location(&backend.url(), backend.state());

        if self.inner.normalize_pathname {
            location.pathname = ensure_leading_slash(&normalize_path(&location.pathname));
        }

        location
    }

    /// Adds an entry and notifies every listener before returning.
    pub fn push(&self, path: &str, state: Option<HistoryState>) -> HistoryResult<()> {
        let href = self.inner.mode.href_for(path);
        tracing::debug!(mode = ?self.inner.mode, href = %href, "history push");

        self.inner.backend.push_state(state.as_ref(), &href)?;
        self.notify();
        Ok(())
    }

    /// Overwrites the current entry and notifies every listener before returning.
    pub fn replace(&self, path: &str, state: Option<HistoryState>) -> HistoryResult<()> {
        let href = self.inner.mode.href_for(path);
        tracing::debug!(mode = ?self.inner.mode, href = %href, "history replace");

        self.inner.backend.replace_state(state.as_ref(), &href)?;
        self.notify();
        Ok(())
    }

    /// Requests a traversal. Listeners are not notified; the change arrives
    /// through the native event.
    pub fn go(&self, delta: i32) -> HistoryResult<()> {
        tracing::debug!(delta, "history go");
        self.inner.backend.go(delta)
    }

    pub fn back(&self) -> HistoryResult<()> {
        tracing::debug!("history back");
        self.inner.backend.back()
    }

    pub fn forward(&self) -> HistoryResult<()> {
        tracing::debug!("history forward");
        self.inner.backend.forward()
    }

    /// Registers `listener` for push/replace notifications.
    pub fn listen(&self, listener: impl Fn() + 'static) -> Unlisten {
        let id = self.inner.listeners.borrow_mut().insert(Rc::new(listener));
        Unlisten {
            history: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Subscribes to the backend's native event for this mode
    /// (`popstate` or `hashchange`).
    pub fn listen_native(&self, listener: impl Fn() + 'static) -> HistoryResult<NativeSubscription> {
        let id = self
            .inner
            .backend
            .add_native_listener(self.inner.mode.native_events(), Rc::new(listener))?;

        Ok(NativeSubscription {
            backend: Rc::downgrade(&self.inner.backend),
            id,
            active: Cell::new(true),
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        let listeners = self.inner.listeners.borrow().snapshot();
        for (id, listener) in listeners {
            if !self.inner.listeners.borrow().contains(id) {
                continue;
            }
            listener();
        }
    }
}

/// Removes a [`History::listen`] registration. Calling it more than once is harmless.
#[derive(Debug)]
pub struct Unlisten {
    history: Weak<HistoryInner>,
    id: ListenerId,
}

impl Unlisten {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn unlisten(&self) {
        if let Some(inner) = self.history.upgrade() {
            inner.listeners.borrow_mut().remove(self.id);
        }
    }
}

/// Removes a [`History::listen_native`] registration. Calling it more than once is harmless.
#[derive(Debug)]
pub struct NativeSubscription {
    backend: Weak<dyn NavigationBackend>,
    id: ListenerId,
    active: Cell<bool>,
}

impl NativeSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn remove(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(backend) = self.backend.upgrade() {
            backend.remove_native_listener(self.id);
        }
    }
}
