use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::history::{
    History, ListenerId, ListenerRegistry, Location, NativeSubscription, NavigationBackend,
    Unlisten,
};
use crate::matcher::{PathSpec, RouteMatch, match_spec_in};
use crate::pattern::PatternCache;
use crate::router::{
    NavigateOptions, NavigateTarget, RouterContext, RouterOptions, RouterResult, SearchParams,
    Switch, SwitchMatch,
};

pub(crate) type LocationListener = dyn Fn(&Location);

pub(crate) struct RouterState {
    history: History,
    location: RefCell<Location>,
    generation: Cell<u64>,
    subscribers: RefCell<ListenerRegistry<LocationListener>>,
    patterns: PatternCache,
    options: RouterOptions,
}

impl RouterState {
    /// Re-reads the location and hands it to every subscriber.
    ///
    /// A refresh started from inside a subscriber supersedes the one that
    /// triggered it; the outer pass stops so nobody sees a stale location last.
    fn refresh(&self) {
        let next = self.history.location();
        tracing::trace!(pathname = %next.pathname, search = %next.search, "location refreshed");
        *self.location.borrow_mut() = next.clone();

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let subscribers = self.subscribers.borrow().snapshot();
        for (id, subscriber) in subscribers {
            if self.generation.get() != generation {
                break;
            }
            if !self.subscribers.borrow().contains(id) {
                continue;
            }
            subscriber(&next);
        }
    }

    pub(crate) fn location(&self) -> Location {
        self.location.borrow().clone()
    }

    pub(crate) fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn navigate(&self, target: NavigateTarget, options: NavigateOptions) -> RouterResult<()> {
        match target {
            NavigateTarget::Delta(delta) => self.history.go(delta)?,
            NavigateTarget::Path(path) if options.replace => {
                self.history.replace(&path, options.state)?
            }
            NavigateTarget::Path(path) => self.history.push(&path, options.state)?,
        }
        Ok(())
    }

    pub(crate) fn route_match(&self, spec: Option<&PathSpec>, exact: bool) -> Option<RouteMatch> {
        let pathname = self.location.borrow().pathname.clone();
        match_spec_in(&self.patterns, &pathname, spec, exact)
    }

    pub(crate) fn search_params(&self) -> SearchParams {
        SearchParams::parse(&self.location.borrow().search)
    }

    pub(crate) fn set_search_params(&self, params: &SearchParams) -> RouterResult<()> {
        let pathname = self.location.borrow().pathname.clone();
        let query = params.to_query_string();
        let target = if query.is_empty() {
            pathname
        } else {
            format!("{pathname}?{query}")
        };
        self.history.replace(&target, None)?;
        Ok(())
    }

    pub(crate) fn subscribe(
        self: &Rc<Self>,
        subscriber: impl Fn(&Location) + 'static,
    ) -> LocationSubscription {
        let id = self.subscribers.borrow_mut().insert(Rc::new(subscriber));
        LocationSubscription {
            state: Rc::downgrade(self),
            id,
        }
    }
}

/// Navigation coordinator: owns the current location and keeps it in sync
/// with the history.
///
/// Dropping the router detaches it from the history and from the native
/// events. Outstanding [`RouterContext`]s report
/// [`RouterError::NoActiveRouter`](super::RouterError::NoActiveRouter) from then on.
pub struct Router {
    state: Rc<RouterState>,
    unlisten: Unlisten,
    native: NativeSubscription,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("mode", &self.state.history.mode())
            .field("location", &*self.state.location.borrow())
            .field("subscribers", &self.state.subscribers.borrow().len())
            .finish()
    }
}

impl Router {
    pub fn new(backend: Rc<dyn NavigationBackend>, options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        let history =
            History::with_pathname_normalization(backend, options.mode, options.normalize_pathname);
        Self::activate(history, options)
    }

    /// Coordinates an existing history; its mode and pathname normalization
    /// override the ones in `options`.
    pub fn with_history(history: History, mut options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        options.mode = history.mode();
        options.normalize_pathname = history.normalizes_pathname();
        Self::activate(history, options)
    }

    #[cfg(feature = "web")]
    pub fn browser(options: RouterOptions) -> RouterResult<Self> {
        let backend = crate::history::BrowserBackend::shared()?;
        Self::new(backend, options)
    }

    fn activate(history: History, options: RouterOptions) -> RouterResult<Self> {
        let state = Rc::new(RouterState {
            location: RefCell::new(history.location()),
            generation: Cell::new(0),
            subscribers: RefCell::new(ListenerRegistry::new()),
            patterns: PatternCache::new(options.pattern_cache_capacity),
            history,
            options,
        });

        let unlisten = state.history.listen(refresh_on_change(Rc::downgrade(&state)));
        let native = match state
            .history
            .listen_native(refresh_on_change(Rc::downgrade(&state)))
        {
            Ok(native) => native,
            Err(err) => {
                unlisten.unlisten();
                return Err(err.into());
            }
        };

        tracing::debug!(
            mode = ?state.options.mode,
            pathname = %state.location.borrow().pathname,
            "router activated"
        );

        Ok(Self {
            state,
            unlisten,
            native,
        })
    }

    pub fn location(&self) -> Location {
        self.state.location()
    }

    pub fn history(&self) -> &History {
        self.state.history()
    }

    pub fn options(&self) -> &RouterOptions {
        &self.state.options
    }

    pub fn patterns(&self) -> &PatternCache {
        &self.state.patterns
    }

    /// A number traverses; a path pushes, or replaces when `options.replace` is set.
    pub fn navigate(
        &self,
        target: impl Into<NavigateTarget>,
        options: NavigateOptions,
    ) -> RouterResult<()> {
        self.state.navigate(target.into(), options)
    }

    pub fn subscribe(&self, subscriber: impl Fn(&Location) + 'static) -> LocationSubscription {
        self.state.subscribe(subscriber)
    }

    pub fn route_match(&self, spec: Option<&PathSpec>, exact: bool) -> Option<RouteMatch> {
        self.state.route_match(spec, exact)
    }

    pub fn select<'s, T>(&self, switch: &'s Switch<T>) -> Option<SwitchMatch<'s, T>> {
        let pathname = self.state.location.borrow().pathname.clone();
        switch.find_in(&self.state.patterns, &pathname)
    }

    pub fn search_params(&self) -> SearchParams {
        self.state.search_params()
    }

    /// Replaces the current entry with the same pathname and `params` as its query.
    pub fn set_search_params(&self, params: &SearchParams) -> RouterResult<()> {
        self.state.set_search_params(params)
    }

    pub fn context(&self) -> RouterContext {
        RouterContext::attached(Rc::downgrade(&self.state))
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscribers.borrow().len()
    }
}

impl Drop for Router {
    fn drop(&mut self) {
        self.unlisten.unlisten();
        self.native.remove();
        tracing::debug!(mode = ?self.state.options.mode, "router detached");
    }
}

fn refresh_on_change(state: Weak<RouterState>) -> impl Fn() + 'static {
    move || {
        if let Some(state) = state.upgrade() {
            state.refresh();
        }
    }
}

#[derive(Debug)]
pub struct LocationSubscription {
    state: Weak<RouterState>,
    id: ListenerId,
}

impl LocationSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn unsubscribe(&self) {
        if let Some(state) = self.state.upgrade() {
            state.subscribers.borrow_mut().remove(self.id);
        }
    }
}
