use std::rc::{Rc, Weak};

use crate::history::{History, Location};
use crate::matcher::{PathSpec, RouteMatch, RouteParams};

use super::service::{LocationSubscription, RouterState};
use super::{NavigateOptions, NavigateTarget, RouterError, RouterResult, SearchParams};

/// Non-owning handle to a [`Router`](super::Router), handed to code that
/// needs routing data but does not own the router.
///
/// Every accessor fails with [`RouterError::NoActiveRouter`] once the router
/// has been dropped, or when the handle was created with
/// [`RouterContext::detached`].
#[derive(Debug, Clone, Default)]
pub struct RouterContext {
    state: Weak<RouterState>,
}

impl RouterContext {
    pub(crate) fn attached(state: Weak<RouterState>) -> Self {
        Self { state }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.strong_count() > 0
    }

    fn state(&self, operation: &'static str) -> RouterResult<Rc<RouterState>> {
        self.state.upgrade().ok_or_else(|| {
            tracing::warn!(operation, "routing data requested outside an active router");
            RouterError::NoActiveRouter { operation }
        })
    }

    pub fn location(&self) -> RouterResult<Location> {
        Ok(self.state("location")?.location())
    }

    pub fn history(&self) -> RouterResult<History> {
        Ok(self.state("history")?.history().clone())
    }

    pub fn navigate(
        &self,
        target: impl Into<NavigateTarget>,
        options: NavigateOptions,
    ) -> RouterResult<()> {
        self.state("navigate")?.navigate(target.into(), options)
    }

    pub fn route_match(
        &self,
        spec: Option<&PathSpec>,
        exact: bool,
    ) -> RouterResult<Option<RouteMatch>> {
        Ok(self.state("route_match")?.route_match(spec, exact))
    }

    /// Parameters of `spec` against the current pathname; empty when it does not match.
    pub fn params(&self, spec: &PathSpec) -> RouterResult<RouteParams> {
        Ok(self
            .state("params")?
            .route_match(Some(spec), false)
            .map(|route_match| route_match.params)
            .unwrap_or_default())
    }

    pub fn search_params(&self) -> RouterResult<SearchParams> {
        Ok(self.state("search_params")?.search_params())
    }

    pub fn set_search_params(&self, params: &SearchParams) -> RouterResult<()> {
        self.state("set_search_params")?.set_search_params(params)
    }

    pub fn subscribe(
        &self,
        subscriber: impl Fn(&Location) + 'static,
    ) -> RouterResult<LocationSubscription> {
        Ok(self.state("subscribe")?.subscribe(subscriber))
    }
}
