use crate::matcher::{RouteMatch, match_spec_in};
use crate::pattern::{PatternCache, global_cache};

use super::RouteOptions;

#[derive(Debug, Clone)]
struct SwitchRoute<T> {
    options: RouteOptions,
    value: T,
}

/// Ordered route table where the first matching entry wins.
///
/// An entry declared without a path (or with an empty one) matches every
/// pathname, so it only makes sense last.
#[derive(Debug, Clone)]
pub struct Switch<T> {
    routes: Vec<SwitchRoute<T>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchMatch<'s, T> {
    pub index: usize,
    pub value: &'s T,
    pub route_match: RouteMatch,
}

impl<T> Default for Switch<T> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T> Switch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, options: RouteOptions, value: T) -> Self {
        self.add(options, value);
        self
    }

    pub fn fallback(self, value: T) -> Self {
        self.route(RouteOptions::fallback(), value)
    }

    /// Returns the position of the new entry.
    pub fn add(&mut self, options: RouteOptions, value: T) -> usize {
        self.routes.push(SwitchRoute { options, value });
        self.routes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn find(&self, pathname: &str) -> Option<SwitchMatch<'_, T>> {
        self.find_in(global_cache(), pathname)
    }

    #[tracing::instrument(level = "trace", skip(self, cache, pathname), fields(pathname = %pathname, routes = self.routes.len()))]
    pub fn find_in(&self, cache: &PatternCache, pathname: &str) -> Option<SwitchMatch<'_, T>> {
        self.routes.iter().enumerate().find_map(|(index, route)| {
            match_spec_in(cache, pathname, route.options.path.as_ref(), route.options.exact).map(
                |route_match| SwitchMatch {
                    index,
                    value: &route.value,
                    route_match,
                },
            )
        })
    }
}
