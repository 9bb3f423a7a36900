use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::HistoryMode;
use crate::matcher::PathSpec;
use crate::pattern::DEFAULT_PATTERN_CACHE_CAPACITY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterOptions {
    pub mode: HistoryMode,
    pub pattern_cache_capacity: usize,
    pub normalize_pathname: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            mode: HistoryMode::default(),
            pattern_cache_capacity: DEFAULT_PATTERN_CACHE_CAPACITY,
            normalize_pathname: true,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.pattern_cache_capacity == 0 {
            return Err(RouterOptionsError::PatternCacheCapacityInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn mode(mut self, value: HistoryMode) -> Self {
        self.options.mode = value;
        self
    }

    pub fn pattern_cache_capacity(mut self, value: usize) -> Self {
        self.options.pattern_cache_capacity = value;
        self
    }

    pub fn normalize_pathname(mut self, value: bool) -> Self {
        self.options.normalize_pathname = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("pattern_cache_capacity must be at least 1 (got {provided})")]
    PatternCacheCapacityInvalid { provided: usize },
}

/// Declaration of one entry in a [`Switch`](super::Switch).
///
/// No `path`, or an empty one, means the entry matches every location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteOptions {
    pub path: Option<PathSpec>,
    pub exact: bool,
}

impl RouteOptions {
    pub fn builder() -> RouteOptionsBuilder {
        RouteOptionsBuilder::default()
    }

    pub fn path(path: impl Into<PathSpec>) -> Self {
        Self {
            path: Some(path.into()),
            exact: false,
        }
    }

    pub fn exact(path: impl Into<PathSpec>) -> Self {
        Self {
            path: Some(path.into()),
            exact: true,
        }
    }

    pub fn fallback() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouteOptionsBuilder {
    options: RouteOptions,
}

impl RouteOptionsBuilder {
    pub fn path(mut self, path: impl Into<PathSpec>) -> Self {
        self.options.path = Some(path.into());
        self
    }

    pub fn exact(mut self, value: bool) -> Self {
        self.options.exact = value;
        self
    }

    pub fn build(self) -> RouteOptions {
        self.options
    }
}
