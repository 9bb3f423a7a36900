use serde::Serialize;

use super::{PathSpec, RouteParams};
use crate::pattern::{CompiledPattern, PatternCache, global_cache};

/// Outcome of testing a pathname against a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub path: String,
    /// Matched URL with its trailing slash removed; the root stays `/`.
    pub url: String,
    pub is_exact: bool,
    pub params: RouteParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions<'a> {
    pub pattern: &'a str,
    pub exact: bool,
}

impl<'a> MatchOptions<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            exact: false,
        }
    }

    pub fn exact(mut self, value: bool) -> Self {
        self.exact = value;
        self
    }
}

impl<'a> From<&'a str> for MatchOptions<'a> {
    fn from(pattern: &'a str) -> Self {
        MatchOptions::new(pattern)
    }
}

pub fn match_path<'a>(pathname: &str, options: impl Into<MatchOptions<'a>>) -> Option<RouteMatch> {
    match_path_in(global_cache(), pathname, options.into())
}

/// Matches `pathname` against one pattern, compiling through `cache`.
///
/// Returns `None` when the pattern does not fit, when a parameter would be
/// empty, or when `exact` is requested and the match is not exact.
#[tracing::instrument(
    level = "trace",
    skip(cache, pathname, options),
    fields(pattern = %options.pattern, pathname = %pathname, exact = options.exact)
)]
pub fn match_path_in(
    cache: &PatternCache,
    pathname: &str,
    options: MatchOptions<'_>,
) -> Option<RouteMatch> {
    let compiled = match cache.get_or_compile(options.pattern) {
        Ok(compiled) => compiled,
        Err(err) => {
            tracing::warn!(error = %err, "route pattern rejected by the matcher; treating as no match");
            return None;
        }
    };

    evaluate(&compiled, pathname, options.exact)
}

fn evaluate(compiled: &CompiledPattern, pathname: &str, exact: bool) -> Option<RouteMatch> {
    let (matched, values) = compiled.captures(pathname)?;

    let mut params = RouteParams::new();
    for (key, value) in compiled.keys().iter().zip(values) {
        params.insert(key.as_str(), value);
    }

    let trimmed = matched.strip_suffix('/').unwrap_or(matched);
    let is_exact = pathname == matched || pathname == trimmed;

    if exact && !is_exact {
        return None;
    }

    Some(RouteMatch {
        path: compiled.source().to_string(),
        url: if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        },
        is_exact,
        params,
    })
}

pub fn match_any<S: AsRef<str>>(pathname: &str, patterns: &[S], exact: bool) -> Option<RouteMatch> {
    match_any_in(global_cache(), pathname, patterns, exact)
}

pub fn match_any_in<S: AsRef<str>>(
    cache: &PatternCache,
    pathname: &str,
    patterns: &[S],
    exact: bool,
) -> Option<RouteMatch> {
    patterns.iter().find_map(|pattern| {
        match_path_in(cache, pathname, MatchOptions::new(pattern.as_ref()).exact(exact))
    })
}

/// Matches against an optional spec. `None` and an empty single pattern are
/// the catch-all; an empty list never matches.
pub fn match_spec(pathname: &str, spec: Option<&PathSpec>, exact: bool) -> Option<RouteMatch> {
    match_spec_in(global_cache(), pathname, spec, exact)
}

pub fn match_spec_in(
    cache: &PatternCache,
    pathname: &str,
    spec: Option<&PathSpec>,
    exact: bool,
) -> Option<RouteMatch> {
    match spec {
        Some(PathSpec::One(pattern)) if pattern.is_empty() => Some(catch_all(pathname)),
        Some(spec) => match_any_in(cache, pathname, spec.patterns(), exact),
        None => Some(catch_all(pathname)),
    }
}

pub fn catch_all(pathname: &str) -> RouteMatch {
    RouteMatch {
        path: "/".to_string(),
        url: pathname.to_string(),
        is_exact: true,
        params: RouteParams::new(),
    }
}
