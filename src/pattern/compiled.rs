use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

use super::lexer::{PatternToken, strip_outer_slashes, tokenize};
use super::{PatternError, PatternResult};

/// Capture group emitted for every `:name` parameter: one or more non-slash characters.
pub const PARAM_CAPTURE: &str = "([^/]+)";

/// Upper bound on the compiled matcher size, in bytes.
pub const MAX_MATCHER_SIZE: usize = 1 << 20;

/// Matched text followed by one captured value per key, in key order.
pub type PatternCaptures<'p> = SmallVec<[&'p str; 4]>;

/// A route pattern compiled into an anchored matcher plus its ordered keys.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    keys: Vec<String>,
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.keys == other.keys
            && self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for CompiledPattern {}

impl CompiledPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, pathname: &str) -> bool {
        self.regex.is_match(pathname)
    }

    pub fn captures<'p>(&self, pathname: &'p str) -> Option<(&'p str, PatternCaptures<'p>)> {
        let caps = self.regex.captures(pathname)?;
        let matched = caps.get(0)?.as_str();

        let mut values = PatternCaptures::new();
        for index in 1..=self.keys.len() {
            values.push(caps.get(index)?.as_str());
        }

        Some((matched, values))
    }
}

/// Compiles `pattern` into an anchored matcher.
///
/// One trailing and one leading slash are stripped, then the body is wrapped
/// as `^/<body>/?$`. Literal text is escaped; each `:name` becomes
/// [`PARAM_CAPTURE`]. The only failure is a matcher exceeding
/// [`MAX_MATCHER_SIZE`].
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn compile_path(pattern: &str) -> PatternResult<CompiledPattern> {
    let body = strip_outer_slashes(pattern);
    let mut expr = String::with_capacity(body.len() + 16);
    let mut keys = Vec::new();

    expr.push_str("^/");
    for token in tokenize(body) {
        match token {
            PatternToken::Literal(lit) => expr.push_str(&regex::escape(&lit)),
            PatternToken::Param(name) => {
                expr.push_str(PARAM_CAPTURE);
                keys.push(name);
            }
        }
    }
    expr.push_str("/?$");

    let regex = RegexBuilder::new(&expr)
        .size_limit(MAX_MATCHER_SIZE)
        .build()
        .map_err(|err| match err {
            regex::Error::CompiledTooBig(limit) => PatternError::MatcherTooLarge {
                pattern: pattern.to_string(),
                limit,
            },
            other => PatternError::Matcher {
                pattern: pattern.to_string(),
                message: other.to_string(),
            },
        })?;

    Ok(CompiledPattern {
        source: pattern.to_string(),
        regex,
        keys,
    })
}
