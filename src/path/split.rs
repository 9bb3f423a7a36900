use memchr::memchr;
use serde::{Deserialize, Serialize};

/// The three raw components of a URL path reference.
///
/// `search` keeps its leading `?` and `hash` its leading `#`; either is empty
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlParts {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl UrlParts {
    pub fn new(
        pathname: impl Into<String>,
        search: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            hash: hash.into(),
        }
    }

    /// Reassembles `pathname + search + hash`.
    pub fn href(&self) -> String {
        let mut out =
            String::with_capacity(self.pathname.len() + self.search.len() + self.hash.len());
        out.push_str(&self.pathname);
        out.push_str(&self.search);
        out.push_str(&self.hash);
        out
    }
}

/// Splits `path?query#fragment` at the first `#` and then at the first `?`
/// before it.
#[tracing::instrument(level = "trace", skip(href), fields(href_len = href.len() as u64))]
pub fn split_url(href: &str) -> UrlParts {
    let bytes = href.as_bytes();
    let (before_hash, hash) = match memchr(b'#', bytes) {
        Some(pos) => (&href[..pos], &href[pos..]),
        None => (href, ""),
    };
    let (pathname, search) = split_query(before_hash);

    UrlParts::new(pathname, search, hash)
}

/// Splits at the first `?`; the second half keeps the `?`.
#[inline]
pub fn split_query(value: &str) -> (&str, &str) {
    match memchr(b'?', value.as_bytes()) {
        Some(pos) => (&value[..pos], &value[pos..]),
        None => (value, ""),
    }
}
