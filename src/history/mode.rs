use serde::{Deserialize, Serialize};

use super::{Location, NativeEvents};
use crate::path::{UrlParts, split_query};
use crate::types::HistoryState;

/// Which part of the URL carries the router's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryMode {
    /// The real URL path, query and fragment.
    #[default]
    Path,
    /// Everything after `#`, read as `pathname[?search]`.
    Fragment,
}

impl HistoryMode {
    /// Native event that reports traversals in this mode.
    pub fn native_events(self) -> NativeEvents {
        match self {
            HistoryMode::Path => NativeEvents::POP_STATE,
            HistoryMode::Fragment => NativeEvents::HASH_CHANGE,
        }
    }

    /// Builds the router's view of the backend URL. The pathname is returned raw.
    pub fn read_location(self, url: &UrlParts, state: Option<HistoryState>) -> Location {
        match self {
            HistoryMode::Path => Location {
                pathname: if url.pathname.is_empty() {
                    "/".to_string()
                } else {
                    url.pathname.clone()
                },
                search: url.search.clone(),
                hash: url.hash.clone(),
                state,
            },
            HistoryMode::Fragment => {
                let fragment = url.hash.strip_prefix('#').unwrap_or(&url.hash);
                let fragment = if fragment.is_empty() { "/" } else { fragment };
                let (pathname, search) = split_query(fragment);

                Location {
                    pathname: pathname.to_string(),
                    search: search.to_string(),
                    hash: String::new(),
                    state,
                }
            }
        }
    }

    /// The href handed to the backend when navigating to `path`.
    pub fn href_for(self, path: &str) -> String {
        match self {
            HistoryMode::Path => path.to_string(),
            HistoryMode::Fragment => format!("#{path}"),
        }
    }
}
