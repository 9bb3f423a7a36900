use serde::{Deserialize, Serialize};

use crate::types::HistoryState;

/// Snapshot of where the application currently is.
///
/// Always derived from the backend on request; holding one does not keep it
/// current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Query including its leading `?`, or empty.
    pub search: String,
    /// Fragment including its leading `#`, or empty. Always empty in fragment mode.
    pub hash: String,
    pub state: Option<HistoryState>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
            hash: String::new(),
            state: None,
        }
    }
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    pub fn with_state(mut self, state: Option<HistoryState>) -> Self {
        self.state = state;
        self
    }

    /// `pathname + search + hash`.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}
