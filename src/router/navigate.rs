use crate::types::HistoryState;

/// Where [`Router::navigate`](super::Router::navigate) should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateTarget {
    /// Relative traversal through the session history.
    Delta(i32),
    /// Absolute path (and optional query) to push or replace.
    Path(String),
}

impl From<i32> for NavigateTarget {
    fn from(value: i32) -> Self {
        NavigateTarget::Delta(value)
    }
}

impl From<&str> for NavigateTarget {
    fn from(value: &str) -> Self {
        NavigateTarget::Path(value.to_string())
    }
}

impl From<String> for NavigateTarget {
    fn from(value: String) -> Self {
        NavigateTarget::Path(value)
    }
}

impl From<&String> for NavigateTarget {
    fn from(value: &String) -> Self {
        NavigateTarget::Path(value.clone())
    }
}

/// Ignored for [`NavigateTarget::Delta`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateOptions {
    pub replace: bool,
    pub state: Option<HistoryState>,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self {
            replace: true,
            state: None,
        }
    }

    pub fn with_state(mut self, state: HistoryState) -> Self {
        self.state = Some(state);
        self
    }
}
