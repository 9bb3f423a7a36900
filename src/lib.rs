pub mod history;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod router;
pub mod types;

#[cfg(feature = "web")]
pub use history::BrowserBackend;
pub use history::{
    History, HistoryError, HistoryMode, HistoryResult, Location, MemoryBackend, NavigationBackend,
};
pub use matcher::{MatchOptions, PathSpec, RouteMatch, RouteParams, match_any, match_path};
pub use pattern::{CompiledPattern, PatternError, compile_path};
pub use router::{
    LocationSubscription, NavigateOptions, NavigateTarget, RouteOptions, Router, RouterContext,
    RouterError, RouterOptions, RouterResult, SearchParams, Switch, SwitchMatch,
};
pub use types::HistoryState;
