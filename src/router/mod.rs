mod context;
mod errors;
mod navigate;
mod options;
mod search;
mod service;
mod switch;

pub use context::RouterContext;
pub use errors::{RouterError, RouterResult};
pub use navigate::{NavigateOptions, NavigateTarget};
pub use options::{
    RouteOptions, RouteOptionsBuilder, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use search::SearchParams;
pub use service::{LocationSubscription, Router};
pub use switch::{Switch, SwitchMatch};
