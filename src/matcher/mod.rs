mod params;
mod resolver;
mod spec;

pub use params::RouteParams;
pub use resolver::{
    MatchOptions, RouteMatch, catch_all, match_any, match_any_in, match_path, match_path_in,
    match_spec, match_spec_in,
};
pub use spec::PathSpec;
