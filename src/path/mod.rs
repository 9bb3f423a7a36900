mod normalize;
mod split;

pub use normalize::{ensure_leading_slash, normalize_path};
pub use split::{UrlParts, split_query, split_url};
