mod cache;
mod compiled;
mod error;
mod lexer;

pub use cache::{CacheStats, DEFAULT_PATTERN_CACHE_CAPACITY, PatternCache, global_cache};
pub use compiled::{CompiledPattern, MAX_MATCHER_SIZE, PARAM_CAPTURE, PatternCaptures, compile_path};
pub use error::{PatternError, PatternResult};
pub use lexer::{PatternToken, strip_outer_slashes, tokenize};
