use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' compiles to a matcher larger than the {limit} byte limit")]
    MatcherTooLarge { pattern: String, limit: usize },
    #[error("pattern '{pattern}' could not be compiled: {message}")]
    Matcher { pattern: String, message: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
