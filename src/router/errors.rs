use crate::history::HistoryError;
use thiserror::Error;

use super::RouterOptionsError;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("'{operation}' was called without an active router")]
    NoActiveRouter { operation: &'static str },
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
