use thiserror::Error;

use crate::core::IndicatorId;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("column `{column}` missing from header row")]
    MissingColumn { column: String },

    #[error("row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    #[error("unknown indicator id {id}")]
    UnknownIndicator { id: IndicatorId },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("remote fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },
}
