//! Error types for huffpack

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("frequency table is empty")]
    EmptyTable,

    #[error("input of {actual} bytes exceeds configured limit of {limit}")]
    InputTooLarge { limit: usize, actual: usize },

    #[error("corrupt container header: {0}")]
    Header(String),

    #[error("corrupt payload: {0}")]
    Payload(String),
}
