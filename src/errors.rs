use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CmpError>;

#[derive(Error, Debug)]
pub enum CmpError {
    #[error("bad offset {token:?}: {reason}")]
    BadOffset { token: String, reason: String },
    #[error("failed to open {name}")]
    Open { name: String, source: io::Error },
    #[error("failed to seek {name}")]
    Seek { name: String, source: io::Error },
    #[error("failed to read {name}")]
    Read { name: String, source: io::Error },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CmpError {
    pub(crate) fn bad_offset(token: &str, reason: impl ToString) -> Self {
        Self::BadOffset {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}
